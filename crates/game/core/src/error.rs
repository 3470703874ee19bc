//! Common error infrastructure for game crates.
//!
//! This module provides shared types and traits used across error types in the
//! workspace. Domain-specific errors (e.g., map loading failures) are defined
//! in the crates that produce them and implement [`GameError`] so callers can
//! classify them uniformly.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failing operation has its own error type with specific variants
//! - **Rich Context**: Errors carry the grid position involved, when there is one
//! - **Severity Classification**: Errors are categorized by cause for diagnostics

use crate::state::Position;

/// Severity level of an error, used for categorization and diagnostics.
///
/// - **Validation**: Invalid input data (e.g., a malformed map file)
/// - **Fatal**: The environment failed underneath us (e.g., unreadable file)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown map glyph, spawn marker with no floor next to it
    Validation,

    /// Fatal error - cannot continue.
    ///
    /// Examples: map file missing or unreadable
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the input that caused this error is at fault.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all game errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on cause, not on how the caller reacts
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the grid position involved in this error, if any.
    fn position(&self) -> Option<Position> {
        None
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("probe")]
    struct Probe;

    impl GameError for Probe {
        fn severity(&self) -> ErrorSeverity {
            ErrorSeverity::Validation
        }
    }

    #[test]
    fn defaults_have_no_position_and_type_name_code() {
        let err = Probe;
        assert_eq!(err.position(), None);
        assert!(err.error_code().ends_with("Probe"));
        assert!(err.severity().is_validation());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
