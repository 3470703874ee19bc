//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FOOTER_HEIGHT` - Footer height in lines (default: 2, minimum: 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_FOOTER_HEIGHT") {
            config.ui.footer_height = height.max(1);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the header panel in lines (including borders).
    pub header_height: u16,
    /// Height of the key help footer in lines.
    pub footer_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            header_height: 3,
            footer_height: 2,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
