//! Cross-frontend primitives for presenting a level.
//!
//! Houses configuration and view-model types that both the CLI and future
//! graphical clients can reuse.
pub mod config;
pub mod view_model;

pub use config::FrontendConfig;
pub use view_model::{GlyphMapper, MapView, PlayerView, PresentationMapper, TileView, ViewModel};
