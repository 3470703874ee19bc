//! Tile model, level state, and the turn loop shared across clients.
//!
//! `game-core` defines the canonical grid types and the single-player game
//! loop. Rendering and input are injected through [`engine::GameUi`], so the
//! loop itself never touches a terminal or window. All player mutation flows
//! through [`engine::GameLoop`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Input, apply_input};
pub use engine::{GameLoop, GameUi, LoopState, LoopSummary, run};
pub use env::{MapDimensions, Tile, TileGrid};
pub use error::{ErrorSeverity, GameError};
pub use state::{Level, Player, Position, Positioned};
