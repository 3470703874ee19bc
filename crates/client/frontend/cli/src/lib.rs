//! Terminal UI frontend for the dungeon game.
//!
//! This crate provides a terminal-based implementation of
//! [`game_core::GameUi`] for the game loop.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Borrows the level for one draw call at a time
//! - Does NOT own the level or the loop
//! - Blocks on the keyboard and hands back one decoded input per call

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use input::InputHandler;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
