//! Widgets composing the game screen.
pub mod footer;
pub mod header;
pub mod map;
