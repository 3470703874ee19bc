pub mod common;
pub mod entities;

pub use common::Position;
pub use entities::{Player, Positioned};
