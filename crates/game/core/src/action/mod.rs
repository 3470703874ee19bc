//! Player intents and the transitions they drive.
//!
//! An [`Input`] is what the rendering capability hands back after each frame.
//! [`apply_input`] is the only place the player position changes.
mod input;

pub use input::{Input, apply_input};
