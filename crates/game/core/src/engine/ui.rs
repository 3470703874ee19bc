//! Rendering capability consumed by the game loop.
use crate::action::Input;
use crate::state::Level;

/// Frontend abstraction for drawing a level and reading player input.
///
/// The loop calls [`draw`](GameUi::draw) and then [`input`](GameUi::input)
/// exactly once per iteration, on the caller's thread. `input` is expected to
/// block until a key (or other conclusive event) is available.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
/// - Test doubles that replay a scripted input sequence
pub trait GameUi {
    /// Backend failure (terminal I/O, closed window, exhausted script...).
    type Error;

    /// Presents the level. The level is borrowed only for this call.
    fn draw(&mut self, level: &Level) -> Result<(), Self::Error>;

    /// Blocks until the next input is available.
    ///
    /// Returns [`Input::None`] when an event was read but did not map to any
    /// command.
    fn input(&mut self) -> Result<Input, Self::Error>;
}

impl<U: GameUi + ?Sized> GameUi for &mut U {
    type Error = U::Error;

    fn draw(&mut self, level: &Level) -> Result<(), Self::Error> {
        (**self).draw(level)
    }

    fn input(&mut self) -> Result<Input, Self::Error> {
        (**self).input()
    }
}

impl<U: GameUi + ?Sized> GameUi for Box<U> {
    type Error = U::Error;

    fn draw(&mut self, level: &Level) -> Result<(), Self::Error> {
        (**self).draw(level)
    }

    fn input(&mut self) -> Result<Input, Self::Error> {
        (**self).input()
    }
}
