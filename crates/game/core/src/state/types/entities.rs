use super::Position;

/// Accessor contract for anything that occupies a grid position.
pub trait Positioned {
    fn position(&self) -> Position;

    fn set_position(&mut self, position: Position);

    /// Shifts the entity by `(dx, dy)` and returns the new position.
    fn translate(&mut self, dx: i32, dy: i32) -> Position {
        let next = self.position().offset(dx, dy);
        self.set_position(next);
        next
    }
}

/// The single controllable character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    position: Position,
}

impl Player {
    pub const fn new(position: Position) -> Self {
        Self { position }
    }
}

impl Positioned for Player {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
