use crate::state::{Position, Positioned};

/// One decoded input event from the rendering capability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Input {
    /// No conclusive key was read.
    #[default]
    None,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Quit,
}

impl Input {
    /// Grid offset this input applies to the player. Up is towards row 0.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Input::MoveUp => (0, -1),
            Input::MoveDown => (0, 1),
            Input::MoveLeft => (-1, 0),
            Input::MoveRight => (1, 0),
            Input::None | Input::Quit => (0, 0),
        }
    }

    pub const fn is_quit(self) -> bool {
        matches!(self, Input::Quit)
    }

    pub const fn is_movement(self) -> bool {
        matches!(
            self,
            Input::MoveUp | Input::MoveDown | Input::MoveLeft | Input::MoveRight
        )
    }
}

/// Applies a movement input to `entity`.
///
/// Returns the new position when the entity moved, `None` for inputs that do
/// not move anything. The destination is not validated against the grid.
pub fn apply_input<E: Positioned + ?Sized>(entity: &mut E, input: Input) -> Option<Position> {
    if !input.is_movement() {
        return None;
    }

    let (dx, dy) = input.delta();
    let next = entity.translate(dx, dy);
    tracing::debug!(%input, position = %next, "player moved");
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Player;

    #[test]
    fn up_decrements_y_only() {
        let mut player = Player::new(Position::new(4, 4));
        assert_eq!(apply_input(&mut player, Input::MoveUp), Some(Position::new(4, 3)));
        assert_eq!(player.position(), Position::new(4, 3));
    }

    #[test]
    fn each_direction_moves_one_cell() {
        let cases = [
            (Input::MoveDown, Position::new(1, 2)),
            (Input::MoveLeft, Position::new(0, 1)),
            (Input::MoveRight, Position::new(2, 1)),
        ];
        for (input, expected) in cases {
            let mut player = Player::new(Position::new(1, 1));
            apply_input(&mut player, input);
            assert_eq!(player.position(), expected, "{input}");
        }
    }

    #[test]
    fn none_and_quit_leave_player_in_place() {
        let mut player = Player::new(Position::new(1, 1));
        assert_eq!(apply_input(&mut player, Input::None), None);
        assert_eq!(apply_input(&mut player, Input::Quit), None);
        assert_eq!(player.position(), Position::new(1, 1));
    }

    #[test]
    fn only_quit_is_quit() {
        assert!(Input::Quit.is_quit());
        assert!(!Input::Quit.is_movement());
        for input in [Input::None, Input::MoveUp, Input::MoveDown, Input::MoveLeft, Input::MoveRight] {
            assert!(!input.is_quit(), "{input}");
        }
    }

    #[test]
    fn movement_is_not_clamped() {
        let mut player = Player::new(Position::ORIGIN);
        apply_input(&mut player, Input::MoveUp);
        apply_input(&mut player, Input::MoveLeft);
        assert_eq!(player.position(), Position::new(-1, -1));
    }
}
