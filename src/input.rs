use crossterm::event::KeyCode;
use thiserror::Error;

use crate::snake::Snake;
use crate::vec2::Vec2;

/// Rejected direction token outside `l`/`u`/`r`/`d`.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("direction should be one among l/u/r/d, got {0:?}")]
pub struct DirectionTokenError(pub char);

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Parses a one-letter direction token.
    pub fn from_token(token: char) -> Result<Self, DirectionTokenError> {
        match token {
            'l' => Ok(Self::Left),
            'u' => Ok(Self::Up),
            'r' => Ok(Self::Right),
            'd' => Ok(Self::Down),
            other => Err(DirectionTokenError(other)),
        }
    }

    /// Returns the unit vector for this direction.
    ///
    /// The y axis grows downward, matching grid row order.
    #[must_use]
    pub fn vector(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Down => Vec2::new(0.0, 1.0),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }
}

/// High-level input events consumed by the front-end loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Restart,
    Quit,
}

/// Maps a key code to a game input, or `None` for unbound keys.
///
/// Two equivalent movement key-sets are supported: arrow keys and WASD.
/// Movement keys reduce to a direction token first, so key mapping and
/// [`Direction::from_token`] share one parse path.
#[must_use]
pub fn map_key(key: KeyCode) -> Option<GameInput> {
    let token = match key {
        KeyCode::Left | KeyCode::Char('a') => 'l',
        KeyCode::Up | KeyCode::Char('w') => 'u',
        KeyCode::Right | KeyCode::Char('d') => 'r',
        KeyCode::Down | KeyCode::Char('s') => 'd',
        KeyCode::Enter | KeyCode::Char(' ') => return Some(GameInput::Restart),
        KeyCode::Esc | KeyCode::Char('q') => return Some(GameInput::Quit),
        _ => return None,
    };

    Direction::from_token(token).ok().map(GameInput::Direction)
}

/// Single-slot latch allowing at most one direction change per step.
///
/// The latch starts closed, is armed exactly once per simulation step, and
/// is consumed by the first accepted direction. Direction events arriving
/// while the latch is closed are dropped, which is what bounds the snake to
/// one turn per cell moved.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputGate {
    armed: bool,
}

impl InputGate {
    #[must_use]
    pub fn new() -> Self {
        Self { armed: false }
    }

    /// Opens the latch for the next direction change.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Applies a requested direction change to `snake` if the latch is open.
    ///
    /// A request for the exact opposite of the snake's current direction is
    /// rejected without consuming the latch, so a later legal key within the
    /// same step still takes effect.
    pub fn apply(&mut self, requested: Direction, snake: &mut Snake) {
        if !self.armed {
            return;
        }
        if snake.direction() == requested.opposite().vector() {
            return;
        }

        snake.set_direction(requested);
        self.armed = false;
    }
}
