use rand::Rng;

use crate::board::Board;
use crate::snake::Snake;
use crate::vec2::Vec2;

/// Creature variants the renderer can draw for a food item.
///
/// Purely presentational: picked at spawn time and never read by the
/// simulation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodSkin {
    Rat,
    Mouse,
    Chicken,
    Pug,
}

const SKINS: [FoodSkin; 4] = [
    FoodSkin::Rat,
    FoodSkin::Mouse,
    FoodSkin::Chicken,
    FoodSkin::Pug,
];

/// Food item currently active on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub position: Vec2,
    pub skin: FoodSkin,
}

impl Food {
    /// Creates a food item at `position` with a fixed skin, for tests.
    #[must_use]
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            skin: FoodSkin::Rat,
        }
    }

    /// Spawns a food item in a cell not occupied by the snake.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board: Board, snake: &Snake) -> Self {
        Self {
            position: place(rng, board, snake),
            skin: SKINS[rng.gen_range(0..SKINS.len())],
        }
    }
}

/// Picks a uniformly random unoccupied cell by rejection sampling.
///
/// Terminates with probability 1 while at least one cell is free; under the
/// game rules the snake can never cover the board before the game ends, so
/// a fully occupied board is asserted against rather than handled.
#[must_use]
pub fn place<R: Rng + ?Sized>(rng: &mut R, board: Board, snake: &Snake) -> Vec2 {
    assert!(
        snake.len() < board.total_cells(),
        "place: no free cells on a {0}×{0} board",
        board.cells(),
    );

    loop {
        let candidate = Vec2::new(
            f64::from(rng.gen_range(0..board.cells())),
            f64::from(rng.gen_range(0..board.cells())),
        );
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}
