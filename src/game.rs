use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::food::Food;
use crate::input::{Direction, InputGate};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Complete mutable simulation state for one session.
///
/// Restart is reconstruction: a finished game is replaced wholesale, never
/// revived in place.
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    board: Board,
    gate: InputGate,
    rng: StdRng,
}

impl Game {
    /// Creates a session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::new_with_seed(board, rand::random())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(board: Board, seed: u64) -> Self {
        debug_assert!(board.cells() >= 6, "starting body needs a 6-cell row");

        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::starting_body();
        let food = Food::spawn(&mut rng, board, &snake);

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            board,
            gate: InputGate::new(),
            rng,
        }
    }

    /// Returns the board this session plays on.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Advances the simulation by one fixed step.
    ///
    /// Check order matters: self-collision ends the game before the food
    /// check runs, so food is only ever eaten by an un-collided head. The
    /// input latch re-opens only after the step's work is done.
    pub fn step(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.snake.advance(self.board);

        if self.snake.self_collision() {
            self.status = GameStatus::GameOver;
            return;
        }

        if self.snake.head() == self.food.position {
            self.score += 1;
            self.snake.request_growth();
            self.food = Food::spawn(&mut self.rng, self.board, &self.snake);
        }

        self.gate.arm();
    }

    /// Routes a direction request through the per-step input latch.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Running {
            self.gate.apply(direction, &mut self.snake);
        }
    }

    /// Returns the final score once the session has ended.
    #[must_use]
    pub fn final_score(&self) -> Option<u32> {
        match self.status {
            GameStatus::GameOver => Some(self.score),
            GameStatus::Running => None,
        }
    }
}

/// Fixed-interval step boundary detection over a monotonic clock.
///
/// The front-end renders every frame and asks the clock whether a
/// simulation step is due, decoupling tick rate from display rate. Each
/// fired step records its own time as the reference for the next boundary.
#[derive(Debug, Clone, Copy)]
pub struct StepClock {
    interval: Duration,
    last_step: Instant,
}

impl StepClock {
    /// Creates a clock firing `ticks_per_second` times per second,
    /// referenced from `now`.
    #[must_use]
    pub fn new(ticks_per_second: u32, now: Instant) -> Self {
        debug_assert!(ticks_per_second > 0);

        Self {
            interval: Duration::from_secs_f64(1.0 / f64::from(ticks_per_second)),
            last_step: now,
        }
    }

    /// Returns true when a step boundary has been reached, and records
    /// `now` as the new reference.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_step) >= self.interval {
            self.last_step = now;
            true
        } else {
            false
        }
    }
}
