//! Simulation core for a snake game on a square toroidal grid.
//!
//! The library half of the crate is fully headless: [`game::Game`] can be
//! constructed and stepped without a terminal, which is how the test suite
//! drives it. The binary wires the core to a ratatui front-end.

pub mod board;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
pub mod vec2;
