use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use toroid_snake::board::Board;
use toroid_snake::config::{
    CELL_NUMBER, DEFAULT_TICKS_PER_SECOND, FRAME_INTERVAL_MS, MIN_BOARD_CELLS, THEME_GARDEN,
};
use toroid_snake::game::{Game, GameStatus, StepClock};
use toroid_snake::input::{GameInput, map_key};
use toroid_snake::renderer;
use toroid_snake::score::HighScoreStore;
use toroid_snake::terminal_runtime::TerminalSession;
use toroid_snake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(about = "Snake on a wrapping grid")]
struct Cli {
    /// Board side length in cells.
    #[arg(long, default_value_t = CELL_NUMBER,
          value_parser = clap::value_parser!(u16).range(i64::from(MIN_BOARD_CELLS)..=200))]
    board: u16,

    /// Simulation speed in steps per second.
    #[arg(long, default_value_t = DEFAULT_TICKS_PER_SECOND,
          value_parser = clap::value_parser!(u32).range(1..=60))]
    speed: u32,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let store = HighScoreStore::new();
    let high_score = match store.load() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("warning: could not read high score file: {error}");
            0
        }
    };

    let mut session = TerminalSession::enter()?;
    run(&mut session, &cli, &store, high_score)
}

fn run(
    session: &mut TerminalSession,
    cli: &Cli,
    store: &HighScoreStore,
    mut high_score: u32,
) -> io::Result<()> {
    let board = Board::new(cli.board);
    let mut game = new_game(board, cli.seed);
    let mut clock = StepClock::new(cli.speed, Instant::now());

    loop {
        let info = HudInfo {
            high_score,
            theme: &THEME_GARDEN,
        };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &game, &info))?;

        if let Some(input) = poll_input(Duration::from_millis(FRAME_INTERVAL_MS))? {
            match input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => game.request_direction(direction),
                GameInput::Restart if game.status == GameStatus::GameOver => {
                    game = new_game(board, cli.seed);
                    clock = StepClock::new(cli.speed, Instant::now());
                }
                GameInput::Restart => {}
            }
        }

        if clock.due(Instant::now()) {
            game.step();

            if game.final_score().is_some_and(|score| score > high_score) {
                high_score = game.score;
                if let Err(error) = store.save(high_score) {
                    eprintln!("Failed to save high score: {error}");
                }
            }
        }
    }

    Ok(())
}

fn new_game(board: Board, seed: Option<u64>) -> Game {
    match seed {
        Some(seed) => Game::new_with_seed(board, seed),
        None => Game::new(board),
    }
}

/// Waits up to `timeout` for one key press and maps it to a game input.
fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key.code)),
        _ => Ok(None),
    }
}
