use std::io::{self, Stdout};
use std::panic;

use crossterm::ExecutableCommand;
use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode and alternate-screen guard for one run of the game.
///
/// [`TerminalSession::restore`] runs from three places: the drop path for
/// normal exits, a panic hook so backtraces print onto a usable screen,
/// and the tail of a failed [`TerminalSession::enter`].
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen.
    ///
    /// If any setup stage fails, the stages that already ran are undone
    /// before the error is returned.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        match Self::open_screen() {
            Ok(terminal) => {
                install_restore_on_panic();
                Ok(Self { terminal })
            }
            Err(error) => {
                Self::restore();
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }

    fn open_screen() -> io::Result<AppTerminal> {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?.execute(Hide)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Puts the terminal back into cooked mode, ignoring failures: every
    /// caller is already on an exit path.
    fn restore() {
        let _ = disable_raw_mode();
        let _ = io::stdout()
            .execute(Show)
            .and_then(|stdout| stdout.execute(LeaveAlternateScreen));
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        Self::restore();
    }
}

fn install_restore_on_panic() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        TerminalSession::restore();
        default_hook(panic_info);
    }));
}
