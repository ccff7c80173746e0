use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::Game;

/// Supplemental values displayed alongside the play field.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub high_score: u32,
    pub theme: &'static Theme,
}

/// Renders the one-line score band and returns the remaining play area.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, game: &Game, info: &HudInfo) -> Rect {
    let [play_area, score_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let line = Line::from(format!(
        "Eaten: {}   Best: {}",
        game.score, info.high_score
    ));
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Right)
            .style(Style::new().fg(info.theme.score)),
        score_area,
    );

    play_area
}
