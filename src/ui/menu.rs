use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;

/// Draws the terminal game-over popup with the final score.
///
/// The simulation has already stopped by the time this renders; restart is
/// handled by the caller reconstructing the game.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    final_score: u32,
    high_score: u32,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("GAME OVER"))
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body = vec![
        Line::from(format!("Eaten: {final_score}")),
        Line::from(format!("Best: {high_score}")),
        Line::from(""),
        Line::from("[Enter]/[Space] Restart"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("[Q]/[Esc] Quit"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.menu_footer)),
        footer_row,
    );
}

fn centered_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, popup, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);

    popup
}
