use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::board::Board;
use crate::config::{
    GLYPH_BODY_HORIZONTAL, GLYPH_BODY_VERTICAL, GLYPH_CORNER_DOWN_LEFT, GLYPH_CORNER_DOWN_RIGHT,
    GLYPH_CORNER_UP_LEFT, GLYPH_CORNER_UP_RIGHT, GLYPH_HEAD_DOWN, GLYPH_HEAD_LEFT,
    GLYPH_HEAD_RIGHT, GLYPH_HEAD_UP, GLYPH_TAIL_DOWN, GLYPH_TAIL_LEFT, GLYPH_TAIL_RIGHT,
    GLYPH_TAIL_UP, Theme,
};
use crate::food::FoodSkin;
use crate::game::{Game, GameStatus};
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::render_game_over_menu;
use crate::vec2::Vec2;

/// Renders one full frame from immutable game state.
///
/// Runs once per display frame whether or not a simulation step fired; it
/// only ever reads the snake body, food, and score.
pub fn render(frame: &mut Frame<'_>, game: &Game, info: &HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, game, info);

    let board_area = centered_board_area(play_area, game.board());
    let block = Block::bordered().border_style(Style::new().fg(info.theme.border));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_floor(frame, inner, game.board(), info.theme);
    render_food(frame, inner, game, info.theme);
    render_snake(frame, inner, game, info.theme);

    if game.status == GameStatus::GameOver {
        render_game_over_menu(frame, board_area, game.score, info.high_score, info.theme);
    }
}

/// Alternating checkerboard floor color for a cell.
fn floor_color(theme: &Theme, x: u16, y: u16) -> ratatui::style::Color {
    if (x + y) % 2 == 0 {
        theme.floor_primary
    } else {
        theme.floor_secondary
    }
}

fn render_floor(frame: &mut Frame<'_>, inner: Rect, board: Board, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for y in 0..board.cells() {
        for x in 0..board.cells() {
            let Some((col, row)) = cell_to_terminal(inner, board, Vec2::new(x.into(), y.into()))
            else {
                continue;
            };
            buffer.set_string(col, row, " ", Style::new().bg(floor_color(theme, x, y)));
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let Some((col, row)) = cell_to_terminal(inner, game.board(), game.food.position) else {
        return;
    };

    let x = game.food.position.x as u16;
    let y = game.food.position.y as u16;
    frame.buffer_mut().set_string(
        col,
        row,
        food_glyph(game.food.skin),
        Style::new()
            .fg(theme.food)
            .bg(floor_color(theme, x, y))
            .add_modifier(Modifier::BOLD),
    );
}

fn food_glyph(skin: FoodSkin) -> &'static str {
    match skin {
        FoodSkin::Rat => "r",
        FoodSkin::Mouse => "m",
        FoodSkin::Chicken => "c",
        FoodSkin::Pug => "p",
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let board = game.board();
    let segments: Vec<Vec2> = game.snake.segments().collect();

    for (index, segment) in segments.iter().enumerate() {
        let Some((col, row)) = cell_to_terminal(inner, board, *segment) else {
            continue;
        };

        let glyph = if index == 0 {
            head_glyph(game.snake.direction())
        } else if index == segments.len() - 1 {
            tail_glyph(board.unit_delta(*segment, segments[index - 1]))
        } else {
            let toward_prev = board.unit_delta(*segment, segments[index - 1]);
            let toward_next = board.unit_delta(*segment, segments[index + 1]);
            body_glyph(toward_prev, toward_next)
        };

        let color = if index == 0 {
            theme.snake_head
        } else {
            theme.snake_body
        };
        let x = segment.x as u16;
        let y = segment.y as u16;
        frame.buffer_mut().set_string(
            col,
            row,
            glyph,
            Style::new().fg(color).bg(floor_color(theme, x, y)),
        );
    }
}

fn head_glyph(direction: Vec2) -> &'static str {
    if direction.y == -1.0 {
        GLYPH_HEAD_UP
    } else if direction.y == 1.0 {
        GLYPH_HEAD_DOWN
    } else if direction.x == -1.0 {
        GLYPH_HEAD_LEFT
    } else {
        GLYPH_HEAD_RIGHT
    }
}

fn tail_glyph(toward_body: Vec2) -> &'static str {
    if toward_body.y == -1.0 {
        GLYPH_TAIL_UP
    } else if toward_body.y == 1.0 {
        GLYPH_TAIL_DOWN
    } else if toward_body.x == -1.0 {
        GLYPH_TAIL_LEFT
    } else {
        GLYPH_TAIL_RIGHT
    }
}

/// Picks the straight or corner glyph for a middle segment from the unit
/// steps toward its two neighbors.
///
/// The deltas come from [`Board::unit_delta`], so a neighbor on the far
/// side of the wrap seam still reads as a single-cell step.
fn body_glyph(toward_prev: Vec2, toward_next: Vec2) -> &'static str {
    if toward_prev.y == 0.0 && toward_next.y == 0.0 {
        return GLYPH_BODY_HORIZONTAL;
    }
    if toward_prev.x == 0.0 && toward_next.x == 0.0 {
        return GLYPH_BODY_VERTICAL;
    }

    let up = toward_prev.y == -1.0 || toward_next.y == -1.0;
    let right = toward_prev.x == 1.0 || toward_next.x == 1.0;
    match (up, right) {
        (true, true) => GLYPH_CORNER_UP_RIGHT,
        (true, false) => GLYPH_CORNER_UP_LEFT,
        (false, true) => GLYPH_CORNER_DOWN_RIGHT,
        (false, false) => GLYPH_CORNER_DOWN_LEFT,
    }
}

fn centered_board_area(area: Rect, board: Board) -> Rect {
    // One terminal cell per board cell, plus the border.
    let width = board.cells().saturating_add(2).min(area.width);
    let height = board.cells().saturating_add(2).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn cell_to_terminal(inner: Rect, board: Board, position: Vec2) -> Option<(u16, u16)> {
    if !board.contains(position) {
        return None;
    }

    let col = inner.x.saturating_add(position.x as u16);
    let row = inner.y.saturating_add(position.y as u16);
    if col >= inner.right() || row >= inner.bottom() {
        return None;
    }

    Some((col, row))
}

#[cfg(test)]
mod tests {
    use crate::config::{
        GLYPH_BODY_HORIZONTAL, GLYPH_BODY_VERTICAL, GLYPH_CORNER_UP_RIGHT, GLYPH_HEAD_RIGHT,
        GLYPH_TAIL_LEFT,
    };
    use crate::vec2::Vec2;

    use super::{body_glyph, head_glyph, tail_glyph};

    #[test]
    fn straight_segments_pick_axis_glyphs() {
        let left = Vec2::new(-1.0, 0.0);
        let right = Vec2::new(1.0, 0.0);
        let up = Vec2::new(0.0, -1.0);
        let down = Vec2::new(0.0, 1.0);

        assert_eq!(body_glyph(left, right), GLYPH_BODY_HORIZONTAL);
        assert_eq!(body_glyph(up, down), GLYPH_BODY_VERTICAL);
    }

    #[test]
    fn corner_segment_joins_its_two_arms() {
        let up = Vec2::new(0.0, -1.0);
        let right = Vec2::new(1.0, 0.0);

        assert_eq!(body_glyph(up, right), GLYPH_CORNER_UP_RIGHT);
        assert_eq!(body_glyph(right, up), GLYPH_CORNER_UP_RIGHT);
    }

    #[test]
    fn head_and_tail_follow_their_direction() {
        assert_eq!(head_glyph(Vec2::new(1.0, 0.0)), GLYPH_HEAD_RIGHT);
        assert_eq!(tail_glyph(Vec2::new(-1.0, 0.0)), GLYPH_TAIL_LEFT);
    }
}
