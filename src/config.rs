use ratatui::style::Color;

/// Default board side length in cells.
pub const CELL_NUMBER: u16 = 20;

/// Smallest board the starting body fits on with some headroom.
pub const MIN_BOARD_CELLS: u16 = 8;

/// Default simulation rate in steps per second.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;

/// Frame pacing for the render/input loop in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    /// Checkerboard floor, even cells.
    pub floor_primary: Color,
    /// Checkerboard floor, odd cells.
    pub floor_secondary: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub score: Color,
    pub border: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Beige and green garden palette with a checkerboard floor.
pub const THEME_GARDEN: Theme = Theme {
    floor_primary: Color::Rgb(0xf5, 0xf5, 0xdc),
    floor_secondary: Color::Rgb(0xd0, 0xe0, 0xb0),
    snake_head: Color::Rgb(0x1f, 0x5f, 0xd7),
    snake_body: Color::Rgb(0x36, 0x71, 0xe0),
    food: Color::Rgb(0x8b, 0x45, 0x13),
    score: Color::Rgb(0xeb, 0x5b, 0x00),
    border: Color::Rgb(0x6b, 0x8e, 0x23),
    menu_title: Color::Rgb(0xeb, 0x5b, 0x00),
    menu_footer: Color::DarkGray,
};

pub const GLYPH_HEAD_UP: &str = "▲";
pub const GLYPH_HEAD_DOWN: &str = "▼";
pub const GLYPH_HEAD_LEFT: &str = "◀";
pub const GLYPH_HEAD_RIGHT: &str = "▶";

pub const GLYPH_BODY_HORIZONTAL: &str = "─";
pub const GLYPH_BODY_VERTICAL: &str = "│";
pub const GLYPH_CORNER_UP_RIGHT: &str = "╰";
pub const GLYPH_CORNER_UP_LEFT: &str = "╯";
pub const GLYPH_CORNER_DOWN_RIGHT: &str = "╭";
pub const GLYPH_CORNER_DOWN_LEFT: &str = "╮";

pub const GLYPH_TAIL_UP: &str = "╹";
pub const GLYPH_TAIL_DOWN: &str = "╻";
pub const GLYPH_TAIL_LEFT: &str = "╸";
pub const GLYPH_TAIL_RIGHT: &str = "╺";
