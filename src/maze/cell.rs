use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// State of a single cell in the grid.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridCell {
    /// Impassable. Every cell starts out as a wall.
    #[default]
    Wall,
    /// A carved, traversable cell.
    Path,
    /// The entry point, always at (1, 1).
    Start,
    /// The exit point, always at (width - 2, height - 2).
    End,
}

impl GridCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Whether the cell is part of the carved region.
    pub fn is_open(self) -> bool {
        !matches!(self, GridCell::Wall)
    }

    /// Two-character ASCII rendering, for terminals without emoji support.
    pub fn plain_symbol(self) -> &'static str {
        match self {
            GridCell::Wall => "##",
            GridCell::Path => "  ",
            GridCell::Start => "S ",
            GridCell::End => "E ",
        }
    }

    fn styled_symbol(self) -> StyledContent<&'static str> {
        match self {
            GridCell::Wall => "⬜".with(Color::White),
            GridCell::Path => "  ".with(Color::Reset),
            GridCell::Start => "🟩".with(Color::Green),
            GridCell::End => "🟥".with(Color::Red),
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = self.styled_symbol();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                GridCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
