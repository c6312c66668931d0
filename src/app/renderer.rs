use std::io::Write;

use crossterm::{queue, style::Print};

use crate::maze::Maze;

/// How cells are drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Coloured blocks, two columns per cell
    #[default]
    Styled,
    /// ASCII only, two columns per cell
    Plain,
}

pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Renderer { style }
    }

    /// Writes the whole maze, one grid row per line.
    pub fn render(&self, maze: &Maze, out: &mut impl Write) -> std::io::Result<()> {
        for row in maze.rows() {
            for &cell in row {
                match self.style {
                    RenderStyle::Styled => queue!(out, Print(cell))?,
                    RenderStyle::Plain => queue!(out, Print(cell.plain_symbol()))?,
                }
            }
            queue!(out, Print("\n"))?;
        }
        out.flush()
    }
}
