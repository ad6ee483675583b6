//! Text frames for a maze grid

use std::fmt::Write;

use crossterm::style::Stylize;
use mz_core::{Grid, Maze};

use crate::display::{GlyphSet, cell_color};

/// Draw the whole grid, one text line per row.
///
/// With `colored` set, glyphs carry ANSI color codes.
pub fn render(grid: &Grid, glyphs: &dyn GlyphSet, colored: bool) -> String {
    let mut frame = String::with_capacity(grid.dimension() * (grid.dimension() * 3 + 1));
    for row in grid.rows() {
        for &state in row {
            let glyph = glyphs.cell_glyph(state);
            match cell_color(state) {
                Some(color) if colored => {
                    let _ = write!(frame, "{}", glyph.with(color));
                }
                _ => frame.push_str(glyph),
            }
        }
        frame.push('\n');
    }
    frame
}

/// Step counters shown under each frame
pub fn status_line(maze: &Maze) -> String {
    format!(
        "Generation Steps: {}, Pathfinding Steps: {}",
        maze.generation_steps(),
        maze.solve_steps()
    )
}
