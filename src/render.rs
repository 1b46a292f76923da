use std::fmt;

use crate::simulation::{Cell, Grid};

/// Glyph for an alive cell
pub const ALIVE_GLYPH: char = '█';
/// Glyph for a dead cell
pub const DEAD_GLYPH: char = ' ';

/// Brightness ramp for field values, from brightest to darkest with its lower bounds
const FIELD_RAMP: [(f64, char); 5] = [
    (0.8, '█'),
    (0.5, '▓'),
    (0.2, '▒'),
    (-0.2, '░'),
    (-0.5, '·'),
];

pub fn cell_glyph(cell: Cell) -> char {
    if cell.is_alive() {
        ALIVE_GLYPH
    } else {
        DEAD_GLYPH
    }
}

/// One line per row, one glyph per cell, rows joined by `\n` with no trailing newline
pub fn to_ascii(grid: &Grid) -> String {
    let capacity = (grid.width() + 1) * grid.height() * ALIVE_GLYPH.len_utf8();
    let mut out = String::with_capacity(capacity);
    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        out.extend(row.iter().map(|&cell| cell_glyph(cell)));
    }
    out
}

/// Map a field value in [-1, 1] to a shade glyph
pub fn value_to_glyph(value: f64) -> char {
    FIELD_RAMP
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map_or(' ', |&(_, glyph)| glyph)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_ascii(self))
    }
}
