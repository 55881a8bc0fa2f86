//! Maps playfield pixels onto terminal cells.
//!
//! The playfield is scaled to the largest size that fits the terminal while
//! keeping its aspect ratio, then centered (letterboxed). Terminal cells are
//! taken to be twice as tall as they are wide.

use crate::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Height of a terminal cell in units of its width.
const CELL_ASPECT: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub origin_col: u16,
    pub origin_row: u16,
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    /// Largest centered viewport that fits a `term_cols` x `term_rows` terminal.
    pub fn fit(term_cols: u16, term_rows: u16) -> Self {
        let (tc, tr) = (term_cols.max(1) as i32, term_rows.max(1) as i32);
        // Playfield extent in cell units: PLAYFIELD_WIDTH wide, PLAYFIELD_HEIGHT / 2 tall.
        let field_w = PLAYFIELD_WIDTH;
        let field_h = PLAYFIELD_HEIGHT / CELL_ASPECT;

        let (cols, rows) = if tc * field_h > tr * field_w {
            ((tr * field_w / field_h).max(1), tr)
        } else {
            (tc, (tc * field_h / field_w).max(1))
        };

        Viewport {
            origin_col: ((tc - cols) / 2) as u16,
            origin_row: ((tr - rows) / 2) as u16,
            cols: cols as u16,
            rows: rows as u16,
        }
    }

    /// Terminal cell for a playfield pixel, or `None` when the pixel is off
    /// the playfield.
    pub fn project(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if !(0..PLAYFIELD_WIDTH).contains(&x) || !(0..PLAYFIELD_HEIGHT).contains(&y) {
            return None;
        }
        let col = x * self.cols as i32 / PLAYFIELD_WIDTH;
        let row = y * self.rows as i32 / PLAYFIELD_HEIGHT;
        Some((self.origin_col + col as u16, self.origin_row + row as u16))
    }

    /// Playfield y at the top of a viewport row.
    pub fn row_to_y(&self, row: u16) -> i32 {
        row as i32 * PLAYFIELD_HEIGHT / self.rows.max(1) as i32
    }

    /// One past the last terminal row of the viewport.
    pub fn bottom(&self) -> u16 {
        self.origin_row + self.rows
    }

    /// One past the last terminal column of the viewport.
    pub fn right(&self) -> u16 {
        self.origin_col + self.cols
    }
}
