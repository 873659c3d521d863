//! Board module - manages the locked-cell grid
//!
//! The board is a `width x height` grid of booleans, `true` meaning the cell is
//! permanently occupied by a locked piece. Storage is a flat row-major `Vec`
//! allocated once; the dimensions never change after construction.
//! Coordinates: (x, y) with x growing to the right and y growing downward.
//! Row 0 is the spawn row.

use crate::types::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Build a board from text rows, `#` for a locked cell and anything else empty.
    ///
    /// All rows must have the same length. Meant for fixtures and tests.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        assert!(
            rows.iter().all(|r| r.chars().count() == width),
            "ragged board fixture"
        );
        let mut board = Self::new(width as u8, height as u8);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                board.cells[y * width + x] = ch == '#';
            }
        }
        board
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether (x, y) lies on the board
    #[inline(always)]
    pub fn contains(&self, x: i8, y: i8) -> bool {
        x >= 0 && y >= 0 && (x as u8) < self.width && (y as u8) < self.height
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> usize {
        assert!(
            self.contains(x, y),
            "board access out of bounds: ({x}, {y}) on {}x{}",
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Whether (x, y) holds a locked cell.
    ///
    /// Callers bounds-check first; an out-of-range coordinate panics.
    #[inline(always)]
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Mark cells as permanently occupied.
    ///
    /// Placement is not re-validated. Every cell must be on the board.
    pub fn lock_cells(&mut self, cells: &[Point]) {
        for p in cells {
            let idx = self.index(p.x, p.y);
            self.cells[idx] = true;
        }
    }

    /// One row as a slice, left to right
    pub fn row(&self, y: usize) -> &[bool] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|&c| c)
    }

    /// Check if a row has no locked cell
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y).iter().all(|&c| !c)
    }

    /// Game-over condition: anything locked in the spawn row
    pub fn top_row_occupied(&self) -> bool {
        !self.is_row_empty(0)
    }

    /// Number of locked cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Remove row `y` and drop every row above it by one. Row 0 ends up empty.
    fn collapse_row(&mut self, y: usize) {
        let width = self.width as usize;

        self.cells[y * width..(y + 1) * width].fill(false);

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(false);
    }

    /// Clear all full rows and return how many were cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        self.clear_full_rows_with(|_| {})
    }

    /// Clear all full rows, calling `on_row(nth)` as each one is found.
    ///
    /// Rows are scanned top to bottom. Each clear shifts the rows above it
    /// before the scan moves on, so several clears in one pass compound on the
    /// updated grid. `nth` is 1-based within this pass.
    pub fn clear_full_rows_with(&mut self, mut on_row: impl FnMut(u32)) -> usize {
        let mut cleared = 0;
        for y in 0..self.height as usize {
            if self.is_row_full(y) {
                cleared += 1;
                self.collapse_row(y);
                on_row(cleared as u32);
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}
