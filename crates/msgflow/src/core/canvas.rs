//! Single-row character canvas
//!
//! Every diagram row (the vertical-bar template and each arrow drawn over it)
//! is a fixed-width run of cells addressed by display column.

use std::fmt;

/// One row of character cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCanvas {
    cells: Vec<char>,
}

impl LineCanvas {
    /// Create a blank row of the given width
    pub fn new(width: usize) -> Self {
        Self {
            cells: vec![' '; width],
        }
    }

    /// Current width in cells
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Grow the row with blanks until it is at least `min_width` wide
    pub fn ensure_width(&mut self, min_width: usize) {
        if min_width > self.cells.len() {
            self.cells.resize(min_width, ' ');
        }
    }

    /// Set a character at the specified column
    pub fn set_char(&mut self, x: usize, c: char) {
        self.ensure_width(x + 1);
        self.cells[x] = c;
    }

    /// Get the character at the specified column
    pub fn get_char(&self, x: usize) -> char {
        self.cells.get(x).copied().unwrap_or(' ')
    }

    /// Overwrite cells starting at `x` with `text`, one cell per char
    pub fn draw_text(&mut self, x: usize, text: &str) {
        for (i, c) in text.chars().enumerate() {
            self.set_char(x + i, c);
        }
    }

    /// Fill `length` cells starting at `x` with `c`
    pub fn draw_horizontal_line(&mut self, x: usize, length: usize, c: char) {
        for i in 0..length {
            self.set_char(x + i, c);
        }
    }
}

impl fmt::Display for LineCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cells {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
