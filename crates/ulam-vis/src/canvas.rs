//! Character framebuffer for drawing the spiral in a terminal.
//!
//! Each terminal character covers `CHAR_WIDTH_PX` x `CHAR_HEIGHT_PX` pixels of
//! the drawing surface. Grid cells are mapped through the grid's dot
//! rectangle, so a cell lands on the character under the center of its dot.
//! Terminal rows count downward, grid rows upward; the canvas flips.

use ulam_core::{Error, Grid, GridPos, Result, Surface};

/// Surface pixels covered by one terminal column.
pub const CHAR_WIDTH_PX: u32 = 8;

/// Surface pixels covered by one terminal row.
pub const CHAR_HEIGHT_PX: u32 = 16;

/// What a character cell shows. Later variants win when cells collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Glyph {
    #[default]
    Empty,
    /// Unvisited grid cell, drawn in debug mode
    Backdrop,
    Composite,
    Prime,
}

/// ANSI styling for each glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub backdrop: &'static str,
    pub composite: &'static str,
    pub prime: &'static str,
    pub current: &'static str,
    pub text: &'static str,
}

impl Default for Palette {
    /// Black background, yellow primes, faint white composites.
    fn default() -> Self {
        Self {
            background: "\x1b[40m",
            backdrop: "\x1b[2;37m",
            composite: "\x1b[2;37m",
            prime: "\x1b[33m",
            current: "\x1b[1;33m",
            text: "\x1b[97m",
        }
    }
}

impl Palette {
    fn style(&self, glyph: Glyph) -> (&'static str, char) {
        match glyph {
            Glyph::Empty => ("", ' '),
            Glyph::Backdrop => (self.backdrop, '·'),
            Glyph::Composite => (self.composite, '•'),
            Glyph::Prime => (self.prime, '●'),
        }
    }
}

const RESET: &str = "\x1b[0m";

/// The drawing surface behind a `cols` x `rows` terminal.
///
/// Fails when the pixel size or the character count overflows, before any
/// buffer is allocated.
pub fn surface_for(cols: usize, rows: usize) -> Result<Surface> {
    let too_large = || Error::SurfaceTooLarge {
        width: (cols as u64).saturating_mul(CHAR_WIDTH_PX as u64),
        height: (rows as u64).saturating_mul(CHAR_HEIGHT_PX as u64),
    };

    let width = u32::try_from(cols)
        .ok()
        .and_then(|c| c.checked_mul(CHAR_WIDTH_PX))
        .ok_or_else(too_large)?;
    let height = u32::try_from(rows)
        .ok()
        .and_then(|r| r.checked_mul(CHAR_HEIGHT_PX))
        .ok_or_else(too_large)?;
    cols.checked_mul(rows).ok_or_else(too_large)?;

    Ok(Surface::new(width, height))
}

/// A grid of terminal characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cols: usize,
    rows: usize,
    cells: Vec<Glyph>,
}

impl Canvas {
    /// Create an empty canvas of `cols` x `rows` characters.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Glyph::Empty; cols * rows],
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The drawing surface this canvas stands for.
    pub fn surface(&self) -> Result<Surface> {
        surface_for(self.cols, self.rows)
    }

    /// Blank every character.
    pub fn clear(&mut self) {
        self.cells.fill(Glyph::Empty);
    }

    /// Terminal (column, row) showing `pos`, if it is on both grid and canvas.
    pub fn locate(&self, grid: &Grid, pos: GridPos) -> Option<(usize, usize)> {
        if !grid.contains(pos) {
            return None;
        }

        let rect = grid.cell_rect(pos);
        let cx = rect.x + rect.size / 2.0;
        let cy = rect.y + rect.size / 2.0;
        if cx < 0.0 || cy < 0.0 {
            return None;
        }

        let col = (cx / CHAR_WIDTH_PX as f64) as usize;
        let row_from_bottom = (cy / CHAR_HEIGHT_PX as f64) as usize;
        if col >= self.cols || row_from_bottom >= self.rows {
            return None;
        }
        Some((col, self.rows - 1 - row_from_bottom))
    }

    /// Draw `glyph` at `pos` unless a stronger glyph is already there.
    ///
    /// Returns whether `pos` was on the canvas.
    pub fn paint(&mut self, grid: &Grid, pos: GridPos, glyph: Glyph) -> bool {
        match self.locate(grid, pos) {
            Some((col, row)) => {
                let cell = &mut self.cells[row * self.cols + col];
                *cell = (*cell).max(glyph);
                true
            }
            None => false,
        }
    }

    /// Glyph at a terminal column and row.
    pub fn glyph(&self, col: usize, row: usize) -> Glyph {
        self.cells[row * self.cols + col]
    }

    /// Count characters showing `glyph`.
    pub fn count(&self, glyph: Glyph) -> usize {
        self.cells.iter().filter(|&&g| g == glyph).count()
    }

    /// Render to ANSI text, one line per row.
    ///
    /// `current` is drawn over whatever glyph it covers. `overlay` lines are
    /// written into the bottom-left corner, one row above the bottom edge.
    pub fn render(
        &self,
        palette: &Palette,
        current: Option<(usize, usize)>,
        overlay: &[String],
    ) -> String {
        let mut out = String::with_capacity(self.cols * self.rows * 4);
        let first_overlay_row = (self.rows.saturating_sub(1)).checked_sub(overlay.len());

        for row in 0..self.rows {
            out.push_str(palette.background);

            let text: Vec<char> = match first_overlay_row {
                Some(first) if row >= first && row < first + overlay.len() => {
                    overlay[row - first].chars().collect()
                }
                _ => Vec::new(),
            };

            for col in 0..self.cols {
                if let Some(&ch) = col.checked_sub(2).and_then(|i| text.get(i)) {
                    out.push_str(palette.text);
                    out.push(ch);
                    out.push_str(RESET);
                    out.push_str(palette.background);
                    continue;
                }

                let (style, ch) = if current == Some((col, row)) {
                    (palette.current, '●')
                } else {
                    palette.style(self.glyph(col, row))
                };

                if style.is_empty() {
                    out.push(ch);
                } else {
                    out.push_str(style);
                    out.push(ch);
                    out.push_str(RESET);
                    out.push_str(palette.background);
                }
            }

            out.push_str(RESET);
            if row + 1 < self.rows {
                out.push_str("\r\n");
            }
        }
        out
    }
}
