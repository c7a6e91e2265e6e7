//! Grid coordinates and surface layout.
//!
//! The grid is a logical lattice of square cells laid over a drawing surface.
//! Both dimensions are forced odd so the spiral has a true center cell.
//! Positions are relative to the grid's bottom-left cell, with y growing
//! upward.

use std::ops::{Add, Neg, Sub};

use crate::error::{Error, Result};

/// A cell position on the grid.
///
/// Signed because a spiral on a non-square grid walks past the shorter
/// edges before the reset threshold is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i64,
    pub y: i64,
}

impl GridPos {
    /// Origin of the coordinate system (bottom-left cell).
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new position.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: the square ring `other` sits on around `self`.
    pub fn ring_distance(&self, other: &Self) -> u64 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }
}

impl Add for GridPos {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for GridPos {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for GridPos {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Drawing surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pixel rectangle of the dot drawn for one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// The logical grid the spiral is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    cell_size: u32,
    surface: Surface,
}

impl Grid {
    /// Fit a grid of `cell_size` pixel cells onto `surface`.
    ///
    /// Each axis holds `floor(surface / cell_size)` cells, bumped by one when
    /// even. Fails when the surface cannot hold a single cell on an axis.
    pub fn from_surface(surface: Surface, cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(Error::ZeroCellSize);
        }

        let cols = surface.width / cell_size;
        let rows = surface.height / cell_size;
        if cols == 0 || rows == 0 {
            return Err(Error::DegenerateGrid {
                width: surface.width,
                height: surface.height,
                cell_size,
            });
        }

        Ok(Self {
            width: force_odd(cols),
            height: force_odd(rows),
            cell_size,
            surface,
        })
    }

    /// Number of columns (always odd).
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows (always odd).
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    #[inline]
    pub const fn surface(&self) -> Surface {
        self.surface
    }

    /// The exact center cell, where every spiral starts.
    pub const fn center(&self) -> GridPos {
        GridPos::new((self.width / 2) as i64, (self.height / 2) as i64)
    }

    /// Length of the longer side.
    pub const fn max_side(&self) -> u32 {
        if self.width > self.height {
            self.width
        } else {
            self.height
        }
    }

    /// Number of cells in a square spiral covering the longer side.
    ///
    /// The spiral resets once its sequence value exceeds this.
    pub const fn capacity(&self) -> u64 {
        let side = self.max_side() as u64;
        side * side
    }

    /// Whether `pos` lies on the grid.
    pub fn contains(&self, pos: GridPos) -> bool {
        (0..self.width as i64).contains(&pos.x) && (0..self.height as i64).contains(&pos.y)
    }

    /// Pixel offset that centers the grid on the surface.
    ///
    /// Negative when forcing an odd size pushed the grid past the surface.
    pub fn offset(&self) -> (f64, f64) {
        let cell = self.cell_size as f64;
        (
            (self.surface.width as f64 - self.width as f64 * cell) / 2.0,
            (self.surface.height as f64 - self.height as f64 * cell) / 2.0,
        )
    }

    /// Pixel rectangle of the dot for `pos`: the middle half of its cell.
    pub fn cell_rect(&self, pos: GridPos) -> CellRect {
        let cell = self.cell_size as f64;
        let (ox, oy) = self.offset();
        CellRect {
            x: pos.x as f64 * cell + cell * 0.25 + ox,
            y: pos.y as f64 * cell + cell * 0.25 + oy,
            size: cell * 0.5,
        }
    }

    /// Every position on the grid, column by column.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> {
        let height = self.height as i64;
        (0..self.width as i64).flat_map(move |x| (0..height).map(move |y| GridPos::new(x, y)))
    }
}

#[inline]
const fn force_odd(n: u32) -> u32 {
    if n % 2 == 0 {
        n + 1
    } else {
        n
    }
}
