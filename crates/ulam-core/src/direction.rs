//! Walking directions of the square spiral.
//!
//! The spiral turns counter-clockwise: Right, Up, Left, Down, then back to
//! Right. Up is +y, matching a drawing surface whose origin sits in the
//! bottom-left corner.

use crate::GridPos;

/// One of the four axis-aligned directions the spiral walks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// All directions in turning order.
    pub const ALL: [Self; 4] = [Self::Right, Self::Up, Self::Left, Self::Down];

    /// The direction taken after a leg completes.
    #[inline]
    pub const fn successor(self) -> Self {
        match self {
            Self::Right => Self::Up,
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
        }
    }

    /// Unit offset of a single step in this direction.
    #[inline]
    pub const fn offset(self) -> GridPos {
        match self {
            Self::Right => GridPos::new(1, 0),
            Self::Up => GridPos::new(0, 1),
            Self::Left => GridPos::new(-1, 0),
            Self::Down => GridPos::new(0, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::Up => "up",
            Self::Left => "left",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}
