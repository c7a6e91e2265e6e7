//! Ulam Spiral Core
//!
//! Walks a square spiral outward from the center of a grid, one cell per
//! step, and classifies the number placed on each cell as prime or composite.
//!
//! # Spiral Geometry
//!
//! The walk turns counter-clockwise (Right, Up, Left, Down) with leg lengths
//! 1, 1, 2, 2, 3, 3, ... After the value `(2k+1)^2` the walk has covered the
//! square of side `2k+1` around the center exactly once.
//!
//! # Grid Lifecycle
//!
//! The grid is fitted to a drawing surface with both sides forced odd. When
//! the value on the spiral exceeds the square of the longer side, or the
//! surface is resized, the walk restarts from the center with empty logs.
//!
//! # Example
//!
//! ```
//! use ulam_core::{GridPos, SpiralConfig, SpiralEngine, Surface};
//!
//! let config = SpiralConfig { cell_size_px: 10, ..SpiralConfig::default() };
//! let mut engine = SpiralEngine::new(&config, Surface::new(50, 50))?;
//!
//! let step = engine.step();
//! assert_eq!(step.position, GridPos::new(3, 2));
//! assert_eq!(step.value, 2);
//! assert!(step.is_prime);
//! # Ok::<(), ulam_core::Error>(())
//! ```

mod config;
mod direction;
mod engine;
mod error;
mod grid;
mod primality;

pub use config::{SpiralConfig, ENV_CELL_SIZE, ENV_DEBUG, ENV_SHOW_CURRENT, ENV_TICK_INTERVAL};
pub use direction::Direction;
pub use engine::{Phase, SpiralEngine, SpiralSnapshot, StepResult};
pub use error::{Error, Result};
pub use grid::{CellRect, Grid, GridPos, Surface};
pub use primality::is_prime;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spiral_matches_classic_diagram() {
        // 17 16 15 14 13
        // 18  5  4  3 12
        // 19  6  1  2 11
        // 20  7  8  9 10
        // 21 22 23 24 25
        let mut engine = SpiralEngine::with_grid(Grid::from_surface(Surface::new(5, 5), 1).unwrap());
        let center = engine.grid().center();

        let mut placed = vec![(1u64, center)];
        placed.extend(engine.steps().take(24).map(|s| (s.value, s.position)));

        let at = |value: u64| {
            let (_, pos) = placed.iter().find(|(v, _)| *v == value).unwrap();
            *pos - center
        };
        assert_eq!(at(2), GridPos::new(1, 0));
        assert_eq!(at(3), GridPos::new(1, 1));
        assert_eq!(at(5), GridPos::new(-1, 1));
        assert_eq!(at(7), GridPos::new(-1, -1));
        assert_eq!(at(10), GridPos::new(2, -1));
        assert_eq!(at(13), GridPos::new(2, 2));
        assert_eq!(at(17), GridPos::new(-2, 2));
        assert_eq!(at(21), GridPos::new(-2, -2));
        assert_eq!(at(25), GridPos::new(2, -2));
    }

    #[test]
    fn primes_on_first_rings() {
        let mut engine = SpiralEngine::with_grid(Grid::from_surface(Surface::new(5, 5), 1).unwrap());
        engine.steps().take(23).for_each(drop);

        // 2, 3, 5, 7, 11, 13, 17, 19, 23
        assert_eq!(engine.primes().len(), 9);
        assert_eq!(engine.composites().len(), 15);
    }
}
