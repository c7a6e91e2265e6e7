//! The spiral walk.
//!
//! The engine walks the grid one cell per step in legs of length
//! 1, 1, 2, 2, 3, 3, ..., turning counter-clockwise after each leg. Every
//! cell is tagged with the next natural number and filed as prime or
//! composite. Once the number exceeds the capacity of the grid's longer side
//! the walk starts over from the center.
//!
//! # State machine
//!
//! - **Walking**: the current leg has steps left.
//! - **LegBoundary**: the current leg is complete; the next step turns first.
//! - **Resetting**: the walk ran past the grid capacity. Transient: the step
//!   that enters it rebuilds the start state before returning, so the machine
//!   cycles forever instead of terminating.

use tracing::{debug, trace};

use crate::config::SpiralConfig;
use crate::direction::Direction;
use crate::error::Result;
use crate::grid::{Grid, GridPos, Surface};
use crate::primality::is_prime;

/// Where the walk stands between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The current leg has steps left
    Walking,
    /// The next step turns before moving
    LegBoundary,
}

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepResult {
    /// Cell the walk moved onto
    pub position: GridPos,
    /// Number placed on that cell
    pub value: u64,
    /// Whether `value` is prime
    pub is_prime: bool,
    /// The walk turned before moving
    pub turned: bool,
    /// The walk exceeded the grid and restarted; hosts should clear
    pub reset: bool,
}

/// Diagnostic view of the walk state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralSnapshot {
    pub position: GridPos,
    pub direction: Direction,
    pub sequence: u64,
    pub steps_on_leg: u64,
    pub leg_limit: u64,
    pub leg_completed_once: bool,
    pub grid_width: u32,
    pub grid_height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SpiralState {
    position: GridPos,
    direction: Direction,
    leg_limit: u64,
    steps_on_leg: u64,
    leg_completed_once: bool,
    sequence: u64,
    primes: Vec<GridPos>,
    composites: Vec<GridPos>,
}

impl SpiralState {
    /// Start state: the center cell holds 1, which is not prime.
    fn fresh(grid: &Grid) -> Self {
        let center = grid.center();
        Self {
            position: center,
            direction: Direction::Right,
            leg_limit: 1,
            steps_on_leg: 0,
            leg_completed_once: false,
            sequence: 1,
            primes: Vec::new(),
            composites: vec![center],
        }
    }
}

/// Owns the spiral walk on one grid.
#[derive(Debug, Clone)]
pub struct SpiralEngine {
    grid: Grid,
    state: SpiralState,
}

impl SpiralEngine {
    /// Create an engine for `surface` using the cell size from `config`.
    pub fn new(config: &SpiralConfig, surface: Surface) -> Result<Self> {
        config.validate()?;
        let grid = Grid::from_surface(surface, config.cell_size_px)?;
        Ok(Self::with_grid(grid))
    }

    /// Create an engine on an already validated grid.
    pub fn with_grid(grid: Grid) -> Self {
        debug!(
            width = grid.width(),
            height = grid.height(),
            capacity = grid.capacity(),
            "spiral grid ready"
        );
        Self {
            state: SpiralState::fresh(&grid),
            grid,
        }
    }

    /// Advance the walk by one cell.
    pub fn step(&mut self) -> StepResult {
        let state = &mut self.state;

        let turned = state.steps_on_leg >= state.leg_limit;
        if turned {
            if state.leg_completed_once {
                state.leg_limit += 1;
                state.leg_completed_once = false;
            } else {
                state.leg_completed_once = true;
            }
            state.steps_on_leg = 0;
            state.direction = state.direction.successor();
            trace!(
                direction = %state.direction,
                leg_limit = state.leg_limit,
                "leg complete"
            );
        }

        state.steps_on_leg += 1;
        state.sequence += 1;
        state.position = state.position + state.direction.offset();

        let value = state.sequence;
        let position = state.position;
        let prime = is_prime(value);
        if prime {
            state.primes.push(position);
        } else {
            state.composites.push(position);
        }

        let reset = value > self.grid.capacity();
        if reset {
            debug!(value, capacity = self.grid.capacity(), "grid exhausted, restarting spiral");
            self.state = SpiralState::fresh(&self.grid);
        }

        StepResult {
            position,
            value,
            is_prime: prime,
            turned,
            reset,
        }
    }

    /// An endless iterator of steps.
    pub fn steps(&mut self) -> impl Iterator<Item = StepResult> + '_ {
        std::iter::repeat_with(move || self.step())
    }

    /// Restart the walk from the center of the current grid.
    pub fn reset(&mut self) {
        self.state = SpiralState::fresh(&self.grid);
    }

    /// Refit the grid to a new surface and restart.
    ///
    /// On error the engine keeps its grid and walk.
    pub fn resize(&mut self, surface: Surface) -> Result<()> {
        let grid = Grid::from_surface(surface, self.grid.cell_size())?;
        self.replace_grid(grid);
        Ok(())
    }

    /// Change the cell size and restart.
    ///
    /// On error the engine keeps its grid and walk.
    pub fn set_cell_size(&mut self, cell_size: u32) -> Result<()> {
        let grid = Grid::from_surface(self.grid.surface(), cell_size)?;
        self.replace_grid(grid);
        Ok(())
    }

    fn replace_grid(&mut self, grid: Grid) {
        debug!(
            width = grid.width(),
            height = grid.height(),
            cell_size = grid.cell_size(),
            "spiral grid rebuilt"
        );
        self.grid = grid;
        self.state = SpiralState::fresh(&self.grid);
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell holding the latest number.
    #[inline]
    pub fn position(&self) -> GridPos {
        self.state.position
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// The latest number placed.
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.state.sequence
    }

    #[inline]
    pub fn leg_limit(&self) -> u64 {
        self.state.leg_limit
    }

    #[inline]
    pub fn steps_on_leg(&self) -> u64 {
        self.state.steps_on_leg
    }

    #[inline]
    pub fn leg_completed_once(&self) -> bool {
        self.state.leg_completed_once
    }

    /// Cells holding primes, in visiting order.
    #[inline]
    pub fn primes(&self) -> &[GridPos] {
        &self.state.primes
    }

    /// Cells holding non-primes (the center included), in visiting order.
    #[inline]
    pub fn composites(&self) -> &[GridPos] {
        &self.state.composites
    }

    /// The phase the next step starts in.
    pub fn phase(&self) -> Phase {
        if self.state.steps_on_leg >= self.state.leg_limit {
            Phase::LegBoundary
        } else {
            Phase::Walking
        }
    }

    pub fn snapshot(&self) -> SpiralSnapshot {
        SpiralSnapshot {
            position: self.state.position,
            direction: self.state.direction,
            sequence: self.state.sequence,
            steps_on_leg: self.state.steps_on_leg,
            leg_limit: self.state.leg_limit,
            leg_completed_once: self.state.leg_completed_once,
            grid_width: self.grid.width(),
            grid_height: self.grid.height(),
        }
    }
}
