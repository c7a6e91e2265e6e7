//! Spiral events for streaming to other renderers.

use serde::{Deserialize, Serialize};
use ulam_core::{Grid, GridPos, StepResult};

/// Events emitted while the spiral animates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpiralEvent {
    /// A grid was (re)built; everything drawn before is stale
    Resized {
        grid_width: u32,
        grid_height: u32,
        cell_size: u32,
        center: GridPos,
        frame: u64,
    },

    /// The walk moved onto a new cell
    Stepped {
        position: GridPos,
        value: u64,
        is_prime: bool,
        on_grid: bool,
        frame: u64,
    },

    /// The walk ran past the grid and restarted at the center
    Reset { center: GridPos, frame: u64 },
}

impl SpiralEvent {
    /// Get the frame number for this event.
    pub fn frame(&self) -> u64 {
        match self {
            SpiralEvent::Resized { frame, .. } => *frame,
            SpiralEvent::Stepped { frame, .. } => *frame,
            SpiralEvent::Reset { frame, .. } => *frame,
        }
    }

    /// Describe a freshly built grid.
    pub fn resized(grid: &Grid, frame: u64) -> Self {
        SpiralEvent::Resized {
            grid_width: grid.width(),
            grid_height: grid.height(),
            cell_size: grid.cell_size(),
            center: grid.center(),
            frame,
        }
    }

    /// Events produced by one step: the move, then a reset if one happened.
    pub fn from_step(step: &StepResult, grid: &Grid, frame: u64) -> Vec<Self> {
        let mut events = vec![SpiralEvent::Stepped {
            position: step.position,
            value: step.value,
            is_prime: step.is_prime,
            on_grid: grid.contains(step.position),
            frame,
        }];
        if step.reset {
            events.push(SpiralEvent::Reset {
                center: grid.center(),
                frame,
            });
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulam_core::{SpiralEngine, Surface};

    fn grid() -> Grid {
        Grid::from_surface(Surface::new(3, 3), 1).unwrap()
    }

    #[test]
    fn step_without_reset_is_one_event() {
        let mut engine = SpiralEngine::with_grid(grid());
        let step = engine.step();
        let events = SpiralEvent::from_step(&step, engine.grid(), 7);

        assert_eq!(
            events,
            vec![SpiralEvent::Stepped {
                position: GridPos::new(2, 1),
                value: 2,
                is_prime: true,
                on_grid: true,
                frame: 7,
            }]
        );
    }

    #[test]
    fn reset_follows_step() {
        let mut engine = SpiralEngine::with_grid(grid());
        let last = engine.steps().take(9).last().unwrap();
        assert!(last.reset);

        let events = SpiralEvent::from_step(&last, engine.grid(), 9);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SpiralEvent::Stepped { value: 10, on_grid: false, .. }));
        assert_eq!(
            events[1],
            SpiralEvent::Reset {
                center: GridPos::new(1, 1),
                frame: 9
            }
        );
    }

    #[test]
    fn serialized_with_type_tag() {
        let event = SpiralEvent::resized(&grid(), 0);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "Resized");
        assert_eq!(json["grid_width"], 3);
        assert_eq!(json["center"]["x"], 1);

        let back: SpiralEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back.frame(), 0);
    }
}
