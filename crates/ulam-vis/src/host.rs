//! Drives a spiral engine onto a canvas.

use tracing::{debug, info};
use ulam_core::{GridPos, Result, SpiralConfig, SpiralEngine, StepResult};

use crate::canvas::{surface_for, Canvas, Glyph, Palette};

/// Clear screen and home the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Home the cursor without clearing.
const HOME: &str = "\x1b[H";

/// Terminal host for one spiral.
///
/// Paints each step as it happens and repaints from the engine's logs when
/// the grid resets or changes size.
pub struct Host {
    engine: SpiralEngine,
    canvas: Canvas,
    config: SpiralConfig,
    palette: Palette,
    needs_clear: bool,
    resets: u64,
}

impl Host {
    /// Create a host drawing onto a `cols` x `rows` terminal.
    pub fn new(config: SpiralConfig, cols: usize, rows: usize) -> Result<Self> {
        let engine = SpiralEngine::new(&config, surface_for(cols, rows)?)?;
        let canvas = Canvas::new(cols, rows);
        info!(
            cols,
            rows,
            grid_width = engine.grid().width(),
            grid_height = engine.grid().height(),
            "host ready"
        );

        let mut host = Self {
            engine,
            canvas,
            config,
            palette: Palette::default(),
            needs_clear: true,
            resets: 0,
        };
        host.redraw();
        Ok(host)
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Advance the spiral one step and paint it.
    pub fn tick(&mut self) -> StepResult {
        let result = self.engine.step();

        if result.reset {
            self.resets += 1;
            info!(resets = self.resets, value = result.value, "spiral filled the grid, starting over");
            self.redraw();
        } else {
            let glyph = if result.is_prime {
                Glyph::Prime
            } else {
                Glyph::Composite
            };
            self.canvas.paint(self.engine.grid(), result.position, glyph);
        }

        result
    }

    /// Fit a new terminal size. The spiral restarts on the new grid.
    ///
    /// On error the host keeps its previous size and spiral.
    pub fn resize(&mut self, cols: usize, rows: usize) -> Result<()> {
        self.engine.resize(surface_for(cols, rows)?)?;
        self.canvas = Canvas::new(cols, rows);
        debug!(cols, rows, "host resized");
        self.redraw();
        Ok(())
    }

    /// Repaint the canvas from the engine's logs and schedule a screen clear.
    pub fn redraw(&mut self) {
        self.canvas.clear();
        let grid = *self.engine.grid();

        if self.config.debug {
            for pos in grid.cells() {
                self.canvas.paint(&grid, pos, Glyph::Backdrop);
            }
        }
        for &pos in self.engine.composites() {
            self.canvas.paint(&grid, pos, Glyph::Composite);
        }
        for &pos in self.engine.primes() {
            self.canvas.paint(&grid, pos, Glyph::Prime);
        }
        self.needs_clear = true;
    }

    /// Render the next frame as terminal output.
    ///
    /// The first frame after a redraw clears the screen; later frames only
    /// home the cursor and overwrite.
    pub fn frame(&mut self) -> String {
        let current = if self.config.show_current {
            self.canvas.locate(self.engine.grid(), self.engine.position())
        } else {
            None
        };
        let overlay = if self.config.debug {
            self.debug_lines()
        } else {
            Vec::new()
        };

        let prefix = if std::mem::take(&mut self.needs_clear) {
            CLEAR_SCREEN
        } else {
            HOME
        };
        let mut out = String::from(prefix);
        out.push_str(&self.canvas.render(&self.palette, current, &overlay));
        out
    }

    /// State overlay shown in debug mode.
    pub fn debug_lines(&self) -> Vec<String> {
        let snap = self.engine.snapshot();
        vec![
            format!("Direction: {}", snap.direction),
            format!("Counter:   {}", snap.sequence),
            format!("Current:   {}", snap.steps_on_leg),
            format!("Limit:     {}", snap.leg_limit),
            format!("Repeat:    {}", snap.leg_completed_once),
        ]
    }

    #[inline]
    pub fn engine(&self) -> &SpiralEngine {
        &self.engine
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[inline]
    pub fn config(&self) -> &SpiralConfig {
        &self.config
    }

    /// Number of full-grid resets so far.
    #[inline]
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Cell under the highlight, if it is visible.
    pub fn current_cell(&self) -> Option<GridPos> {
        let pos = self.engine.position();
        self.engine.grid().contains(pos).then_some(pos)
    }
}
