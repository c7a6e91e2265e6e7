//! Ulam Spiral Terminal Host
//!
//! Animates the spiral from `ulam-core` in a terminal, one step per tick.
//!
//! # Architecture
//!
//! - **Canvas**: Character framebuffer; maps grid cells through the surface
//!   layout and clips cells that fall off the grid
//! - **Host**: Owns engine and canvas; paints steps, clears on reset, rebuilds
//!   on resize
//! - **Events**: JSON event stream for piping into other renderers
//! - **Runner**: Timer-driven tick loop with Ctrl-C shutdown
//!
//! # Usage
//!
//! ```no_run
//! use ulam_core::SpiralConfig;
//! use ulam_vis::{run, Host, RunOptions};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut host = Host::new(SpiralConfig::preview(), 80, 24)?;
//!     run(&mut host, RunOptions::default(), &mut std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

mod canvas;
mod events;
mod host;
mod runner;

pub use canvas::{surface_for, Canvas, Glyph, Palette, CHAR_HEIGHT_PX, CHAR_WIDTH_PX};
pub use events::SpiralEvent;
pub use host::Host;
pub use runner::{run, Output, RunOptions};
