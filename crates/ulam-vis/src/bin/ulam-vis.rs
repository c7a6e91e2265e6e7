//! Ulam spiral terminal animation.
//!
//! Config precedence: `--config` JSON file (or `ULAM_*` environment
//! variables when no file is given), then command line flags.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use ulam_core::SpiralConfig;
use ulam_vis::{run, Host, Output, RunOptions};

#[derive(Parser)]
#[command(name = "ulam-vis")]
#[command(version, about = "Animate the Ulam spiral in a terminal")]
struct Cli {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Terminal columns
    #[arg(long, env = "COLUMNS", default_value = "80")]
    cols: usize,

    /// Terminal rows
    #[arg(long, env = "LINES", default_value = "24")]
    rows: usize,

    /// Cell size in surface pixels (one column is 8 px wide, one row 16 px tall)
    #[arg(long)]
    cell_size: Option<u32>,

    /// Seconds between steps
    #[arg(long)]
    tick: Option<f64>,

    /// Start from the preview settings instead of the defaults
    #[arg(long)]
    preview: bool,

    /// Draw the full grid and the state overlay
    #[arg(long)]
    debug: bool,

    /// Do not highlight the current cell
    #[arg(long)]
    no_current: bool,

    /// Stop after this many steps
    #[arg(long)]
    steps: Option<u64>,

    /// Emit JSON events instead of drawing
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn spiral_config(&self) -> anyhow::Result<SpiralConfig> {
        let mut config = if let Some(path) = &self.config {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        } else if self.preview {
            SpiralConfig::preview()
        } else {
            SpiralConfig::from_env().context("reading ULAM_* environment")?
        };

        if let Some(cell_size) = self.cell_size {
            config.cell_size_px = cell_size;
        }
        if let Some(tick) = self.tick {
            config.tick_interval_secs = tick;
        }
        if self.debug {
            config.debug = true;
        }
        if self.no_current {
            config.show_current = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries frames or events
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "ulam_vis=info,ulam_core=info".into()))
        .init();

    let cli = Cli::parse();
    let config = cli.spiral_config()?;
    tracing::info!(?config, cols = cli.cols, rows = cli.rows, "starting spiral");

    let mut host = Host::new(config, cli.cols, cli.rows)
        .with_context(|| format!("cannot fit a spiral into {}x{} characters", cli.cols, cli.rows))?;

    let options = RunOptions {
        output: if cli.json { Output::Json } else { Output::Frames },
        max_steps: cli.steps,
    };

    let mut stdout = std::io::stdout().lock();
    run(&mut host, options, &mut stdout).await?;
    Ok(())
}
