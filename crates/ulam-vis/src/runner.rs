//! Tick loop: steps the host on a timer and writes frames or events.

use std::io::Write;

use anyhow::Context;
use tokio::time::{self, MissedTickBehavior};
use tracing::info;

use crate::events::SpiralEvent;
use crate::host::Host;

const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";

/// What the loop writes per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    /// ANSI frames for a terminal
    #[default]
    Frames,
    /// One JSON event per line
    Json,
}

/// Options for [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub output: Output,
    /// Stop after this many steps; run until interrupted when `None`
    pub max_steps: Option<u64>,
}

/// Step `host` once per configured tick until the step budget runs out or
/// Ctrl-C arrives. Returns the number of steps taken.
///
/// The terminal size is fixed for the whole run: the loop never calls
/// [`Host::resize`], so JSON output carries a single `Resized` event at
/// frame 0. Callers that track the terminal resize the host between runs.
pub async fn run<W: Write>(host: &mut Host, options: RunOptions, out: &mut W) -> anyhow::Result<u64> {
    let period = host.config().tick_interval().context("tick interval")?;
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    match options.output {
        Output::Frames => {
            write!(out, "{HIDE_CURSOR}{}", host.frame()).context("writing first frame")?;
            out.flush()?;
        }
        Output::Json => write_event(out, &SpiralEvent::resized(host.engine().grid(), 0))?,
    }

    let mut frame = 0u64;
    loop {
        if options.max_steps.is_some_and(|max| frame >= max) {
            break;
        }

        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => {
                info!(frame, "interrupted");
                break;
            }
        }

        let step = host.tick();
        frame += 1;

        match options.output {
            Output::Frames => {
                write!(out, "{}", host.frame()).context("writing frame")?;
                out.flush()?;
            }
            Output::Json => {
                for event in SpiralEvent::from_step(&step, host.engine().grid(), frame) {
                    write_event(out, &event)?;
                }
            }
        }
    }

    if options.output == Output::Frames {
        writeln!(out, "{SHOW_CURSOR}")?;
        out.flush()?;
    }

    info!(steps = frame, resets = host.resets(), "spiral stopped");
    Ok(frame)
}

fn write_event<W: Write>(out: &mut W, event: &SpiralEvent) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, event).context("encoding event")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulam_core::SpiralConfig;

    fn fast_host() -> Host {
        let config = SpiralConfig {
            cell_size_px: 16,
            tick_interval_secs: 0.001,
            ..SpiralConfig::default()
        };
        Host::new(config, 10, 5).unwrap()
    }

    #[test]
    fn json_output_streams_events() {
        let mut host = fast_host();
        let mut out = Vec::new();
        let options = RunOptions {
            output: Output::Json,
            max_steps: Some(25),
        };

        let steps = tokio_test::block_on(run(&mut host, options, &mut out)).unwrap();
        assert_eq!(steps, 25);

        let events: Vec<SpiralEvent> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        // Resized, 25 steps, one reset
        assert_eq!(events.len(), 27);
        assert!(matches!(events[0], SpiralEvent::Resized { grid_width: 5, .. }));
        assert!(matches!(
            events[1],
            SpiralEvent::Stepped { value: 2, is_prime: true, frame: 1, .. }
        ));
        assert!(matches!(events[26], SpiralEvent::Reset { frame: 25, .. }));
    }

    #[test]
    fn frame_output_restores_cursor() {
        let mut host = fast_host();
        let mut out = Vec::new();
        let options = RunOptions {
            output: Output::Frames,
            max_steps: Some(3),
        };

        let steps = tokio_test::block_on(run(&mut host, options, &mut out)).unwrap();
        assert_eq!(steps, 3);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(HIDE_CURSOR));
        assert!(text.trim_end().ends_with(SHOW_CURSOR));
        // first frame clears, the three tick frames home the cursor
        assert_eq!(text.matches("\x1b[2J").count(), 1);
        assert_eq!(host.engine().sequence(), 4);
    }

    #[test]
    fn zero_budget_takes_no_steps() {
        let mut host = fast_host();
        let mut out = Vec::new();
        let options = RunOptions {
            output: Output::Json,
            max_steps: Some(0),
        };

        let steps = tokio_test::block_on(run(&mut host, options, &mut out)).unwrap();
        assert_eq!(steps, 0);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
