//! Spiral configuration.
//!
//! Only `cell_size_px` reaches the spiral itself (it sets the grid size and
//! therefore the reset threshold). The rest is read by hosts.

use std::time::Duration;

use crate::error::{Error, Result};

pub const ENV_CELL_SIZE: &str = "ULAM_CELL_SIZE";
pub const ENV_TICK_INTERVAL: &str = "ULAM_TICK_INTERVAL";
pub const ENV_SHOW_CURRENT: &str = "ULAM_SHOW_CURRENT";
pub const ENV_DEBUG: &str = "ULAM_DEBUG";

/// Configuration for a spiral and the host drawing it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpiralConfig {
    /// Side of one grid cell in surface pixels
    pub cell_size_px: u32,
    /// Seconds between steps
    pub tick_interval_secs: f64,
    /// Highlight the cell the spiral is currently on
    pub show_current: bool,
    /// Draw the full grid and the state overlay
    pub debug: bool,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            cell_size_px: 8,
            tick_interval_secs: 0.01,
            show_current: true,
            debug: false,
        }
    }
}

impl SpiralConfig {
    /// Settings for a small preview surface: bigger cells, slower ticks,
    /// no highlight.
    pub fn preview() -> Self {
        Self {
            cell_size_px: 16,
            tick_interval_secs: 0.05,
            show_current: false,
            debug: false,
        }
    }

    /// Create config from environment variables with defaults for unset ones.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_CELL_SIZE) {
            config.cell_size_px = parse_var(ENV_CELL_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_TICK_INTERVAL) {
            config.tick_interval_secs = parse_var(ENV_TICK_INTERVAL, &value)?;
        }
        if let Some(value) = lookup(ENV_SHOW_CURRENT) {
            config.show_current = parse_flag(ENV_SHOW_CURRENT, &value)?;
        }
        if let Some(value) = lookup(ENV_DEBUG) {
            config.debug = parse_flag(ENV_DEBUG, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values no host can run with.
    pub fn validate(&self) -> Result<()> {
        if self.cell_size_px == 0 {
            return Err(Error::ZeroCellSize);
        }
        self.tick_interval()?;
        Ok(())
    }

    /// The tick interval as a `Duration`.
    ///
    /// Fails unless the interval converts to a non-zero `Duration`, so values
    /// below one nanosecond or beyond `Duration::MAX` are rejected too.
    pub fn tick_interval(&self) -> Result<Duration> {
        match Duration::try_from_secs_f64(self.tick_interval_secs) {
            Ok(interval) if !interval.is_zero() => Ok(interval),
            _ => Err(Error::InvalidTickInterval(self.tick_interval_secs)),
        }
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidEnv {
        var,
        value: value.to_string(),
    })
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidEnv {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|&(k, v)| (k, v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let config = SpiralConfig::default();
        assert_eq!(config.cell_size_px, 8);
        assert_eq!(config.tick_interval_secs, 0.01);
        assert!(config.show_current);
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn preview_overrides() {
        let config = SpiralConfig::preview();
        assert_eq!(config.cell_size_px, 16);
        assert_eq!(config.tick_interval(), Ok(Duration::from_millis(50)));
        assert!(!config.show_current);
    }

    #[test]
    fn empty_lookup_gives_defaults() {
        let config = SpiralConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SpiralConfig::default());
    }

    #[test]
    fn lookup_overrides_every_field() {
        let config = SpiralConfig::from_lookup(lookup_from(&[
            (ENV_CELL_SIZE, "12"),
            (ENV_TICK_INTERVAL, " 0.25 "),
            (ENV_SHOW_CURRENT, "no"),
            (ENV_DEBUG, "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.cell_size_px, 12);
        assert_eq!(config.tick_interval_secs, 0.25);
        assert!(!config.show_current);
        assert!(config.debug);
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let err = SpiralConfig::from_lookup(lookup_from(&[(ENV_CELL_SIZE, "big")])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidEnv {
                var: ENV_CELL_SIZE,
                value: "big".to_string()
            }
        );

        let err = SpiralConfig::from_lookup(lookup_from(&[(ENV_DEBUG, "maybe")])).unwrap_err();
        assert!(matches!(err, Error::InvalidEnv { var: ENV_DEBUG, .. }));
    }

    #[test]
    fn zero_cell_size_rejected() {
        let err = SpiralConfig::from_lookup(lookup_from(&[(ENV_CELL_SIZE, "0")])).unwrap_err();
        assert_eq!(err, Error::ZeroCellSize);
    }

    #[test]
    fn bad_tick_intervals_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e-12, 1e30] {
            let config = SpiralConfig {
                tick_interval_secs: bad,
                ..SpiralConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidTickInterval(_))
            ));
            assert!(config.tick_interval().is_err());
        }
    }

    #[test]
    fn sub_nanosecond_interval_rejected_from_env() {
        let err = SpiralConfig::from_lookup(lookup_from(&[(ENV_TICK_INTERVAL, "1e-12")])).unwrap_err();
        assert!(matches!(err, Error::InvalidTickInterval(secs) if secs == 1e-12));

        let err = SpiralConfig::from_lookup(lookup_from(&[(ENV_TICK_INTERVAL, "1e30")])).unwrap_err();
        assert!(matches!(err, Error::InvalidTickInterval(_)));
    }

    #[test]
    fn one_nanosecond_is_smallest_interval() {
        let config = SpiralConfig {
            tick_interval_secs: 1e-9,
            ..SpiralConfig::default()
        };
        assert_eq!(config.tick_interval(), Ok(Duration::from_nanos(1)));
    }
}
