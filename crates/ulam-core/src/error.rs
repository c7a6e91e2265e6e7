//! Error types for ulam-core.

use thiserror::Error;

/// Result type for ulam-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a spiral.
///
/// Stepping a configured spiral never fails; every variant here is
/// reported before the first step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Cell size of zero pixels.
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    /// Tick interval that does not convert to a non-zero `Duration`.
    #[error("tick interval must be a positive number of seconds, got {0}")]
    InvalidTickInterval(f64),

    /// The drawing surface does not fit in 32-bit pixel coordinates.
    #[error("surface {width}x{height} is too large to draw on")]
    SurfaceTooLarge { width: u64, height: u64 },

    /// The surface cannot hold a single cell along one axis.
    #[error("surface {width}x{height} px is too small for {cell_size} px cells")]
    DegenerateGrid {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    /// An environment variable held a value that failed to parse.
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}
