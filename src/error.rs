//! Error types for ascii-life.

use thiserror::Error;

/// Errors raised when building or seeding a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A grid needs at least one row and one column.
    #[error("invalid grid dimension: {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The seeder draws origins from `[0, size - buffer)`, which is empty below the buffer.
    #[error("grid {width}x{height} is too small to seed, need at least {min} in each axis")]
    TooSmallToSeed {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// Smallest accepted size per axis.
        min: usize,
    },
}

/// Result alias using [`LifeError`].
pub type Result<T> = std::result::Result<T, LifeError>;
