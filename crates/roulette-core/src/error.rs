//! Error types for the wheel core.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WheelError {
    /// A spin was requested with fewer than two items on the wheel.
    #[error("spinning requires at least 2 items, the wheel has {count}")]
    NotEnoughItems { count: usize },

    /// Winner resolution was asked to divide the circle into zero sectors.
    #[error("cannot resolve a winner on an empty wheel")]
    EmptyWheel,
}
