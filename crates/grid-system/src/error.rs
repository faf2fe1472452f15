//! This module defines the error types used by the `grid-system` crate.

#![warn(missing_docs)]

/// Error type for grid operations.
///
/// The tolerant accessors (`get_value`, `set_value` and their world-space
/// forms) never return errors; only construction and the checked accessors do.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A construction parameter was rejected.
    /// This variant is returned when width, height or cell size is not positive,
    /// or when the dimensions cannot be addressed.
    InvalidArgument(&'static str),
    /// A checked accessor was given a cell outside the grid.
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
    },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GridError::OutOfBounds { x, y } => {
                write!(f, "Grid cell ({}, {}) is out of bounds", x, y)
            }
        }
    }
}

impl core::error::Error for GridError {}
