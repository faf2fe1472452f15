//! A fixed-size 2D grid of arbitrary values, addressable by cell index or by
//! world position.
//!
//! The grid owns one [`CoordinateConverter`] which decides how cells are laid
//! out in world space, and notifies registered observers synchronously
//! whenever a cell is written.

pub mod debug;
pub mod error;
pub mod grid;
pub mod observer;

pub use debug::DebugSink;
pub use error::GridError;
pub use grid::Grid2D;
pub use observer::{GridValueChanged, SubscriptionId};

pub use grid_coords::{CoordinateConverter, GridPoint, WorldPoint};
