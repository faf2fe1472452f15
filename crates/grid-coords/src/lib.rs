#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for converting between 2D grid cells and 3D world positions."]
#![doc = ""]
#![doc = "This crate provides world and grid point types and a stateless converter"]
#![doc = "that maps grid cells onto a vertical (facing) or horizontal (ground) plane."]

pub mod converter;
pub mod point_types;

pub use converter::CoordinateConverter;
pub use point_types::{GridPoint, WorldPoint};
