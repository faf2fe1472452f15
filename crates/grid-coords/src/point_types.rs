//! Point types shared by the grid and world coordinate frames.

use core::fmt;
use core::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a point in grid coordinates (cell indices).
///
/// Indices are signed: a world position left of or below the grid origin
/// converts to negative indices, which are simply outside every grid.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridPoint {
    /// The x-coordinate (column index) in the grid.
    pub x: i32,
    /// The y-coordinate (row index) in the grid.
    pub y: i32,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Represents a point (or direction) in 3D world coordinates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct WorldPoint {
    /// The x-coordinate in world units.
    pub x: f32,
    /// The y-coordinate in world units.
    pub y: f32,
    /// The z-coordinate in world units.
    pub z: f32,
}

impl WorldPoint {
    /// The world origin `(0, 0, 0)`.
    pub const ZERO: WorldPoint = WorldPoint::new(0.0, 0.0, 0.0);

    /// Creates a new `WorldPoint`.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for WorldPoint {
    type Output = WorldPoint;

    fn add(self, rhs: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for WorldPoint {
    type Output = WorldPoint;

    fn sub(self, rhs: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = WorldPoint;

    fn mul(self, rhs: f32) -> WorldPoint {
        WorldPoint::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
