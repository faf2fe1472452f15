//! Conversion between grid cells and world positions.
//!
//! A grid has two logical axes `(x, y)`. The converter decides which world
//! axes they lie along; the remaining world axis is held at the origin's value.

use core::fmt;
use libm::{fabsf, floorf, roundf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point_types::{GridPoint, WorldPoint};

/// Distance, in cells, within which a world position snaps onto a cell
/// boundary instead of flooring into the cell below it.
const BOUNDARY_SNAP: f32 = 1e-4;

/// Orientation of a grid in world space.
///
/// Both variants are stateless; every conversion takes the cell size and the
/// world position of cell `(0, 0)`'s lower corner.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateConverter {
    /// The grid stands up in front of the viewer: grid x → world x,
    /// grid y → world y, world z stays at the origin's z.
    #[default]
    Vertical,
    /// The grid lies flat on the ground: grid x → world x,
    /// grid y → world z, world y stays at the origin's y.
    Horizontal,
}

impl CoordinateConverter {
    /// World position of the lower corner of cell `(x, y)`.
    ///
    /// Indices outside any particular grid are accepted; the debug drawing
    /// uses `(width, height)` to close the outline.
    pub fn grid_to_world(self, x: i32, y: i32, cell_size: f32, origin: WorldPoint) -> WorldPoint {
        self.lay_out(x as f32, y as f32) * cell_size + origin
    }

    /// World position of the geometric center of cell `(x, y)`.
    pub fn grid_to_world_center(
        self,
        x: i32,
        y: i32,
        cell_size: f32,
        origin: WorldPoint,
    ) -> WorldPoint {
        self.lay_out(x as f32 + 0.5, y as f32 + 0.5) * cell_size + origin
    }

    /// Cell containing `world`.
    ///
    /// Each axis is `floor((world - origin) / cell_size)`, so offsets below the
    /// origin give negative indices and a position on a boundary belongs to the
    /// cell whose lower corner is that boundary. The coordinate on the world
    /// axis normal to the grid plane is ignored.
    ///
    /// # Arguments
    ///
    /// * `world`: Point in world frame.
    /// * `cell_size`: Edge length of one cell; must be positive.
    /// * `origin`: World position of cell `(0, 0)`'s lower corner.
    pub fn world_to_grid(self, world: WorldPoint, cell_size: f32, origin: WorldPoint) -> GridPoint {
        let local = world - origin;
        let (u, v) = match self {
            CoordinateConverter::Vertical => (local.x, local.y),
            CoordinateConverter::Horizontal => (local.x, local.z),
        };
        GridPoint::new(cell_index(u / cell_size), cell_index(v / cell_size))
    }

    /// Unit direction debug labels face for this orientation.
    pub fn forward(self) -> WorldPoint {
        match self {
            CoordinateConverter::Vertical => WorldPoint::new(0.0, 0.0, 1.0),
            CoordinateConverter::Horizontal => WorldPoint::new(1.0, 0.0, 0.0),
        }
    }

    /// Places grid-plane coordinates `(u, v)` on this orientation's world axes.
    fn lay_out(self, u: f32, v: f32) -> WorldPoint {
        match self {
            CoordinateConverter::Vertical => WorldPoint::new(u, v, 0.0),
            CoordinateConverter::Horizontal => WorldPoint::new(u, 0.0, v),
        }
    }
}

impl fmt::Display for CoordinateConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateConverter::Vertical => write!(f, "vertical"),
            CoordinateConverter::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Floors a position measured in cells to a cell index.
///
/// NaN lands on `i32::MIN` so it can never address a real cell; infinities
/// saturate through the cast.
fn cell_index(cells: f32) -> i32 {
    if cells.is_nan() {
        return i32::MIN;
    }
    let nearest = roundf(cells);
    if fabsf(cells - nearest) < BOUNDARY_SNAP {
        nearest as i32
    } else {
        floorf(cells) as i32
    }
}
