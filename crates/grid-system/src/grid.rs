//! The grid container and its accessors.

#![warn(missing_docs)]

use grid_coords::{CoordinateConverter, GridPoint, WorldPoint};
use tracing::{debug, trace};

use crate::error::GridError;
use crate::observer::{GridValueChanged, Observers, SubscriptionId};

/// A fixed-size 2D grid of values addressable by cell index or world position.
///
/// Out-of-range cells are tolerated rather than rejected: reads return
/// `T::default()` and writes are dropped without notifying anyone. This lets
/// board scans probe neighbours past the edges without their own bounds checks.
/// Use [`Grid2D::get`] and [`Grid2D::try_set_value`] where an out-of-range
/// access is a bug.
pub struct Grid2D<T> {
    /// Width of the grid in cells
    width: usize,
    /// Height of the grid in cells
    height: usize,
    /// Edge length of one cell in world units
    cell_size: f32,
    /// World position of the lower corner of cell (0, 0)
    origin: WorldPoint,
    /// How grid axes map onto world axes
    converter: CoordinateConverter,
    /// Row-major cell values, `width * height` long
    cells: Vec<T>,
    observers: Observers<T>,
}

impl<T: Clone + Default> Grid2D<T> {
    /// Creates a new grid with every cell set to `T::default()`.
    ///
    /// # Arguments
    /// * `width` - Width of the grid in cells
    /// * `height` - Height of the grid in cells
    /// * `cell_size` - Edge length of one cell in world units
    /// * `origin` - World position of the lower corner of cell (0, 0)
    /// * `converter` - Orientation of the grid in world space
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The grid, or `InvalidArgument` if a dimension
    ///   or the cell size is not positive
    pub fn new(
        width: usize,
        height: usize,
        cell_size: f32,
        origin: WorldPoint,
        converter: CoordinateConverter,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidArgument("Width and height must be positive"));
        }
        if !(cell_size > 0.0 && cell_size.is_finite()) {
            return Err(GridError::InvalidArgument("Cell size must be positive and finite"));
        }
        // Cell indices are i32, so both dimensions must be addressable by one.
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(GridError::InvalidArgument("Grid dimensions exceed the addressable range"));
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::InvalidArgument("Grid dimensions too large, would cause overflow"))?;

        debug!(width, height, cell_size, %origin, %converter, "Creating grid");

        Ok(Grid2D {
            width,
            height,
            cell_size,
            origin,
            converter,
            cells: vec![T::default(); len],
            observers: Observers::default(),
        })
    }

    /// Creates a grid standing up in front of the viewer (grid y along world y).
    pub fn vertical(
        width: usize,
        height: usize,
        cell_size: f32,
        origin: WorldPoint,
    ) -> Result<Self, GridError> {
        Self::new(width, height, cell_size, origin, CoordinateConverter::Vertical)
    }

    /// Creates a grid lying on the ground plane (grid y along world z).
    pub fn horizontal(
        width: usize,
        height: usize,
        cell_size: f32,
        origin: WorldPoint,
    ) -> Result<Self, GridError> {
        Self::new(width, height, cell_size, origin, CoordinateConverter::Horizontal)
    }

    /// Gets the value of cell `(x, y)`, or `T::default()` if the cell is outside the grid.
    pub fn get_value(&self, x: i32, y: i32) -> T {
        self.get(x, y).cloned().unwrap_or_default()
    }

    /// Sets the value of cell `(x, y)` and notifies observers.
    ///
    /// Does nothing, and notifies nobody, if the cell is outside the grid.
    pub fn set_value(&mut self, x: i32, y: i32, value: T) {
        match self.index_of(x, y) {
            Some(index) => self.store(x, y, index, value),
            None => trace!(x, y, "Ignoring write outside grid"),
        }
    }

    /// Gets the value of the cell containing a world position.
    ///
    /// Positions outside the grid read as `T::default()`, exactly like
    /// out-of-range indices.
    pub fn get_value_at_world(&self, world_p: WorldPoint) -> T {
        let p = self.world_to_grid(world_p);
        self.get_value(p.x, p.y)
    }

    /// Sets the value of the cell containing a world position.
    ///
    /// Positions outside the grid are ignored, exactly like out-of-range indices.
    pub fn set_value_at_world(&mut self, world_p: WorldPoint, value: T) {
        let p = self.world_to_grid(world_p);
        self.set_value(p.x, p.y, value);
    }

    /// Sets the value of cell `(x, y)`, failing instead of ignoring a cell outside the grid.
    ///
    /// # Returns
    /// * `Result<(), GridError>` - Success, or `OutOfBounds` with the requested cell
    pub fn try_set_value(&mut self, x: i32, y: i32, value: T) -> Result<(), GridError> {
        let index = self.index_of(x, y).ok_or(GridError::OutOfBounds { x, y })?;
        self.store(x, y, index, value);
        Ok(())
    }

    fn store(&mut self, x: i32, y: i32, index: usize, value: T) {
        self.cells[index] = value;
        trace!(x, y, observers = self.observers.len(), "Grid value changed");
        self.notify(x, y, index);
    }
}

impl<T> Grid2D<T> {
    /// Width of the grid in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Edge length of one cell in world units.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World position of the lower corner of cell (0, 0).
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Orientation of the grid in world space.
    pub fn converter(&self) -> CoordinateConverter {
        self.converter
    }

    /// Whether `(x, y)` addresses a cell of this grid.
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        self.index_of(x, y).is_some()
    }

    /// Gets a reference to the value of cell `(x, y)`, or `None` if it is outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index_of(x, y).map(|index| &self.cells[index])
    }

    /// Converts a world position to the cell containing it.
    ///
    /// The result is not bounds checked; see [`Grid2D::is_valid_position`].
    pub fn world_to_grid(&self, world_p: WorldPoint) -> GridPoint {
        self.converter
            .world_to_grid(world_p, self.cell_size, self.origin)
    }

    /// World position of the lower corner of cell `(x, y)`.
    pub fn grid_to_world(&self, x: i32, y: i32) -> WorldPoint {
        self.converter
            .grid_to_world(x, y, self.cell_size, self.origin)
    }

    /// World position of the center of cell `(x, y)`.
    pub fn grid_to_world_center(&self, x: i32, y: i32) -> WorldPoint {
        self.converter
            .grid_to_world_center(x, y, self.cell_size, self.origin)
    }

    /// Gets the world coordinates of the grid's extent.
    ///
    /// # Returns
    /// * `(WorldPoint, WorldPoint)` - The lower corner of cell (0, 0) and the
    ///   upper corner of cell (width - 1, height - 1)
    pub fn world_bounds(&self) -> (WorldPoint, WorldPoint) {
        // Dimensions were checked against i32 at construction.
        (self.origin, self.grid_to_world(self.width as i32, self.height as i32))
    }

    /// Registers an observer called after every successful write, in registration order.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&GridValueChanged<'_, T>) + 'static,
    {
        let id = self.observers.add(Box::new(observer));
        debug!(?id, observers = self.observers.len(), "Grid observer subscribed");
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.observers.remove(id);
        debug!(?id, removed, "Grid observer unsubscribed");
        removed
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Calculates the index in the cell vector for a cell, if it is inside the grid.
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn notify(&mut self, x: i32, y: i32, index: usize) {
        if self.observers.is_empty() {
            return;
        }
        // Observers get `&self`, so they are moved out for the duration of the call.
        let mut observers = std::mem::take(&mut self.observers);
        let event = GridValueChanged {
            x,
            y,
            value: &self.cells[index],
            grid: self,
        };
        observers.notify(&event);
        self.observers = observers;
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Grid2D<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Grid2D ({}x{}, cell size: {:.3}, {})",
            self.width, self.height, self.cell_size, self.converter
        )?;
        writeln!(f, "Origin: {}", self.origin)?;

        // Top row first, so a vertical grid prints the way it is seen.
        for row in self.cells.chunks(self.width).rev() {
            for value in row {
                write!(f, "{:>3} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
