use grid_system::{CoordinateConverter, WorldPoint};

/// Orthographic mapping between the board's plane in world space and the window.
///
/// A vertical board is seen from the front, a horizontal one from above; in
/// both cases the board's second axis points up the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenProjection {
    converter: CoordinateConverter,
    pixels_per_unit: f32,
    /// World point drawn at the screen center.
    focus: WorldPoint,
    screen_center: (f32, f32),
}

impl ScreenProjection {
    /// Centers the world box `bounds` in a `screen_width x screen_height` window.
    pub fn centered_on(
        bounds: (WorldPoint, WorldPoint),
        converter: CoordinateConverter,
        pixels_per_unit: f32,
        screen_width: f32,
        screen_height: f32,
    ) -> Self {
        let (min_p, max_p) = bounds;
        Self {
            converter,
            pixels_per_unit,
            focus: (min_p + max_p) * 0.5,
            screen_center: (screen_width / 2.0, screen_height / 2.0),
        }
    }

    /// Pixels per world unit.
    pub fn scale(&self) -> f32 {
        self.pixels_per_unit
    }

    pub fn to_screen(&self, p: WorldPoint) -> (f32, f32) {
        let d = p - self.focus;
        let (across, up) = match self.converter {
            CoordinateConverter::Vertical => (d.x, d.y),
            CoordinateConverter::Horizontal => (d.x, d.z),
        };
        (
            self.screen_center.0 + across * self.pixels_per_unit,
            self.screen_center.1 - up * self.pixels_per_unit,
        )
    }

    /// Inverse of [`ScreenProjection::to_screen`]; the depth axis is the board plane's.
    pub fn to_world(&self, screen_x: f32, screen_y: f32) -> WorldPoint {
        let across = (screen_x - self.screen_center.0) / self.pixels_per_unit;
        let up = (self.screen_center.1 - screen_y) / self.pixels_per_unit;
        let f = self.focus;
        match self.converter {
            CoordinateConverter::Vertical => WorldPoint::new(f.x + across, f.y + up, f.z),
            CoordinateConverter::Horizontal => WorldPoint::new(f.x + across, f.y, f.z + up),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_system::{Grid2D, GridPoint};

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_board_center_is_screen_center() {
        let board: Grid2D<u8> = Grid2D::vertical(8, 8, 1.0, WorldPoint::new(4.0, 4.0, 0.0)).unwrap();
        let view = ScreenProjection::centered_on(board.world_bounds(), board.converter(), 50.0, 800.0, 600.0);
        let (sx, sy) = view.to_screen(WorldPoint::new(8.0, 8.0, 0.0));
        assert!((sx - 400.0).abs() < EPSILON);
        assert!((sy - 300.0).abs() < EPSILON);
    }

    #[test]
    fn test_up_the_board_is_up_the_screen() {
        let board: Grid2D<u8> = Grid2D::horizontal(4, 4, 1.0, WorldPoint::ZERO).unwrap();
        let view = ScreenProjection::centered_on(board.world_bounds(), board.converter(), 10.0, 100.0, 100.0);
        let (_, low) = view.to_screen(board.grid_to_world_center(0, 0));
        let (_, high) = view.to_screen(board.grid_to_world_center(0, 3));
        assert!(high < low);
    }

    #[test]
    fn test_click_lands_in_cell() {
        let origin = WorldPoint::new(-2.0, 1.0, 3.0);
        for converter in [CoordinateConverter::Vertical, CoordinateConverter::Horizontal] {
            let board: Grid2D<u8> = Grid2D::new(6, 5, 0.75, origin, converter).unwrap();
            let view = ScreenProjection::centered_on(board.world_bounds(), converter, 40.0, 640.0, 480.0);
            for x in 0..6 {
                for y in 0..5 {
                    let (sx, sy) = view.to_screen(board.grid_to_world_center(x, y));
                    let world = view.to_world(sx, sy);
                    assert_eq!(board.world_to_grid(world), GridPoint::new(x, y));
                }
            }
        }
    }

    #[test]
    fn test_to_world_stays_on_board_plane() {
        let origin = WorldPoint::new(1.0, 2.0, 3.0);
        let vertical = ScreenProjection::centered_on((origin, origin), CoordinateConverter::Vertical, 1.0, 10.0, 10.0);
        assert_eq!(vertical.to_world(0.0, 0.0).z, 3.0);
        let horizontal = ScreenProjection::centered_on((origin, origin), CoordinateConverter::Horizontal, 1.0, 10.0, 10.0);
        assert_eq!(horizontal.to_world(0.0, 0.0).y, 2.0);
    }
}
