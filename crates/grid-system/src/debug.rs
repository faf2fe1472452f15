//! Debug visualisation of a grid's layout.
//!
//! The grid does not draw anything itself. It walks its cells and hands world
//! positions to a [`DebugSink`] supplied by the application, which renders
//! them however it likes.

use grid_coords::WorldPoint;

use crate::grid::Grid2D;

/// Receiver for the lines and labels of a grid's debug overlay.
pub trait DebugSink {
    /// Draws a straight line between two world positions.
    fn draw_line(&mut self, from: WorldPoint, to: WorldPoint);

    /// Draws `text` at `position`, facing along `forward`.
    fn draw_label(&mut self, text: &str, position: WorldPoint, forward: WorldPoint);
}

impl<T> Grid2D<T> {
    /// Emits the grid outline and a `"x, y"` label at the center of every cell.
    ///
    /// Each cell contributes its lower and left edges; the upper and right
    /// edges of the whole grid are closed off at the end, so a `w x h` grid
    /// produces `w * h` labels and `2 * w * h + 2` lines.
    pub fn draw_debug<S: DebugSink + ?Sized>(&self, sink: &mut S) {
        let forward = self.converter().forward();
        let width = self.width() as i32;
        let height = self.height() as i32;

        for x in 0..width {
            for y in 0..height {
                let label = format!("{}, {}", x, y);
                sink.draw_label(&label, self.grid_to_world_center(x, y), forward);
                let corner = self.grid_to_world(x, y);
                sink.draw_line(corner, self.grid_to_world(x, y + 1));
                sink.draw_line(corner, self.grid_to_world(x + 1, y));
            }
        }

        sink.draw_line(self.grid_to_world(0, height), self.grid_to_world(width, height));
        sink.draw_line(self.grid_to_world(width, 0), self.grid_to_world(width, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_coords::CoordinateConverter;

    #[derive(Default)]
    struct RecordingSink {
        lines: Vec<(WorldPoint, WorldPoint)>,
        labels: Vec<(String, WorldPoint, WorldPoint)>,
    }

    impl DebugSink for RecordingSink {
        fn draw_line(&mut self, from: WorldPoint, to: WorldPoint) {
            self.lines.push((from, to));
        }

        fn draw_label(&mut self, text: &str, position: WorldPoint, forward: WorldPoint) {
            self.labels.push((text.to_string(), position, forward));
        }
    }

    #[test]
    fn test_counts() {
        let grid: Grid2D<u8> = Grid2D::vertical(4, 3, 1.0, WorldPoint::ZERO).unwrap();
        let mut sink = RecordingSink::default();
        grid.draw_debug(&mut sink);
        assert_eq!(sink.labels.len(), 12);
        assert_eq!(sink.lines.len(), 2 * 12 + 2);
    }

    #[test]
    fn test_labels_sit_at_cell_centers() {
        let grid: Grid2D<u8> = Grid2D::horizontal(2, 2, 2.0, WorldPoint::new(1.0, 0.0, 1.0)).unwrap();
        let mut sink = RecordingSink::default();
        grid.draw_debug(&mut sink);

        let (text, position, forward) = &sink.labels[1];
        assert_eq!(text, "0, 1");
        assert_eq!(*position, WorldPoint::new(2.0, 0.0, 4.0));
        assert_eq!(*forward, CoordinateConverter::Horizontal.forward());
    }

    #[test]
    fn test_outline_closes_at_far_corner() {
        let grid: Grid2D<u8> = Grid2D::vertical(2, 3, 1.0, WorldPoint::ZERO).unwrap();
        let mut sink = RecordingSink::default();
        grid.draw_debug(&mut sink);

        let far = WorldPoint::new(2.0, 3.0, 0.0);
        let closing = &sink.lines[sink.lines.len() - 2..];
        assert_eq!(closing[0], (WorldPoint::new(0.0, 3.0, 0.0), far));
        assert_eq!(closing[1], (WorldPoint::new(2.0, 0.0, 0.0), far));
    }

    #[test]
    fn test_works_through_trait_object() {
        let grid: Grid2D<u8> = Grid2D::vertical(1, 1, 1.0, WorldPoint::ZERO).unwrap();
        let mut recording = RecordingSink::default();
        let sink: &mut dyn DebugSink = &mut recording;
        grid.draw_debug(sink);
        assert_eq!(recording.lines.len(), 4);
    }
}
