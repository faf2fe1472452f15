use grid_coords::*;

fn main() {
    let cell_size = 1.0;
    let origin = WorldPoint::new(4.0, 4.0, 0.0);

    for converter in [CoordinateConverter::Vertical, CoordinateConverter::Horizontal] {
        println!("{} grid (cell size {}, origin {}):", converter, cell_size, origin);
        println!("  Labels face: {}", converter.forward());

        for (x, y) in [(0, 0), (2, 3), (7, 7)] {
            let corner = converter.grid_to_world(x, y, cell_size, origin);
            let center = converter.grid_to_world_center(x, y, cell_size, origin);
            let back = converter.world_to_grid(center, cell_size, origin);
            println!(
                "  Cell ({}, {}): corner {} center {} -> back to ({})",
                x, y, corner, center, back
            );
        }

        // A point below the origin falls in a negative cell.
        let below = WorldPoint::new(3.5, 3.5, 3.5);
        println!(
            "  World {} -> grid ({})\n",
            below,
            converter.world_to_grid(below, cell_size, origin)
        );
    }
}
