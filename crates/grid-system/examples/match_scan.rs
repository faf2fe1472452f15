//! Fills a board with random gems and scans it for horizontal runs of three.
//!
//! The scan reads past both edges of every row; those reads return the default
//! (no gem) instead of failing, so the loop needs no bounds checks of its own.

use grid_system::{Grid2D, GridValueChanged, WorldPoint};
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

const GEMS: [char; 4] = ['R', 'G', 'B', 'Y'];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let origin = WorldPoint::new(4.0, 4.0, 0.0);
    let mut board: Grid2D<Option<char>> = match Grid2D::vertical(8, 8, 1.0, origin) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Failed to create board: {}", e);
            return;
        }
    };

    board.subscribe(|e: &GridValueChanged<'_, Option<char>>| {
        if e.value.is_none() {
            info!(x = e.x, y = e.y, "Cell cleared");
        }
    });

    let mut rng = rand::rng();
    for x in 0..8 {
        for y in 0..8 {
            board.set_value(x, y, Some(GEMS[rng.random_range(0..GEMS.len())]));
        }
    }

    let mut matches = Vec::new();
    for y in 0..8 {
        for x in 0..8 {
            let gem = board.get_value(x, y);
            let starts_run = board.get_value(x - 1, y) != gem;
            if gem.is_some()
                && starts_run
                && board.get_value(x + 1, y) == gem
                && board.get_value(x + 2, y) == gem
            {
                matches.push((x, y));
            }
        }
    }

    println!("Board:");
    for y in (0..8).rev() {
        let row: String = (0..8).map(|x| board.get_value(x, y).unwrap_or('.')).collect();
        println!("  {}", row);
    }

    println!("\nRuns of three or more start at: {:?}", matches);
    for (x, y) in matches {
        for dx in 0..3 {
            board.set_value(x + dx, y, None);
        }
    }

    // Clicking outside the board is harmless.
    board.set_value_at_world(WorldPoint::new(-10.0, 0.0, 0.0), None);
    let far = WorldPoint::new(100.0, 100.0, 0.0);
    println!("Value far outside the board: {:?}", board.get_value_at_world(far));
}
