use grid_system::{Grid2D, GridError, GridValueChanged, WorldPoint};
use rand::Rng;
use tracing::{debug, info};

use crate::settings::BoardSettings;

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gem {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl Gem {
    pub const ALL: [Gem; 5] = [Gem::Red, Gem::Green, Gem::Blue, Gem::Yellow, Gem::Purple];

    pub fn random<R: Rng>(rng: &mut R) -> Gem {
        Gem::ALL[rng.random_range(0..Gem::ALL.len())]
    }

    /// The gem after this one, wrapping around.
    pub fn next(self) -> Gem {
        let index = Gem::ALL.iter().position(|g| *g == self).unwrap_or(0);
        Gem::ALL[(index + 1) % Gem::ALL.len()]
    }
}

/// Cells hold `None` when empty.
pub type Board = Grid2D<Option<Gem>>;

/// Builds an empty board from settings and attaches a change logger.
pub fn new_board(settings: &BoardSettings) -> Result<Board, GridError> {
    let mut board = Board::new(
        settings.width,
        settings.height,
        settings.cell_size,
        settings.origin,
        settings.orientation,
    )?;
    board.subscribe(|e: &GridValueChanged<'_, Option<Gem>>| {
        debug!(x = e.x, y = e.y, value = ?e.value, "Board cell changed");
    });
    info!(
        width = board.width(),
        height = board.height(),
        orientation = %board.converter(),
        "Board created"
    );
    Ok(board)
}

/// Puts a random gem in every cell.
pub fn fill_random<R: Rng>(board: &mut Board, rng: &mut R) {
    for x in 0..board.width() as i32 {
        for y in 0..board.height() as i32 {
            board.set_value(x, y, Some(Gem::random(rng)));
        }
    }
}

/// Advances the gem under a world position to the next kind, filling an empty cell.
///
/// Positions outside the board are ignored by the grid.
pub fn cycle_at_world(board: &mut Board, world_p: WorldPoint) {
    let next = match board.get_value_at_world(world_p) {
        Some(gem) => gem.next(),
        None => Gem::Red,
    };
    board.set_value_at_world(world_p, Some(next));
}

/// Empties the cell under a world position.
pub fn clear_at_world(board: &mut Board, world_p: WorldPoint) {
    board.set_value_at_world(world_p, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_system::CoordinateConverter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;
    use std::rc::Rc;

    fn settings() -> BoardSettings {
        BoardSettings {
            width: 4,
            height: 3,
            cell_size: 1.0,
            origin: WorldPoint::ZERO,
            orientation: CoordinateConverter::Vertical,
            debug: false,
        }
    }

    #[test]
    fn test_gem_cycle_wraps() {
        let mut gem = Gem::Red;
        for _ in 0..Gem::ALL.len() {
            gem = gem.next();
        }
        assert_eq!(gem, Gem::Red);
        assert_eq!(Gem::Purple.next(), Gem::Red);
    }

    #[test]
    fn test_new_board_is_empty_and_observed() {
        let board = new_board(&settings()).unwrap();
        assert_eq!(board.observer_count(), 1);
        for x in 0..4 {
            for y in 0..3 {
                assert_eq!(board.get_value(x, y), None);
            }
        }
    }

    #[test]
    fn test_new_board_rejects_bad_settings() {
        let mut bad = settings();
        bad.cell_size = 0.0;
        assert!(matches!(new_board(&bad), Err(GridError::InvalidArgument(_))));
    }

    #[test]
    fn test_fill_random_fills_every_cell() {
        let mut board = new_board(&settings()).unwrap();
        let writes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&writes);
        board.subscribe(move |_: &GridValueChanged<'_, Option<Gem>>| counter.set(counter.get() + 1));

        fill_random(&mut board, &mut StdRng::seed_from_u64(7));
        assert_eq!(writes.get(), 12);
        for x in 0..4 {
            for y in 0..3 {
                assert!(board.get_value(x, y).is_some());
            }
        }
    }

    #[test]
    fn test_cycle_and_clear_at_world() {
        let mut board = new_board(&settings()).unwrap();
        let p = WorldPoint::new(2.5, 1.5, 0.0);

        cycle_at_world(&mut board, p);
        assert_eq!(board.get_value(2, 1), Some(Gem::Red));
        cycle_at_world(&mut board, p);
        assert_eq!(board.get_value(2, 1), Some(Gem::Green));

        clear_at_world(&mut board, p);
        assert_eq!(board.get_value(2, 1), None);
    }

    #[test]
    fn test_clicks_outside_board_are_ignored() {
        let mut board = new_board(&settings()).unwrap();
        let writes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&writes);
        board.subscribe(move |_: &GridValueChanged<'_, Option<Gem>>| counter.set(counter.get() + 1));

        cycle_at_world(&mut board, WorldPoint::new(-0.5, 1.0, 0.0));
        cycle_at_world(&mut board, WorldPoint::new(4.0, 1.0, 0.0));
        clear_at_world(&mut board, WorldPoint::new(1.0, 3.0, 0.0));
        assert_eq!(writes.get(), 0);
    }
}
