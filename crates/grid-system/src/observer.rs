//! Change notification for grid writes.

use crate::grid::Grid2D;

/// Handle returned by [`Grid2D::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Event delivered to observers after a cell has been written.
///
/// `grid` is the grid that was written, so an observer can read neighbouring
/// cells while handling the change.
pub struct GridValueChanged<'a, T> {
    /// Column of the written cell.
    pub x: i32,
    /// Row of the written cell.
    pub y: i32,
    /// The value now stored in the cell.
    pub value: &'a T,
    /// The grid, already holding the new value.
    pub grid: &'a Grid2D<T>,
}

type Callback<T> = Box<dyn FnMut(&GridValueChanged<'_, T>)>;

/// Registered observers in registration order.
pub(crate) struct Observers<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Observers<T> {
    pub(crate) fn add(&mut self, callback: Callback<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(pos) => {
                // `remove`, not `swap_remove`: the remaining order is the notification order.
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn notify(&mut self, event: &GridValueChanged<'_, T>) {
        for (_, callback) in self.entries.iter_mut() {
            callback(event);
        }
    }
}
