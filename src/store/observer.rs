//! Change notifications for store subscribers.

use crate::domain::Note;

/// What a store mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A note was appended at `index`.
    Added { index: usize },
    /// The note at `index` was replaced.
    Updated { index: usize },
    /// The note at `index` was removed; later notes shifted down by one.
    Removed { index: usize },
    /// The collection was replaced from storage.
    Loaded { count: usize },
}

/// Receives a notification after every in-memory mutation.
///
/// Observers get the change and a view of the collection as it now stands,
/// so a presentation layer can re-render without holding a reference to the
/// store's state.
pub trait StoreObserver {
    fn on_change(&mut self, change: &Change, notes: &[Note]);
}
