//! NoteStore: the ordered note collection and its persistence round-trip.

mod observer;


use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{Note, NoteId, ValidationError};
use crate::storage::{StorageBackend, StorageError};

pub use observer::{Change, StoreObserver};

/// Preferences namespace holding the note list.
pub const NAMESPACE: &str = "notes_prefs";

/// Key under which the serialized note list is stored.
pub const NOTES_KEY: &str = "notes";

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was empty; nothing was changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The index is outside the current collection; nothing was changed.
    #[error("no note at index {index} (collection has {len})")]
    Index { index: usize, len: usize },

    /// The id no longer refers to a note in the collection.
    #[error("no note with id {id}")]
    UnknownId { id: NoteId },

    /// Writing to storage failed. The in-memory collection is intact.
    #[error("failed to persist notes")]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Returns true for errors caused by an out-of-date position or id.
    ///
    /// These leave the collection untouched, and retrying with a fresh
    /// position is the usual recovery.
    pub fn is_stale_reference(&self) -> bool {
        matches!(self, StoreError::Index { .. } | StoreError::UnknownId { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Owns the ordered list of notes and keeps storage in sync with it.
///
/// Insertion order is display order. Every successful mutation is applied in
/// memory, announced to observers, and then persisted in full. If that
/// persist fails the mutation stays in memory and the failure is returned as
/// [`StoreError::Storage`]; the next successful persist writes it out.
///
/// # Examples
///
/// ```
/// use jot::storage::MemoryPrefs;
/// use jot::store::NoteStore;
///
/// let mut store = NoteStore::open(MemoryPrefs::new());
/// store.add("Groceries", "Milk, eggs").unwrap();
/// assert_eq!(store.len(), 1);
/// assert!(store.add("", "x").is_err());
/// assert_eq!(store.len(), 1);
/// ```
pub struct NoteStore<B: StorageBackend> {
    backend: B,
    notes: Vec<Note>,
    // Parallel to `notes`.
    ids: Vec<NoteId>,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Creates an empty store without reading storage.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            notes: Vec::new(),
            ids: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Creates a store and loads whatever is persisted.
    pub fn open(backend: B) -> Self {
        let mut store = Self::new(backend);
        store.load();
        store
    }

    /// Registers an observer for subsequent changes.
    pub fn subscribe(&mut self, observer: impl StoreObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replaces the in-memory collection with the persisted one.
    ///
    /// An absent value loads as empty. So does an unreadable or malformed
    /// one, after logging a warning. Every loaded note gets a fresh id.
    pub fn load(&mut self) -> &[Note] {
        let notes = match self.backend.read(NAMESPACE, NOTES_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Note>>(&payload) {
                Ok(notes) => notes,
                Err(e) => {
                    warn!(error = %e, "stored notes are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read stored notes, starting empty");
                Vec::new()
            }
        };

        self.ids = notes.iter().map(|_| NoteId::new()).collect();
        self.notes = notes;
        debug!(count = self.notes.len(), "loaded notes");
        self.notify(Change::Loaded {
            count: self.notes.len(),
        });
        &self.notes
    }

    /// Writes the full collection to storage, overwriting the prior value.
    pub fn persist(&mut self) -> StoreResult<()> {
        let payload = serde_json::to_string(&self.notes).map_err(StorageError::Serialize)?;
        self.backend.write(NAMESPACE, NOTES_KEY, &payload)?;
        debug!(count = self.notes.len(), "persisted notes");
        Ok(())
    }

    /// Appends a note and persists.
    ///
    /// A [`StoreError::Storage`] error means the note *was* appended in
    /// memory and only the write failed. Call [`persist`](Self::persist) to
    /// retry the write; calling `add` again appends a second copy.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<Note> {
        let note = Note::new(title, description)?;
        let id = NoteId::new();
        debug!(id = %id.prefix(), "adding note");

        self.notes.push(note.clone());
        self.ids.push(id);
        self.notify(Change::Added {
            index: self.notes.len() - 1,
        });
        self.persist()?;
        Ok(note)
    }

    /// Replaces the note at `index` and persists. The entry keeps its id.
    ///
    /// Bounds are checked before the fields.
    pub fn update(
        &mut self,
        index: usize,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<Note> {
        self.check_index(index)?;
        let note = Note::new(title, description)?;
        debug!(index, id = %self.ids[index].prefix(), "updating note");

        self.notes[index] = note.clone();
        self.notify(Change::Updated { index });
        self.persist()?;
        Ok(note)
    }

    /// Removes the note at `index` and persists, returning the removed note.
    ///
    /// Every note after `index` moves down one position.
    pub fn remove(&mut self, index: usize) -> StoreResult<Note> {
        self.check_index(index)?;
        let id = self.ids.remove(index);
        let note = self.notes.remove(index);
        debug!(index, id = %id.prefix(), "removed note");

        self.notify(Change::Removed { index });
        self.persist()?;
        Ok(note)
    }

    /// Like [`update`](Self::update), addressing the note by id.
    pub fn update_by_id(
        &mut self,
        id: &NoteId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<Note> {
        let index = self.resolve(id)?;
        self.update(index, title, description)
    }

    /// Like [`remove`](Self::remove), addressing the note by id.
    pub fn remove_by_id(&mut self, id: &NoteId) -> StoreResult<Note> {
        let index = self.resolve(id)?;
        self.remove(index)
    }

    /// Returns the notes in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Returns the id of the note currently at `index`.
    pub fn id_at(&self, index: usize) -> Option<&NoteId> {
        self.ids.get(index)
    }

    /// Returns the current position of the note with `id`.
    pub fn position(&self, id: &NoteId) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    /// Returns the storage backend.
    ///
    /// Other keys in the same namespace belong to the caller; this is how an
    /// embedder reads them without opening a second backend over the same
    /// files.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index < self.notes.len() {
            Ok(())
        } else {
            Err(StoreError::Index {
                index,
                len: self.notes.len(),
            })
        }
    }

    fn resolve(&self, id: &NoteId) -> StoreResult<usize> {
        self.position(id)
            .ok_or_else(|| StoreError::UnknownId { id: id.clone() })
    }

    fn notify(&mut self, change: Change) {
        for observer in &mut self.observers {
            observer.on_change(&change, &self.notes);
        }
    }
}

impl<B: StorageBackend + fmt::Debug> fmt::Debug for NoteStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteStore")
            .field("backend", &self.backend)
            .field("notes", &self.notes)
            .field("observers", &self.observers.len())
            .finish()
    }
}
