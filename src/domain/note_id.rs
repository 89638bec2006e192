//! ULID-based handle for entries held by a note store.

use std::fmt;
use ulid::Ulid;

/// A session-scoped identifier for a note entry.
///
/// The store hands one out for every note it admits, whether by `add` or by
/// `load`. Ids are not persisted: reloading assigns fresh ones. They let a
/// caller keep a handle across other mutations and find out whether the note
/// it refers to still exists, instead of trusting a position that may have
/// shifted.
///
/// # Examples
///
/// ```
/// use jot::domain::NoteId;
///
/// let id = NoteId::new();
/// assert_eq!(id.to_string().len(), 26);
/// assert_eq!(id.prefix().len(), 10);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(Ulid);

impl NoteId {
    /// Creates a new NoteId with the current timestamp.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Returns the 10-character prefix of the ULID.
    ///
    /// Short enough for log lines; unique for ids minted at different
    /// milliseconds.
    pub fn prefix(&self) -> String {
        self.0.to_string()[..10].to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}
