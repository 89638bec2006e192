//! Core types: Note, NoteId (ULID), ValidationError

mod note;
mod note_id;

pub use note::{Note, ValidationError};
pub use note_id::NoteId;
