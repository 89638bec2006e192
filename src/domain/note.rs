//! Note struct: a title/description pair admitted into the note list.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a note is built from an empty field.
///
/// Emptiness is an exact empty-string check; whitespace-only input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("description cannot be empty")]
    EmptyDescription,
}

/// A single memo.
///
/// Both fields are guaranteed non-empty. Equality is structural: two notes
/// with the same title and description compare equal.
///
/// # Examples
///
/// ```
/// use jot::domain::Note;
///
/// let note = Note::new("Groceries", "Milk, eggs").unwrap();
/// assert_eq!(note.title(), "Groceries");
/// assert!(Note::new("", "Milk").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNote")]
pub struct Note {
    title: String,
    description: String,
}

impl Note {
    /// Creates a note, rejecting an empty title or description.
    ///
    /// The title is checked first.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let description = description.into();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        Ok(Self { title, description })
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("title", &self.title)
            .field("description", &self.description)
            .finish()
    }
}

/// Single-line list rendering: `title: description`.
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Unvalidated wire shape; persisted payloads go through `Note::new`.
#[derive(Deserialize)]
struct RawNote {
    title: String,
    description: String,
}

impl TryFrom<RawNote> for Note {
    type Error = ValidationError;

    fn try_from(raw: RawNote) -> Result<Self, Self::Error> {
        Note::new(raw.title, raw.description)
    }
}
