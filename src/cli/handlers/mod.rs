//! Command handlers for the CLI.

mod add;
mod completions;
mod list;
mod remove;
mod show_edit;


use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::Note;
use crate::storage::StorageBackend;
use crate::store::{Change, NoteStore, StoreError, StoreObserver};

// Re-export public items
pub use add::handle_add;
pub use completions::handle_completions;
pub use list::handle_list;
pub use remove::handle_remove;
pub use show_edit::{handle_edit, handle_show};

// ===========================================
// Shared Utilities
// ===========================================

/// Re-rendered list, refreshed from store change notifications.
///
/// Handlers attach one when `--list` is given and print it only once the
/// command has succeeded.
#[derive(Debug, Clone, Default)]
pub(crate) struct ListView {
    rows: Rc<RefCell<Vec<String>>>,
}

impl ListView {
    pub(crate) fn attach<B: StorageBackend>(store: &mut NoteStore<B>) -> Self {
        let view = Self::default();
        store.subscribe(view.clone());
        view
    }

    pub(crate) fn rows(&self) -> Vec<String> {
        self.rows.borrow().clone()
    }

    pub(crate) fn print(&self) {
        print_rows(&self.rows());
    }
}

impl StoreObserver for ListView {
    fn on_change(&mut self, _change: &Change, notes: &[Note]) {
        *self.rows.borrow_mut() = render_rows(notes);
    }
}

/// Renders one line per note: right-aligned index, then `title: description`.
pub(crate) fn render_rows(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .enumerate()
        .map(|(index, note)| {
            let line = note.to_string().replace('\n', " ");
            format!("{:>3}  {}", index, truncate_str(&line, 72))
        })
        .collect()
}

pub(crate) fn print_rows(rows: &[String]) {
    if rows.is_empty() {
        println!("No notes yet.");
    } else {
        for row in rows {
            println!("{}", row);
        }
    }
}

/// Wraps a rejected mutation with the message shown to the user.
///
/// Stale positions are reported as-is; they already say what went wrong.
pub(crate) fn rejected(err: StoreError, action: &str) -> anyhow::Error {
    if err.is_stale_reference() {
        return err.into();
    }
    let message = match &err {
        StoreError::Validation(_) => format!("note not {action}: please fill in all fields"),
        _ => format!("note not {action}"),
    };
    anyhow::Error::new(err).context(message)
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
