//! Show and Edit command handlers.

use anyhow::{Result, bail};

use super::{ListView, rejected};
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{EditArgs, ShowArgs};
use crate::storage::StorageBackend;
use crate::store::{NoteStore, StoreError};

pub fn handle_show<B: StorageBackend>(args: &ShowArgs, store: &NoteStore<B>) -> Result<()> {
    let Some(note) = store.get(args.index) else {
        return Err(StoreError::Index {
            index: args.index,
            len: store.len(),
        }
        .into());
    };

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.title());
            println!();
            println!("{}", note.description());
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::new(args.index, note));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Applies an edit; fields not given keep their current value.
pub fn handle_edit<B: StorageBackend>(args: &EditArgs, store: &mut NoteStore<B>) -> Result<()> {
    if args.title.is_none() && args.description.is_none() {
        bail!("nothing to change: pass --title and/or --description");
    }

    let Some(current) = store.get(args.index).cloned() else {
        return Err(StoreError::Index {
            index: args.index,
            len: store.len(),
        }
        .into());
    };

    let title = args.title.as_deref().unwrap_or(current.title()).to_string();
    let description = args
        .description
        .as_deref()
        .unwrap_or(current.description())
        .to_string();

    let view = args.list.then(|| ListView::attach(store));

    let note = store
        .update(args.index, title, description)
        .map_err(|e| rejected(e, "updated"))?;

    println!("Note updated [{}]: {}", args.index, note);

    if let Some(view) = view {
        println!();
        view.print();
    }

    Ok(())
}
