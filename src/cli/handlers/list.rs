//! List command handler.

use anyhow::Result;

use super::{print_rows, render_rows};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::storage::StorageBackend;
use crate::store::NoteStore;

pub fn handle_list<B: StorageBackend>(args: &ListArgs, store: &NoteStore<B>) -> Result<()> {
    let notes = store.notes();

    match args.format {
        OutputFormat::Human => {
            print_rows(&render_rows(notes));
            if !notes.is_empty() {
                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes
                .iter()
                .enumerate()
                .map(|(index, note)| NoteListing::new(index, note))
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
