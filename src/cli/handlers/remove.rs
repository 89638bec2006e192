//! Remove command handler.

use anyhow::Result;

use super::{ListView, rejected};
use crate::cli::RemoveArgs;
use crate::storage::StorageBackend;
use crate::store::NoteStore;

pub fn handle_remove<B: StorageBackend>(args: &RemoveArgs, store: &mut NoteStore<B>) -> Result<()> {
    let view = args.list.then(|| ListView::attach(store));

    let removed = store
        .remove(args.index)
        .map_err(|e| rejected(e, "deleted"))?;

    println!("Note deleted: {}", removed);

    if let Some(view) = view {
        println!();
        view.print();
    }

    Ok(())
}
