//! Add command handler.

use anyhow::Result;

use super::{ListView, rejected};
use crate::cli::AddArgs;
use crate::storage::StorageBackend;
use crate::store::NoteStore;

pub fn handle_add<B: StorageBackend>(args: &AddArgs, store: &mut NoteStore<B>) -> Result<()> {
    let view = args.list.then(|| ListView::attach(store));

    let note = store
        .add(args.title.as_str(), args.description.as_str())
        .map_err(|e| rejected(e, "saved"))?;

    println!("Note saved [{}]: {}", store.len() - 1, note);

    if let Some(view) = view {
        println!();
        view.print();
    }

    Ok(())
}
