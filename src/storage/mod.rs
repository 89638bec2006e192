//! Key-value preferences storage the note store persists through.

mod backend;
mod file;
mod memory;

pub use backend::{StorageBackend, StorageError, StorageResult};
pub use file::FilePrefs;
pub use memory::MemoryPrefs;
