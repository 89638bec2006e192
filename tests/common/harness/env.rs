//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared by several test binaries
#![allow(dead_code)]

use super::JotCommand;
use jot::storage::FilePrefs;
use jot::store::{NAMESPACE, NoteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with temporary data and config directories.
///
/// Everything is removed when the TestEnv is dropped.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    data_dir: PathBuf,
    config_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    ///
    /// The data directory is not created up front; the first save creates it.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_dir = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_dir,
        }
    }

    /// Returns the data directory passed as `--dir`.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the notes preferences file.
    pub fn prefs_path(&self) -> PathBuf {
        FilePrefs::new(&self.data_dir).namespace_path(NAMESPACE)
    }

    /// Opens a store over the same files the CLI uses.
    pub fn store(&self) -> NoteStore<FilePrefs> {
        NoteStore::open(FilePrefs::new(&self.data_dir))
    }

    /// Seeds notes directly through the store.
    pub fn seed(&self, notes: &[(&str, &str)]) {
        let mut store = self.store();
        for (title, description) in notes {
            store.add(*title, *description).expect("Failed to seed note");
        }
    }

    /// Writes raw contents to the notes preferences file.
    pub fn write_prefs(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data directory");
        std::fs::write(self.prefs_path(), contents).expect("Failed to write prefs file");
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new()
            .config_home(&self.config_dir)
            .dir(&self.data_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
