//! jot - a single ordered list of notes, persisted locally

pub mod cli;
pub mod domain;
pub mod logging;
pub mod storage;
pub mod store;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::debug;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_completions, handle_edit, handle_list, handle_remove, handle_show,
    },
};
use logging::{Verbosity, init_logging};
use storage::FilePrefs;
use store::NoteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version come through here and are not failures.
        Err(err) if !err.use_stderr() => {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            err.print()?;
            bail!("invalid arguments");
        }
    };
    init_logging(Verbosity::from_count(cli.verbose));

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());
    debug!(dir = %data_dir.display(), "opening note store");
    let mut store = NoteStore::open(FilePrefs::new(data_dir));

    match &cli.command {
        Command::Add(args) => handle_add(args, &mut store),
        Command::List(args) => handle_list(args, &store),
        Command::Show(args) => handle_show(args, &store),
        Command::Edit(args) => handle_edit(args, &mut store),
        Command::Remove(args) => handle_remove(args, &mut store),
        Command::Completions(args) => handle_completions(args),
    }
}
