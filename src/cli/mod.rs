//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// jot - a single list of titled notes, saved locally
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a new note at the end of the list
    Add(AddArgs),

    /// List notes in order
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a single note
    Show(ShowArgs),

    /// Change a note's title or description
    Edit(EditArgs),

    /// Delete a note (later notes move up one position)
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Note description
    pub description: String,

    /// Print the updated list afterwards
    #[arg(short, long)]
    pub list: bool,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Position of the note, as printed by `ls`
    pub index: usize,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Position of the note, as printed by `ls`
    pub index: usize,

    /// New title (keeps the current one if omitted)
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description (keeps the current one if omitted)
    #[arg(short = 'D', long)]
    pub description: Option<String>,

    /// Print the updated list afterwards
    #[arg(short, long)]
    pub list: bool,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Position of the note, as printed by `ls`
    pub index: usize,

    /// Print the updated list afterwards
    #[arg(short, long)]
    pub list: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
