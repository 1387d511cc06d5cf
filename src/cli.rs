use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::fields::Filter;

/// Single-session task list in the terminal.
/// Nothing is saved: tasks live until the UI is closed.
#[derive(Parser)]
#[command(name = "todo", version, about = "Add, edit, delete and filter tasks in a terminal UI")]
pub struct Cli {
    /// Status filter to start with.
    #[arg(long, value_enum, default_value_t = Filter::All, global = true)]
    pub filter: Filter,

    /// JSON file of tasks to start the session with. Read once, never written.
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Write structured logs to this file (RUST_LOG controls the level).
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
