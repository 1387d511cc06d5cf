//! # todo - a single-session task list for the terminal
//!
//! Add, edit, delete and filter tasks in a terminal user interface (TUI).
//! Tasks live only in memory and disappear when the UI is closed.
//!
//! ## Key Features
//!
//! - **Input bar**: name + description fields with an `[ Add ]` action
//! - **Status filter**: All / Completed / Not Completed
//! - **Task cards**: per-task status selector, edit and delete
//! - **Edit dialog**: modal overlay editing a copy of the task until saved
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the task list
//! todo
//!
//! # Start with only open tasks visible, pre-populated from a file
//! todo --filter not-completed --seed tasks.json
//!
//! # Record what happens during the session
//! RUST_LOG=debug todo --log-file todo.log
//! ```
//!
//! A seed file is a JSON array of `{"name", "description", "status"?}` objects.
//! It is read once at startup and never written back.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod logging;
pub mod session;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_ref() {
        if let Err(e) = logging::init_file_logging(path) {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Ui => cmd_ui(cli.seed.as_deref(), cli.filter),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}
