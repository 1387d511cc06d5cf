//! Command implementations for the CLI interface.

use std::path::Path;

use clap::Subcommand;
use clap_complete::{generate, Shell};
use tracing::info;

use crate::fields::Filter;
use crate::store::TaskStore;
use crate::tui::app::App;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive task list (the default).
    Ui,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Build the session's store, seeded from `seed` when given.
pub fn load_store(seed: Option<&Path>) -> crate::error::Result<TaskStore> {
    match seed {
        Some(path) => TaskStore::from_seed_file(path),
        None => Ok(TaskStore::new()),
    }
}

/// Launch the terminal user interface.
pub fn cmd_ui(seed: Option<&Path>, filter: Filter) {
    let store = match load_store(seed) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to load seed file: {e}");
            std::process::exit(1);
        }
    };

    info!(tasks = store.len(), filter = %filter, "session started");
    let mut app = App::new(store, filter);
    if let Err(e) = run_tui(&mut app) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
    info!("session ended");
}

/// Print shell completions to stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::cli::Cli;

    #[test]
    fn test_cli_defaults_to_ui_with_all_filter() {
        let cli = Cli::parse_from(["todo"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.filter, Filter::All);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_cli_parses_filter_and_seed() {
        let cli = Cli::parse_from(["todo", "--filter", "not-completed", "--seed", "tasks.json", "ui"]);
        assert!(matches!(cli.command, Some(Commands::Ui)));
        assert_eq!(cli.filter, Filter::NotCompleted);
        assert_eq!(cli.seed.as_deref(), Some(Path::new("tasks.json")));
    }

    #[test]
    fn test_load_store_reports_missing_seed() {
        let missing = std::env::temp_dir().join("todo_board_missing_seed.json");
        assert!(load_store(Some(&missing)).is_err());
        assert!(load_store(None).unwrap().is_empty());
    }

    #[test]
    fn test_load_store_from_seed_file() {
        let path = std::env::temp_dir().join(format!("todo_board_seed_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"name": "Buy milk", "description": "2%  milk", "status": "Completed"}]"#,
        )
        .unwrap();
        let store = load_store(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(store.len(), 1);
        assert_eq!(store.filter(Filter::Completed).count(), 1);
    }
}
