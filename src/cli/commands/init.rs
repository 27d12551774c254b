use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::history::HistoryStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty history file
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing moodtasker…");

    let history_path = Config::init_all(cli.history.clone(), cli.test)?;

    // Read it back once so a broken pre-existing file is reported right away.
    let store = HistoryStore::new(&history_path);
    let existing = store.load_all()?;

    success(format!(
        "moodtasker initialization completed ({} records in history)",
        existing.len()
    ));
    Ok(())
}
