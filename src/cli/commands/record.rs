use super::employee_ref;
use crate::capture::process_detection;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::history::HistoryStore;
use crate::models::{Mood, RecordSource};
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Record {
        employee,
        mood,
        threshold,
    } = cmd
    {
        let who = employee_ref(employee, cfg)?;

        let mood = Mood::parse(mood);
        if !mood.is_known() {
            warning(format!("Unknown mood '{}', recording it as is.", mood));
        }

        let store = HistoryStore::new(&cfg.history_file);
        process_detection(
            &store,
            &who,
            mood,
            RecordSource::Manual,
            threshold.unwrap_or(cfg.stress_threshold),
        )?;
    }

    Ok(())
}
