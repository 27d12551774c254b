use super::employee_ref;
use crate::capture::process_detection;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sentiment::{LexiconAnalyzer, SentimentAnalyzer, mood_from_polarity};
use crate::errors::AppResult;
use crate::history::HistoryStore;
use crate::models::RecordSource;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Text {
        employee,
        threshold,
        text,
    } = cmd
    {
        let who = employee_ref(employee, cfg)?;
        let text = text.join(" ");

        let polarity = LexiconAnalyzer::new().polarity(&text);
        let mood = mood_from_polarity(polarity);
        info(format!("Text polarity: {:+.2} → {}", polarity, mood));

        let store = HistoryStore::new(&cfg.history_file);
        process_detection(
            &store,
            &who,
            mood,
            RecordSource::Text,
            threshold.unwrap_or(cfg.stress_threshold),
        )?;
    }

    Ok(())
}
