use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::anonymize::pseudonymize;
use crate::errors::AppResult;
use crate::history::{HistoryStore, filter_records, parse_range};
use crate::models::Mood;
use crate::ui::messages::{info, use_color};
use crate::utils::table::Table;
use ansi_term::Colour;

/// Color of the mood cell
fn color_for_mood(mood: &Mood) -> Colour {
    match mood {
        Mood::Happy => Colour::Green,
        Mood::Neutral => Colour::Yellow,
        Mood::Surprise => Colour::Cyan,
        m if m.is_stress_indicating() => Colour::Red,
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { employee, period } = cmd {
        let bounds = match period {
            Some(p) => parse_range(p)?,
            None => None,
        };

        let who = match employee {
            Some(e) => Some(pseudonymize(e, cfg.anonymization, &cfg.salt)?),
            None => None,
        };

        let records: Vec<_> = filter_records(HistoryStore::new(&cfg.history_file).load_all()?, bounds)
            .into_iter()
            .filter(|r| who.as_ref().is_none_or(|w| &r.employee_ref == w))
            .collect();

        if records.is_empty() {
            info("No mood records found.");
            return Ok(());
        }

        let color = use_color();
        let mut table = Table::new(&["Date", "Time", "Employee", "Mood", "Source"]);

        for r in &records {
            let mood = if color {
                color_for_mood(&r.mood).paint(r.mood.label()).to_string()
            } else {
                r.mood.label().to_string()
            };
            table.add_row(vec![
                r.timestamp.format("%Y-%m-%d").to_string(),
                r.timestamp.format("%H:%M:%S").to_string(),
                r.employee_ref.clone(),
                mood,
                r.source.as_str().to_string(),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} records", records.len());
    }

    Ok(())
}
