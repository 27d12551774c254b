use crate::chart::{save_chart_pdf, show_chart};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::history::{HistoryStore, filter_records, parse_range};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { period, pdf } = cmd {
        let bounds = match period {
            Some(p) => parse_range(p)?,
            None => None,
        };
        let history = filter_records(HistoryStore::new(&cfg.history_file).load_all()?, bounds);

        if show_chart(&history, cfg.chart_width)
            && let Some(file) = pdf
        {
            save_chart_pdf(&history, &expand_tilde(file))?;
        }
    }

    Ok(())
}
