use super::employee_ref;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stress::{check_stress, notify_hr, stress_run};
use crate::errors::AppResult;
use crate::history::HistoryStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stress {
        employee,
        threshold,
    } = cmd
    {
        let who = employee_ref(employee, cfg)?;
        let threshold = threshold.unwrap_or(cfg.stress_threshold);

        let history = HistoryStore::new(&cfg.history_file).load_all()?;
        let run = stress_run(&who, &history);

        if check_stress(&who, &history, threshold) {
            notify_hr(&who, run);
        } else {
            success(format!(
                "No stress alert for {} (current run {}, threshold {})",
                who, run, threshold
            ));
        }
    }

    Ok(())
}
