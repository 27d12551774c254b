pub mod backup;
pub mod capture;
pub mod chart;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod record;
pub mod recommend;
pub mod stress;
pub mod text;

use crate::config::Config;
use crate::core::anonymize::pseudonymize;
use crate::errors::{AppError, AppResult};
use crate::ui::prompt::ask;
use std::io;

/// Pseudonymous reference for `--employee`, prompting for the id when the
/// flag is missing.
pub(crate) fn employee_ref(employee: &Option<String>, cfg: &Config) -> AppResult<String> {
    let id = match employee {
        Some(e) => e.clone(),
        None => prompt_employee_id()?,
    };
    pseudonymize(&id, cfg.anonymization, &cfg.salt)
}

fn prompt_employee_id() -> AppResult<String> {
    ask("Enter Employee ID: ", &mut io::stdin().lock())?.ok_or(AppError::MissingEmployee)
}
