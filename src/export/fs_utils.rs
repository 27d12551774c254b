//! Overwrite guard for user-chosen output files (export and backup).

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::ui::prompt::confirm;
use std::io::{self, BufRead};
use std::path::Path;

pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    ensure_writable_with(path, force, &mut io::stdin().lock())
}

/// An existing `path` is only replaced with `force` or after a "y" answer
/// read from `input`. Anything else cancels with an error so the caller
/// leaves the file untouched.
pub fn ensure_writable_with<R: BufRead + ?Sized>(
    path: &Path,
    force: bool,
    input: &mut R,
) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }
    if force {
        log::debug!("overwriting {} (forced)", path.display());
        return Ok(());
    }

    warning(format!("{} already exists.", path.display()));
    if confirm("Overwrite?", input)? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "cancelled, {} left unchanged",
            path.display()
        )))
    }
}
