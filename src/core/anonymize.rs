//! Pseudonymous employee references.
//!
//! With `hash` the stored reference is the first 16 hex digits of
//! SHA-256(salt ":" id). The same salt must be used for every run, otherwise
//! older records of an employee are no longer matched by stress checks.

use crate::config::Anonymization;
use crate::errors::{AppError, AppResult};
use sha2::{Digest, Sha256};

const REF_LEN: usize = 16;

pub fn pseudonymize(employee_id: &str, mode: Anonymization, salt: &str) -> AppResult<String> {
    let id = employee_id.trim();
    if id.is_empty() {
        return Err(AppError::MissingEmployee);
    }

    Ok(match mode {
        Anonymization::Plain => id.to_string(),
        Anonymization::Hash => {
            let mut hasher = Sha256::new();
            hasher.update(salt.as_bytes());
            hasher.update(b":");
            hasher.update(id.as_bytes());
            let digest = hex::encode(hasher.finalize());
            digest[..REF_LEN].to_string()
        }
    })
}
