//! Unified application error type.
//! All modules (history, capture, chart, export, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Capture pipeline
    // ---------------------------
    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Missing employee identifier")]
    MissingEmployee,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
