use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// How employee identifiers are stored in the history file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anonymization {
    /// Salted SHA-256, truncated (see core::anonymize)
    #[default]
    Hash,
    /// Identifier stored as typed
    Plain,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub history_file: String,
    #[serde(default = "default_stress_threshold")]
    pub stress_threshold: usize,
    #[serde(default)]
    pub anonymization: Anonymization,
    #[serde(default)]
    pub salt: String,
    /// External emotion classifier; receives the frame path as last argument
    #[serde(default)]
    pub classifier_command: Option<String>,
    /// Capture command; `{out}` is replaced by the frame path to write
    #[serde(default)]
    pub camera_command: Option<String>,
    /// Directory of pre-captured frames, used when no camera command is set
    #[serde(default)]
    pub camera_dir: Option<String>,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_stress_threshold() -> usize {
    3
}
fn default_chart_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_file: Self::history_path().to_string_lossy().to_string(),
            stress_threshold: default_stress_threshold(),
            anonymization: Anonymization::default(),
            salt: String::new(),
            classifier_command: None,
            camera_command: None,
            camera_dir: None,
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("moodtasker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".moodtasker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("moodtasker.conf")
    }

    /// Return the default path of the mood history
    pub fn history_path() -> PathBuf {
        Self::config_dir().join("mood_history.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.history_file = expand_tilde(&cfg.history_file)
            .to_string_lossy()
            .to_string();
        Ok(cfg)
    }

    /// Initialize configuration and history files
    pub fn init_all(custom_history: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // History file: user provided or default
        let history_path = match custom_history {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::history_path(),
        };

        let config = Config {
            history_file: history_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        // Create empty history if not exists
        if !history_path.exists() {
            if let Some(parent) = history_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&history_path, "[]")?;
        }

        success(format!("History:     {}", history_path.display()));

        Ok(history_path)
    }
}
