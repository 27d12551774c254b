use super::camera::Frame;
use crate::errors::{AppError, AppResult};
use crate::models::Mood;
use crate::ui::messages::warning;
use std::process::Command;

/// Image → mood label.
pub trait MoodClassifier {
    fn classify(&self, frame: &Frame) -> AppResult<Mood>;
}

/// External emotion-recognition program.
///
/// The frame path is passed as the last argument; the first non-empty line
/// of stdout is the label. No answer means no face found, reported as
/// `Neutral`.
pub struct CommandClassifier {
    program: String,
    args: Vec<String>,
}

impl CommandClassifier {
    pub fn new(command: &str) -> AppResult<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| AppError::Classifier("empty classifier command".into()))?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl MoodClassifier for CommandClassifier {
    fn classify(&self, frame: &Frame) -> AppResult<Mood> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&frame.path)
            .output()
            .map_err(|e| AppError::Classifier(format!("cannot run '{}': {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::warn!("classifier failed on frame #{}: {}", frame.index, stderr.trim());
            warning(format!(
                "Classifier failed on frame #{}, assuming Neutral.",
                frame.index
            ));
            return Ok(Mood::Neutral);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        match stdout.lines().map(str::trim).find(|l| !l.is_empty()) {
            Some(label) => Ok(Mood::parse(label)),
            None => {
                log::warn!("classifier returned no label for frame #{}", frame.index);
                Ok(Mood::Neutral)
            }
        }
    }
}

/// Always answers the same mood.
pub struct FixedClassifier(pub Mood);

impl MoodClassifier for FixedClassifier {
    fn classify(&self, _frame: &Frame) -> AppResult<Mood> {
        Ok(self.0.clone())
    }
}
