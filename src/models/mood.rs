use serde::{Deserialize, Serialize};
use std::fmt;

/// Mood label as produced by the classifier or derived from text sentiment.
///
/// Labels outside the known set are kept verbatim in `Other`, so a
/// newer classifier never breaks the history file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Neutral,
    Stressed,
    Fear,
    Surprise,
    Disgust,
    Other(String),
}

impl Mood {
    /// Every label with a dedicated entry in the recommendation table.
    pub const KNOWN: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Neutral,
        Mood::Stressed,
        Mood::Fear,
        Mood::Surprise,
        Mood::Disgust,
    ];

    /// Parse a raw label (case-insensitive). Never fails.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "happy" => Mood::Happy,
            "sad" => Mood::Sad,
            "angry" => Mood::Angry,
            "neutral" => Mood::Neutral,
            "stressed" => Mood::Stressed,
            "fear" => Mood::Fear,
            "surprise" => Mood::Surprise,
            "disgust" => Mood::Disgust,
            _ => Mood::Other(label.trim().to_string()),
        }
    }

    /// Capitalized label, as stored in the history file.
    pub fn label(&self) -> &str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Neutral => "Neutral",
            Mood::Stressed => "Stressed",
            Mood::Fear => "Fear",
            Mood::Surprise => "Surprise",
            Mood::Disgust => "Disgust",
            Mood::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Mood::Other(_))
    }

    /// Moods that count towards a stress run.
    pub fn is_stress_indicating(&self) -> bool {
        matches!(self, Mood::Stressed | Mood::Sad | Mood::Angry | Mood::Fear)
    }
}

impl From<String> for Mood {
    fn from(s: String) -> Self {
        Mood::parse(&s)
    }
}

impl From<Mood> for String {
    fn from(m: Mood) -> Self {
        m.label().to_string()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
