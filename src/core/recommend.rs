use crate::models::Mood;
use rand::Rng;
use rand::seq::SliceRandom;

pub const DEFAULT_SUGGESTION: &str = "No suggestion available";

const DEFAULT_TASKS: &[&str] = &[DEFAULT_SUGGESTION];

/// Full suggestion list for a mood. The first entry is the canonical one.
pub fn suggestions(mood: &Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => &["Collaborate on a new project", "Share positivity with the team"],
        Mood::Sad => &["Take a break", "Listen to music", "Talk to a friend"],
        Mood::Fear => &[
            "Practice deep breathing",
            "Engage in light work",
            "Seek support",
        ],
        Mood::Angry => &["Cool down with a short walk", "Work on solo tasks"],
        Mood::Surprise => &["Reflect on new insights", "Plan next steps"],
        Mood::Neutral => &["Review your task list", "Tackle a focused work block"],
        Mood::Stressed => &[
            "Step away for ten minutes",
            "Break the next task into smaller steps",
        ],
        Mood::Disgust => &["Switch to a different task", "Tidy up your workspace"],
        Mood::Other(_) => DEFAULT_TASKS,
    }
}

/// Deterministic recommendation for a mood.
pub fn recommend(mood: &Mood) -> &'static str {
    suggestions(mood)[0]
}

/// Same as [`recommend`], starting from a raw label.
pub fn recommend_label(label: &str) -> &'static str {
    recommend(&Mood::parse(label))
}

/// Random pick among the suggestions for `mood`.
pub fn pick<R: Rng + ?Sized>(mood: &Mood, rng: &mut R) -> &'static str {
    suggestions(mood)
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULT_SUGGESTION)
}
