use crate::models::{Mood, MoodRecord};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: usize,
}

/// Occurrences per mood, most frequent first (ties by label).
pub fn count_moods(history: &[MoodRecord]) -> Vec<MoodCount> {
    let mut map: HashMap<&Mood, usize> = HashMap::new();
    for r in history {
        *map.entry(&r.mood).or_insert(0) += 1;
    }

    let mut counts: Vec<MoodCount> = map
        .into_iter()
        .map(|(mood, count)| MoodCount {
            mood: mood.clone(),
            count,
        })
        .collect();

    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.mood.label().cmp(b.mood.label()))
    });
    counts
}

/// Bar color (0-255 RGB) for a mood.
pub fn mood_rgb(mood: &Mood) -> (u8, u8, u8) {
    match mood {
        Mood::Happy => (0, 128, 0),      // green
        Mood::Sad => (0, 0, 0),          // black
        Mood::Fear => (255, 0, 0),       // red
        Mood::Surprise => (255, 165, 0), // orange
        Mood::Angry => (0, 0, 255),      // blue
        Mood::Neutral => (255, 215, 0),  // gold
        _ => (128, 128, 128),            // gray
    }
}
