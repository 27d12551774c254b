use moodtasker::core::recommend::{
    DEFAULT_SUGGESTION, pick, recommend, recommend_label, suggestions,
};
use moodtasker::models::Mood;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_happy_recommendation() {
    assert_eq!(recommend_label("happy"), "Collaborate on a new project");
    assert_eq!(recommend(&Mood::Happy), "Collaborate on a new project");
}

#[test]
fn test_unknown_mood_gets_default() {
    assert_eq!(recommend_label("unknown_mood"), DEFAULT_SUGGESTION);
    assert_eq!(DEFAULT_SUGGESTION, "No suggestion available");
}

#[test]
fn test_every_known_mood_has_a_stable_recommendation() {
    for mood in Mood::KNOWN.iter() {
        let first = recommend(mood);
        assert!(!first.is_empty(), "{mood} has no recommendation");
        assert_ne!(first, DEFAULT_SUGGESTION);
        assert_eq!(first, recommend(mood));
    }
}

#[test]
fn test_labels_are_case_insensitive() {
    assert_eq!(recommend_label("SAD"), "Take a break");
    assert_eq!(recommend_label(" Fear "), "Practice deep breathing");
}

#[test]
fn test_random_pick_stays_in_the_list() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let task = pick(&Mood::Sad, &mut rng);
        assert!(suggestions(&Mood::Sad).contains(&task));
    }
    assert_eq!(
        pick(&Mood::Other("x".into()), &mut rng),
        DEFAULT_SUGGESTION
    );
}
