mod common;
use common::{rec, temp_dir, temp_path};
use moodtasker::history::HistoryStore;
use moodtasker::models::{Mood, MoodRecord, RecordSource};
use std::fs;

#[test]
fn test_missing_file_is_empty_history() {
    let path = temp_path("history_missing", "json");
    let store = HistoryStore::new(&path);
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_empty_file_is_empty_history() {
    let path = temp_path("history_empty", "json");
    fs::write(&path, "").unwrap();
    assert!(HistoryStore::new(&path).load_all().unwrap().is_empty());
}

#[test]
fn test_append_then_reload_returns_record_last() {
    let path = temp_path("history_roundtrip", "json");
    let store = HistoryStore::new(&path);

    store.append(&rec("E1", Mood::Happy, 1, 0)).unwrap();
    let last = MoodRecord::now("E1", Mood::Fear, RecordSource::Camera);
    store.append(&last).unwrap();

    let all = store.load_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all.last(), Some(&last));
}

#[test]
fn test_file_uses_camel_case_fields() {
    let path = temp_path("history_fields", "json");
    HistoryStore::new(&path)
        .append(&rec("E1", Mood::Stressed, 3, 0))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"employeeRef\": \"E1\""));
    assert!(content.contains("\"mood\": \"Stressed\""));
    assert!(content.contains("\"timestamp\""));
    assert!(content.trim_start().starts_with('['));
}

#[test]
fn test_corrupt_file_is_empty_and_preserved_on_append() {
    let path = temp_path("history_corrupt", "json");
    let backup = format!("{path}.corrupt");
    fs::remove_file(&backup).ok();
    fs::write(&path, "{ not json").unwrap();

    let store = HistoryStore::new(&path);
    assert!(store.load_all().unwrap().is_empty());

    store.append(&rec("E1", Mood::Sad, 4, 0)).unwrap();

    assert_eq!(fs::read_to_string(&backup).unwrap(), "{ not json");
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn test_non_utf8_file_is_treated_as_corrupt() {
    let path = temp_path("history_non_utf8", "json");
    let backup = format!("{path}.corrupt");
    fs::remove_file(&backup).ok();
    let garbage: &[u8] = &[0xff, 0xfe, 0x00, 0x12, 0x80];
    fs::write(&path, garbage).unwrap();

    let store = HistoryStore::new(&path);
    assert!(store.load_all().unwrap().is_empty());

    store.append(&rec("E1", Mood::Happy, 4, 0)).unwrap();

    assert_eq!(fs::read(&backup).unwrap(), garbage);
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn test_second_corruption_keeps_first_copy() {
    let dir = temp_dir("history_corrupt_twice");
    let path = dir.join("history.json");
    let store = HistoryStore::new(&path);

    fs::write(&path, "first broken").unwrap();
    store.append(&rec("E1", Mood::Sad, 4, 0)).unwrap();

    fs::write(&path, "second broken").unwrap();
    store.append(&rec("E1", Mood::Sad, 4, 1)).unwrap();

    assert_eq!(
        fs::read_to_string(dir.join("history.json.corrupt")).unwrap(),
        "first broken"
    );

    let preserved: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|n| n.starts_with("history.json.corrupt."))
        .collect();
    assert_eq!(preserved.len(), 1);
    assert_eq!(
        fs::read_to_string(dir.join(&preserved[0])).unwrap(),
        "second broken"
    );
}

#[test]
fn test_invalid_entries_are_skipped() {
    let path = temp_path("history_partial", "json");
    fs::write(
        &path,
        r#"[
            {"employeeRef": "E1", "mood": "Happy", "timestamp": "2025-09-01T10:00:00+02:00"},
            {"employee_id": "E2", "anonymized_mood": "abc"},
            42
        ]"#,
    )
    .unwrap();

    let all = HistoryStore::new(&path).load_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].employee_ref, "E1");
    assert_eq!(all[0].mood, Mood::Happy);
    assert_eq!(all[0].source, RecordSource::Manual);
}

#[test]
fn test_unknown_mood_label_survives_reload() {
    let path = temp_path("history_unknown", "json");
    let store = HistoryStore::new(&path);
    store
        .append(&rec("E1", Mood::parse("Contempt"), 5, 0))
        .unwrap();

    let all = store.load_all().unwrap();
    assert_eq!(all[0].mood, Mood::Other("Contempt".into()));
}

#[test]
fn test_pseudonym_is_stable_and_salted() {
    use moodtasker::config::Anonymization;
    use moodtasker::core::anonymize::pseudonymize;

    let a = pseudonymize("E1", Anonymization::Hash, "s1").unwrap();
    assert_eq!(a.len(), 16);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(a, pseudonymize(" E1 ", Anonymization::Hash, "s1").unwrap());
    assert_ne!(a, pseudonymize("E1", Anonymization::Hash, "s2").unwrap());
    assert_ne!(a, pseudonymize("E2", Anonymization::Hash, "s1").unwrap());
}

#[test]
fn test_plain_pseudonym_and_empty_id() {
    use moodtasker::config::Anonymization;
    use moodtasker::core::anonymize::pseudonymize;

    assert_eq!(pseudonymize("E1", Anonymization::Plain, "").unwrap(), "E1");
    assert!(pseudonymize("   ", Anonymization::Hash, "s").is_err());
}
