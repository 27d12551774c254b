use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{frames_dir, mt, seeded_history, temp_path};

#[test]
fn test_init_creates_empty_history() {
    let history = temp_path("cli_init", "json");

    mt("cli_init")
        .args(["--history", &history, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(fs::read_to_string(&history).unwrap(), "[]");
}

#[test]
fn test_recommend_known_and_unknown() {
    mt("cli_recommend")
        .args(["recommend", "happy"])
        .assert()
        .success()
        .stdout(contains("Collaborate on a new project"));

    mt("cli_recommend")
        .args(["recommend", "unknown_mood"])
        .assert()
        .success()
        .stdout(contains("No suggestion available"));
}

#[test]
fn test_recommend_all_lists_every_task() {
    mt("cli_recommend_all")
        .args(["recommend", "sad", "--all"])
        .assert()
        .success()
        .stdout(contains("Take a break"))
        .stdout(contains("Listen to music"))
        .stdout(contains("Talk to a friend"));
}

#[test]
fn test_record_three_stressed_raises_alert() {
    let history = temp_path("cli_stress_alert", "json");

    for _ in 0..2 {
        mt("cli_stress_alert")
            .args(["--history", &history, "record", "-e", "E1", "-m", "stressed"])
            .assert()
            .success()
            .stdout(contains("Prolonged stress").not());
    }

    mt("cli_stress_alert")
        .args(["--history", &history, "record", "-e", "E1", "-m", "stressed"])
        .assert()
        .success()
        .stdout(contains("Prolonged stress detected"))
        .stdout(contains("Step away for ten minutes"));

    mt("cli_stress_alert")
        .args(["--history", &history, "stress", "-e", "E1", "--threshold", "4"])
        .assert()
        .success()
        .stdout(contains("No stress alert"));
}

#[test]
fn test_employee_ids_are_hashed_by_default() {
    let history = temp_path("cli_hashed", "json");

    mt("cli_hashed")
        .args(["--history", &history, "record", "-e", "alice", "-m", "happy"])
        .assert()
        .success();

    let content = fs::read_to_string(&history).unwrap();
    assert!(!content.contains("alice"));
    assert!(content.contains("\"mood\": \"Happy\""));

    mt("cli_hashed")
        .args(["--history", &history, "list", "-e", "alice"])
        .assert()
        .success()
        .stdout(contains("Happy"))
        .stdout(contains("1 records"));
}

#[test]
fn test_text_command_records_sentiment_mood() {
    let history = temp_path("cli_text", "json");

    mt("cli_text")
        .args([
            "--history",
            &history,
            "text",
            "-e",
            "E9",
            "what",
            "a",
            "great",
            "day",
        ])
        .assert()
        .success()
        .stdout(contains("Detected Mood: Happy"))
        .stdout(contains("Collaborate on a new project"));

    let content = fs::read_to_string(&history).unwrap();
    assert!(content.contains("\"source\": \"text\""));
}

#[test]
fn test_capture_from_directory_with_fixed_mood() {
    let history = temp_path("cli_capture", "json");
    let frames = frames_dir("cli_capture", 3);

    mt("cli_capture")
        .args([
            "--history",
            &history,
            "capture",
            "-e",
            "E1",
            "--source",
            &frames.to_string_lossy(),
            "--mood",
            "sad",
            "--no-prompt",
        ])
        .assert()
        .success()
        .stdout(contains("Captured 3 frames (1 stress alerts)"))
        .stdout(contains("Team Mood Analysis"))
        .stdout(contains("Sad"));
}

#[cfg(unix)]
#[test]
fn test_capture_silent_classifier_means_neutral() {
    let history = temp_path("cli_capture_true", "json");
    let frames = frames_dir("cli_capture_true", 1);

    mt("cli_capture_true")
        .args([
            "--history",
            &history,
            "capture",
            "-e",
            "E1",
            "--source",
            &frames.to_string_lossy(),
            "--classifier",
            "true",
            "--no-prompt",
            "--no-chart",
        ])
        .assert()
        .success()
        .stdout(contains("Detected Mood: Neutral"));
}

#[test]
fn test_capture_without_camera_fails() {
    let history = temp_path("cli_no_camera", "json");

    mt("cli_no_camera")
        .args([
            "--history",
            &history,
            "capture",
            "-e",
            "E1",
            "--source",
            "/definitely/not/a/camera",
            "--mood",
            "happy",
            "--no-prompt",
        ])
        .assert()
        .failure()
        .stderr(contains("Camera unavailable"));
}

#[test]
fn test_capture_prompts_for_employee_id() {
    let history = temp_path("cli_prompt", "json");
    let frames = frames_dir("cli_prompt", 2);

    // employee id, then quit after the first frame
    mt("cli_prompt")
        .args([
            "--history",
            &history,
            "capture",
            "--source",
            &frames.to_string_lossy(),
            "--mood",
            "angry",
            "--no-chart",
        ])
        .write_stdin("E5\nq\n")
        .assert()
        .success()
        .stdout(contains("Enter Employee ID:"))
        .stdout(contains("Captured 1 frames"));
}

#[test]
fn test_list_and_chart_on_seeded_history() {
    let history = seeded_history("cli_list");

    mt("cli_list")
        .args(["--history", &history, "list", "--period", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("Stressed"))
        .stdout(contains("Neutral"))
        .stdout(contains("2 records"));

    mt("cli_list")
        .args(["--history", &history, "chart"])
        .assert()
        .success()
        .stdout(contains("Team Mood Analysis"))
        .stdout(contains("Sad"));
}

#[test]
fn test_chart_on_empty_history_warns() {
    let history = temp_path("cli_chart_empty", "json");

    mt("cli_chart_empty")
        .args(["--history", &history, "chart"])
        .assert()
        .success()
        .stdout(contains("No mood history available to plot."));
}

#[test]
fn test_corrupt_history_is_reported_not_fatal() {
    let history = temp_path("cli_corrupt", "json");
    fs::write(&history, "garbage").unwrap();

    mt("cli_corrupt")
        .args(["--history", &history, "chart"])
        .assert()
        .success()
        .stdout(contains("corrupted"));
}

#[test]
fn test_record_on_non_utf8_history_preserves_it() {
    let history = temp_path("cli_non_utf8", "json");
    let backup = format!("{history}.corrupt");
    fs::remove_file(&backup).ok();
    fs::write(&history, [0xffu8, 0xfe, 0x00, 0x12, 0x80]).unwrap();

    mt("cli_non_utf8")
        .args(["--history", &history, "record", "-e", "E1", "-m", "happy"])
        .assert()
        .success()
        .stdout(contains("corrupted"))
        .stdout(contains("Detected Mood: Happy"));

    assert!(std::path::Path::new(&backup).exists());
}

#[test]
fn test_config_print_shows_defaults_without_file() {
    mt("cli_config_print")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("not created"))
        .stdout(contains("stress_threshold: 3"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_creates_file_first() {
    let home = common::temp_dir("cli_config_edit_home");

    let mut cmd = mt("cli_config_edit");
    cmd.env("HOME", &home)
        .env_remove("EDITOR")
        .env_remove("VISUAL")
        .args(["config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("edited with 'true'"));

    let conf = fs::read_to_string(home.join(".moodtasker").join("moodtasker.conf")).unwrap();
    assert!(conf.contains("stress_threshold"));
}
