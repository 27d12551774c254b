#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Local, TimeZone};
use moodtasker::history::HistoryStore;
use moodtasker::models::{Mood, MoodRecord, RecordSource};
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI command isolated from the user's real config: HOME points to a
/// per-test directory without a config file.
pub fn mt(name: &str) -> Command {
    let home = temp_dir(&format!("{name}_home"));
    let mut cmd = cargo_bin_cmd!("moodtasker");
    cmd.env("HOME", &home).env("APPDATA", &home).env_remove("RUST_LOG");
    cmd
}

/// Unique path inside the system temp dir; any previous file is removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_moodtasker.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_moodtasker_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Record at 2025-09-<day> 10:<minute>:00 local time
pub fn rec(employee: &str, mood: Mood, day: u32, minute: u32) -> MoodRecord {
    let ts = Local
        .with_ymd_and_hms(2025, 9, day, 10, minute, 0)
        .single()
        .expect("valid local time");
    MoodRecord::at(employee, mood, ts, RecordSource::Manual)
}

/// History file with a small mixed dataset for E1 and E2
pub fn seeded_history(name: &str) -> String {
    let path = temp_path(name, "json");
    let store = HistoryStore::new(&path);
    for r in [
        rec("E1", Mood::Happy, 1, 0),
        rec("E2", Mood::Sad, 1, 5),
        rec("E1", Mood::Sad, 2, 0),
        rec("E1", Mood::Stressed, 15, 0),
        rec("E2", Mood::Neutral, 15, 5),
    ] {
        store.append(&r).expect("append");
    }
    path
}

/// Write `n` tiny PNG frames into a fresh directory
pub fn frames_dir(name: &str, n: usize) -> PathBuf {
    let dir = temp_dir(name);
    for i in 0..n {
        let img = image::RgbImage::from_pixel(8, 6, image::Rgb([120, 90, 60]));
        img.save(dir.join(format!("frame_{i:03}.png")))
            .expect("write frame");
    }
    dir
}
