mod common;
use chrono::NaiveDate;
use common::rec;
use moodtasker::history::{filter_records, parse_range};
use moodtasker::models::Mood;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_single_tokens() {
    let r = parse_range("2024").unwrap().unwrap();
    assert_eq!((r.start, r.end), (d(2024, 1, 1), d(2024, 12, 31)));

    let r = parse_range("2024-02").unwrap().unwrap();
    assert_eq!((r.start, r.end), (d(2024, 2, 1), d(2024, 2, 29)));

    let r = parse_range("2025-09-15").unwrap().unwrap();
    assert_eq!((r.start, r.end), (d(2025, 9, 15), d(2025, 9, 15)));
}

#[test]
fn test_pairs_and_all() {
    let r = parse_range("2025-06:2025-08").unwrap().unwrap();
    assert_eq!((r.start, r.end), (d(2025, 6, 1), d(2025, 8, 31)));

    assert!(parse_range("all").unwrap().is_none());
}

#[test]
fn test_invalid_ranges() {
    assert!(parse_range("2025-13").is_err());
    assert!(parse_range("2025:2025-01").is_err());
    assert!(parse_range("2025-09-10:2025-09-01").is_err());
    assert!(parse_range("yesterday").is_err());
}

#[test]
fn test_filter_by_day() {
    let h = vec![
        rec("E1", Mood::Happy, 1, 0),
        rec("E1", Mood::Sad, 2, 0),
        rec("E2", Mood::Sad, 15, 0),
    ];
    let kept = filter_records(h, parse_range("2025-09-01:2025-09-02").unwrap());
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|r| r.employee_ref == "E1"));
}
