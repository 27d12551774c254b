use moodtasker::export::fs_utils::ensure_writable_with;
use moodtasker::ui::messages::{Level, format_message};
use moodtasker::ui::prompt::{ask, confirm};
use std::fs;
use std::io::Cursor;

mod common;
use common::temp_path;

#[test]
fn test_plain_messages_have_icon_and_text_only() {
    assert_eq!(format_message(Level::Success, "saved", false), "✅ saved");
    assert_eq!(
        format_message(Level::Alert, "ALERT: E1", false),
        "🚨 ALERT: E1"
    );
}

#[test]
fn test_colored_messages_keep_text_readable() {
    let line = format_message(Level::Warning, "careful", true);
    assert!(line.contains("\x1b["));
    assert!(line.ends_with(" careful"));

    let banner = format_message(Level::Alert, "ALERT: E1", true);
    assert!(banner.contains("ALERT: E1"));
    assert!(banner.ends_with("\x1b[0m"));
}

#[test]
fn test_ask_trims_and_detects_end_of_input() {
    let mut input = Cursor::new("  E42  \n");
    assert_eq!(ask("id: ", &mut input).unwrap().as_deref(), Some("E42"));
    assert_eq!(ask("id: ", &mut input).unwrap(), None);
}

#[test]
fn test_confirm_accepts_only_yes() {
    assert!(confirm("ok?", &mut Cursor::new("y\n")).unwrap());
    assert!(confirm("ok?", &mut Cursor::new("YES\n")).unwrap());
    assert!(!confirm("ok?", &mut Cursor::new("\n")).unwrap());
    assert!(!confirm("ok?", &mut Cursor::new("nope\n")).unwrap());
    assert!(!confirm("ok?", &mut Cursor::new("")).unwrap());
}

#[test]
fn test_overwrite_guard() {
    let path = temp_path("ui_overwrite_guard", "csv");
    let p = std::path::Path::new(&path);

    // missing file never asks
    ensure_writable_with(p, false, &mut Cursor::new("")).unwrap();

    fs::write(p, "old").unwrap();
    ensure_writable_with(p, true, &mut Cursor::new("")).unwrap();
    ensure_writable_with(p, false, &mut Cursor::new("y\n")).unwrap();
    assert!(ensure_writable_with(p, false, &mut Cursor::new("n\n")).is_err());
    assert_eq!(fs::read_to_string(p).unwrap(), "old");
}
