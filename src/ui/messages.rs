//! User-facing console messages (colored icon + text).
//! Diagnostics go through the `log` facade instead.

use ansi_term::{Colour, Style};
use std::env;
use std::fmt;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
    /// HR notification banner
    Alert,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
            Level::Alert => "🚨",
        }
    }

    fn style(self) -> Style {
        match self {
            Level::Info => Colour::Blue.bold(),
            Level::Success => Colour::Green.bold(),
            Level::Warning => Colour::Yellow.bold(),
            Level::Error => Colour::Red.bold(),
            Level::Alert => Colour::White.on(Colour::Red).bold(),
        }
    }
}

/// Colors only on a terminal, and never when `NO_COLOR` is set.
pub fn use_color() -> bool {
    env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

/// One message line. The alert banner paints the whole text, other levels
/// only the icon.
pub fn format_message(level: Level, msg: &str, color: bool) -> String {
    let icon = level.icon();
    match (level, color) {
        (_, false) => format!("{icon} {msg}"),
        (Level::Alert, true) => level.style().paint(format!("{icon} {msg} ")).to_string(),
        (_, true) => format!("{} {msg}", level.style().paint(icon)),
    }
}

fn emit<T: fmt::Display>(level: Level, msg: T) {
    let line = format_message(level, &msg.to_string(), use_color());
    if level == Level::Error {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Printed on stdout so it shows up next to the detection that raised it.
pub fn alert<T: fmt::Display>(msg: T) {
    emit(Level::Alert, msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("====================== {msg}");
    if use_color() {
        println!("{}", Colour::Blue.bold().paint(line));
    } else {
        println!("{line}");
    }
}
