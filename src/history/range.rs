// src/history/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::MoodRecord;
use chrono::{Datelike, NaiveDate};

/// Inclusive date window used by `list`, `chart` and `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, d: NaiveDate) -> bool {
        d >= self.start && d <= self.end
    }
}

/// Parse `--period` / `--range`.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
/// - all (returns `None`, no filtering)
pub fn parse_range(r: &str) -> AppResult<Option<DateRange>> {
    let r = r.trim();
    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(AppError::InvalidRange(format!(
                    "start and end must have the same format: {r}"
                )));
            }
            (bounds(s)?.0, bounds(e)?.1)
        }
        None => bounds(r)?,
    };

    if start > end {
        return Err(AppError::InvalidRange(format!(
            "start is after end: {r}"
        )));
    }

    Ok(Some(DateRange { start, end }))
}

/// Keep only the records whose local date falls inside `range`.
pub fn filter_records(records: Vec<MoodRecord>, range: Option<DateRange>) -> Vec<MoodRecord> {
    match range {
        None => records,
        Some(rg) => records
            .into_iter()
            .filter(|r| rg.contains(r.timestamp.date_naive()))
            .collect(),
    }
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD token.
fn bounds(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(token.to_string());

    match token.len() {
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let last = month_last_day(d1.year(), d1.month()).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(d1.year(), d1.month(), last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
