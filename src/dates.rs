//! # Date Resolver Module
//!
//! ## Purpose
//! Resolves natural-language date references in user text to calendar dates:
//! relative keywords first, then a fuzzy scan for explicit date forms.
//!
//! ## Input/Output Specification
//! - **Input**: Free-form user text
//! - **Output**: `Some(NaiveDate)` or `None` when no date is recognizable
//! - **Relative keywords**: checked most-specific-first so that
//!   "day after tomorrow" is reachable and not shadowed by "tomorrow"
//!
//! ## Key Features
//! - Relative phrases: tomorrow, day after tomorrow, yesterday, day before
//!   yesterday
//! - Fuzzy forms: ISO (2026-09-04), slash dates (9/4/2026, month-first
//!   preferred with a day-first retry), written month ("September 4",
//!   "4th September 2026"); a missing year defaults to the current year

use chrono::{Datelike, Duration, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Relative phrases and their day offsets, most specific first
const RELATIVE_KEYWORDS: &[(&str, i64)] = &[
    ("day after tomorrow", 2),
    ("tomorrow", 1),
    ("day before yesterday", -2),
    ("yesterday", -1),
];

static RE_DATE_ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

static RE_DATE_US: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap());

const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";

static RE_DATE_MONTH_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b({MONTHS})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?(?:,?\s+(\d{{4}}))?\b"
    ))
    .unwrap()
});

static RE_DATE_DAY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+({MONTHS})\b\.?(?:,?\s+(\d{{4}}))?"
    ))
    .unwrap()
});

/// Parse natural language date references from text.
///
/// Returns `None` for unparseable input; never panics.
pub fn parse_natural_date(text: &str) -> Option<NaiveDate> {
    parse_natural_date_on(text, Local::now().date_naive())
}

/// Same as [`parse_natural_date`] with an explicit "today" anchor.
pub fn parse_natural_date_on(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lowered = text.to_lowercase();

    for (keyword, offset) in RELATIVE_KEYWORDS {
        if lowered.contains(keyword) {
            return Some(today + Duration::days(*offset));
        }
    }

    fuzzy_parse(text, today)
}

/// Scan text for the first recognizable explicit date form.
fn fuzzy_parse(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    for caps in RE_DATE_ISO.captures_iter(text) {
        if let Some(date) = ymd(&caps[1], &caps[2], &caps[3]) {
            return Some(date);
        }
    }

    for caps in RE_DATE_US.captures_iter(text) {
        // M/D/Y preferred; retry day-first when the month field is invalid
        if let Some(date) = ymd(&caps[3], &caps[1], &caps[2]) {
            return Some(date);
        }
        if let Some(date) = ymd(&caps[3], &caps[2], &caps[1]) {
            return Some(date);
        }
    }

    for caps in RE_DATE_MONTH_FIRST.captures_iter(text) {
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year = caps
            .get(3)
            .and_then(|y| y.as_str().parse().ok())
            .unwrap_or_else(|| today.year());
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    for caps in RE_DATE_DAY_FIRST.captures_iter(text) {
        let day: u32 = caps[1].parse().ok()?;
        let month = month_number(&caps[2])?;
        let year = caps
            .get(3)
            .and_then(|y| y.as_str().parse().ok())
            .unwrap_or_else(|| today.year());
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    None
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn month_number(name: &str) -> Option<u32> {
    let lowered = name.to_lowercase();
    let number = match lowered.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(number)
}
