//! # Terminal Input Parsing
//!
//! Turns raw answers typed at the menu into values the registry understands.
//! Failures are [`InputError`]s and are reported by the caller; they never
//! reach the registry.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::InputError;
use crate::models::weekday::DayOfWeek;

/// Parses a date such as `"01/01/1990"` using a `chrono` format string.
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate, InputError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, format).map_err(|_| InputError::Date {
        input: input.to_string(),
        format: format.to_string(),
    })
}

/// Parses a date and time such as `"02/06/2025 10:30"`.
pub fn parse_date_time(input: &str, format: &str) -> Result<NaiveDateTime, InputError> {
    let input = input.trim();
    NaiveDateTime::parse_from_str(input, format).map_err(|_| InputError::DateTime {
        input: input.to_string(),
        format: format.to_string(),
    })
}

/// Splits a comma-separated answer, trimming entries and dropping empty ones.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// Parses a comma-separated list of weekday names (e.g. "monday, jueves").
pub fn parse_days(input: &str) -> Result<Vec<DayOfWeek>, InputError> {
    split_list(input)
        .iter()
        .map(|part| part.parse::<DayOfWeek>())
        .collect()
}

pub fn parse_count(input: &str) -> Result<usize, InputError> {
    let input = input.trim();
    input
        .parse::<usize>()
        .map_err(|_| InputError::Number(input.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
