use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{JournalError, Result};

/// Shape of a date literal on the command line: four-digit year, then one or
/// two digits each for month and day.
static DATE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("valid date regex"));

/// A calendar day a journal file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JournalDate(NaiveDate);

impl JournalDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from numeric parts, rejecting impossible days
    #[cfg(test)]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Whether an argument has the shape of a date literal
    pub fn looks_like_literal(arg: &str) -> bool {
        DATE_LITERAL.is_match(arg)
    }

    /// Parse a `YYYY-MM-DD` or `YYYY-M-D` literal.
    ///
    /// The parsed date is formatted back and must reproduce the literal
    /// exactly (either fully padded or fully unpadded), so impossible days
    /// like `2017-02-30` and mixed padding like `2017-09-1` are rejected.
    pub fn parse_literal(literal: &str) -> Result<Self> {
        if !Self::looks_like_literal(literal) {
            return Err(JournalError::InvalidDate(literal.to_string()));
        }

        let date = NaiveDate::parse_from_str(literal, "%Y-%m-%d")
            .map_err(|_| JournalError::InvalidDate(literal.to_string()))?;

        let padded = date.format("%Y-%m-%d").to_string();
        let unpadded = date.format("%Y-%-m-%-d").to_string();
        if padded != literal && unpadded != literal {
            return Err(JournalError::InvalidDate(literal.to_string()));
        }

        Ok(Self(date))
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for JournalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
