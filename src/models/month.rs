use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::PayrollError;

static MONTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("month pattern is valid"));

/// Calendar month a report is computed for, written as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportMonth {
    year: i32,
    month: u32,
    days: u32,
}

impl ReportMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, PayrollError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| PayrollError::InvalidMonth(format!("{:04}-{:02}", year, month)))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or_else(|| PayrollError::InvalidMonth(format!("{:04}-{:02}", year, month)))?;
        let days = next.signed_duration_since(first).num_days() as u32;

        Ok(ReportMonth { year, month, days })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        self.days
    }

    pub fn first_day(&self) -> NaiveDate {
        self.date(1)
    }

    /// Every calendar day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.first_day().iter_days().take(self.days as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    fn date(&self, day: u32) -> NaiveDate {
        // year/month were validated on construction and day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, day).unwrap_or_default()
    }
}

impl FromStr for ReportMonth {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = MONTH_PATTERN
            .captures(s.trim())
            .ok_or_else(|| PayrollError::InvalidMonth(s.to_string()))?;
        let year = captures[1]
            .parse::<i32>()
            .map_err(|_| PayrollError::InvalidMonth(s.to_string()))?;
        let month = captures[2]
            .parse::<u32>()
            .map_err(|_| PayrollError::InvalidMonth(s.to_string()))?;

        ReportMonth::new(year, month).map_err(|_| PayrollError::InvalidMonth(s.to_string()))
    }
}

impl std::fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for ReportMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReportMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
