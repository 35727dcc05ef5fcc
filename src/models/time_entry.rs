use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use super::macros::string_enum;

/// Longest countable working day.
pub const MAX_DAY_HOURS: u32 = 24;

string_enum! {
    /// Letter codes a timesheet cell may hold instead of hours.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum DayCode {
        Sick => "Б",
        Vacation => "ОТ",
        Absence => "НН",
        Terminated => "У",
    }
}

/// Content of a single timesheet cell.
///
/// Cells that are neither a number nor a known code (blank, null, a stray
/// letter) are kept as `Unrecognized` so one bad cell never fails a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum DayValue {
    Hours(BigDecimal),
    Code(DayCode),
    Unrecognized(String),
}

impl Default for DayValue {
    fn default() -> Self {
        DayValue::Unrecognized(String::new())
    }
}

impl DayValue {
    pub fn hours(value: impl Into<BigDecimal>) -> Self {
        DayValue::Hours(value.into())
    }

    /// Hours that count toward totals, i.e. numeric values within `[0, 24]`.
    pub fn countable_hours(&self) -> Option<&BigDecimal> {
        match self {
            DayValue::Hours(hours)
                if *hours >= BigDecimal::from(0) && *hours <= BigDecimal::from(MAX_DAY_HOURS) =>
            {
                Some(hours)
            }
            _ => None,
        }
    }

    pub fn code(&self) -> Option<DayCode> {
        match self {
            DayValue::Code(code) => Some(*code),
            DayValue::Hours(_) | DayValue::Unrecognized(_) => None,
        }
    }
}

impl FromStr for DayValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().replace(',', ".");
        if let Ok(hours) = BigDecimal::from_str(&trimmed) {
            return Ok(DayValue::Hours(hours));
        }
        s.parse::<DayCode>()
            .map(DayValue::Code)
            .map_err(|_| format!("Invalid timesheet value: {}", s))
    }
}

impl Serialize for DayValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DayValue::Hours(hours) => serializer.serialize_str(&hours.normalized().to_string()),
            DayValue::Code(code) => code.serialize(serializer),
            DayValue::Unrecognized(raw) => serializer.serialize_str(raw),
        }
    }
}

struct DayValueVisitor;

impl de::Visitor<'_> for DayValueVisitor {
    type Value = DayValue;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a number of hours or a day code")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<DayValue, E> {
        Ok(DayValue::Hours(BigDecimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<DayValue, E> {
        Ok(DayValue::Hours(BigDecimal::from(v)))
    }

    // Shortest round-trip formatting keeps 7.5 as 7.5 instead of the binary expansion.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<DayValue, E> {
        BigDecimal::from_str(&v.to_string()).map(DayValue::Hours).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DayValue, E> {
        Ok(v.parse()
            .unwrap_or_else(|_| DayValue::Unrecognized(v.to_string())))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<DayValue, E> {
        Ok(DayValue::Unrecognized(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<DayValue, E> {
        Ok(DayValue::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<DayValue, E> {
        Ok(DayValue::default())
    }
}

impl<'de> Deserialize<'de> for DayValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DayValueVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub employee_id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub value: DayValue,
}

impl TimeEntry {
    pub fn new(employee_id: Uuid, date: NaiveDate, value: DayValue) -> Self {
        TimeEntry {
            employee_id,
            date,
            value,
        }
    }
}

/// Attendance records keyed by employee and calendar day.
///
/// Holds at most one entry per `(employee, date)`; a later write replaces the
/// day's value.
#[derive(Debug, Clone, Default)]
pub struct Timesheet {
    entries: HashMap<(Uuid, NaiveDate), DayValue>,
}

impl Timesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a timesheet applying entries in order, so the last duplicate wins.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a TimeEntry>) -> Self {
        let mut timesheet = Self::new();
        for entry in entries {
            if let Some(previous) = timesheet.upsert(entry.clone()) {
                log::debug!(
                    "Duplicate timesheet entry for employee {} on {} replaces {:?}",
                    entry.employee_id,
                    entry.date,
                    previous
                );
            }
        }
        timesheet
    }

    /// Stores the entry and returns the value it replaced, if any.
    pub fn upsert(&mut self, entry: TimeEntry) -> Option<DayValue> {
        self.entries
            .insert((entry.employee_id, entry.date), entry.value)
    }

    pub fn get(&self, employee_id: Uuid, date: NaiveDate) -> Option<&DayValue> {
        self.entries.get(&(employee_id, date))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
