use chrono::{Datelike, Weekday};

use crate::models::{ReportMonth, WorkSchedule};

/// Planned work hours of `schedule` in `month`.
///
/// Unrecognized schedule codes are computed with the 5/2 rule.
pub fn planned_hours(schedule: &WorkSchedule, month: &ReportMonth) -> u32 {
    let days = month.days_in_month();
    let shift = schedule.shift_hours();

    match schedule {
        WorkSchedule::TwoTwo | WorkSchedule::ThreeThree => (days / 2) * shift,
        WorkSchedule::SixOne => (days * 6 / 7) * shift,
        WorkSchedule::Rotational => days * shift,
        WorkSchedule::FiveTwo => weekdays(month) * shift,
        WorkSchedule::Other(code) => {
            log::warn!("Unknown work schedule {:?}, using the 5/2 rule", code);
            weekdays(month) * shift
        }
    }
}

/// Planned hours for a raw schedule code, as stored on employee records.
pub fn planned_hours_for_code(code: &str, month: &ReportMonth) -> u32 {
    planned_hours(&WorkSchedule::from(code), month)
}

fn weekdays(month: &ReportMonth) -> u32 {
    month
        .days()
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32
}
