use bigdecimal::BigDecimal;
use chrono::Datelike;
use uuid::Uuid;

use crate::models::{AttendanceSummary, DayCode, DayValue, ReportMonth, Timesheet};

/// Last day of the month paid with the advance.
pub const DEFAULT_ADVANCE_CUTOFF_DAY: u32 = 15;

/// Reduces one employee's timesheet cells for `month` into hour totals.
///
/// Days `1..=advance_cutoff_day` count toward the advance, the rest toward
/// the final payment. Missing days contribute nothing.
pub fn summarize(
    employee_id: Uuid,
    timesheet: &Timesheet,
    month: &ReportMonth,
    advance_cutoff_day: u32,
) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();

    for date in month.days() {
        let Some(value) = timesheet.get(employee_id, date) else {
            continue;
        };

        match value {
            DayValue::Hours(raw) => match value.countable_hours() {
                Some(hours) => {
                    if date.day() <= advance_cutoff_day {
                        summary.advance_hours += hours;
                    } else {
                        summary.main_hours += hours;
                    }
                    if *hours > BigDecimal::from(0) {
                        summary.worked_days += 1;
                    }
                }
                None => {
                    log::debug!(
                        "Ignoring out-of-range hours {} for employee {} on {}",
                        raw,
                        employee_id,
                        date
                    );
                    summary.rejected_entries += 1;
                }
            },
            DayValue::Code(DayCode::Sick) => summary.sick_days += 1,
            DayValue::Code(DayCode::Vacation) => summary.vacation_days += 1,
            DayValue::Code(DayCode::Absence) => summary.absence_days += 1,
            DayValue::Code(DayCode::Terminated) => summary.terminated_days += 1,
            DayValue::Unrecognized(raw) => {
                log::debug!(
                    "Ignoring unrecognized cell {:?} for employee {} on {}",
                    raw,
                    employee_id,
                    date
                );
                summary.rejected_entries += 1;
            }
        }
    }

    summary.actual_hours = &summary.advance_hours + &summary.main_hours;
    summary
}
