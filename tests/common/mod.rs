use chrono::NaiveDate;
use payroll::models::*;
use std::env;
use uuid::Uuid;

pub fn setup_test_env() {
    unsafe {
        env::set_var("ENVIRONMENT", "test");
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn employee(site_id: Uuid, name: &str, title: &str, pay: PayTerms) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        name: name.to_string(),
        object_id: Some(site_id),
        title: title.to_string(),
        status: EmployeeStatus::Active,
        work_schedule: WorkSchedule::FiveTwo,
        pay,
        payment_method: PaymentMethod::Card,
        termination_date: None,
    }
}

pub fn position(site_id: Uuid, title: &str, positions_count: u32) -> Position {
    Position {
        id: Uuid::new_v4(),
        object_id: site_id,
        title: title.to_string(),
        work_schedule: WorkSchedule::FiveTwo,
        pay: PayTerms::hourly(250),
        positions_count,
    }
}

/// One entry of `hours` for each day of `month` in `days`.
pub fn worked(
    employee_id: Uuid,
    month: &str,
    days: impl IntoIterator<Item = u32>,
    hours: i32,
) -> Vec<TimeEntry> {
    days.into_iter()
        .map(|day| {
            TimeEntry::new(
                employee_id,
                date(&format!("{}-{:02}", month, day)),
                DayValue::hours(hours),
            )
        })
        .collect()
}
