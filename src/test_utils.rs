use chrono::NaiveDate;
use fake::Fake;
use fake::faker::name::en::Name;
use uuid::Uuid;

use crate::models::*;

/// Builders for engine inputs used across unit tests
pub struct MockData;

impl MockData {
    pub fn site_id() -> Uuid {
        Uuid::new_v4()
    }

    /// Active hourly employee on a 5/2 schedule, not assigned to a site
    pub fn titled(name: &str, title: &str) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: name.to_string(),
            object_id: None,
            title: title.to_string(),
            status: EmployeeStatus::Active,
            work_schedule: WorkSchedule::FiveTwo,
            pay: PayTerms::hourly(300),
            payment_method: PaymentMethod::Card,
            termination_date: None,
        }
    }

    pub fn hourly_employee(name: &str, rate: Money) -> Employee {
        let mut employee = Self::titled(name, "Охранник");
        employee.pay = PayTerms::hourly(rate);
        employee
    }

    pub fn salaried_employee(name: &str, salary: Money) -> Employee {
        let mut employee = Self::titled(name, "Администратор");
        employee.pay = PayTerms::salary(salary);
        employee
    }

    pub fn random_employee(site_id: Uuid) -> Employee {
        let name: String = Name().fake();
        let mut employee = Self::at_site(Self::titled(&name, "Охранник"), site_id);
        employee.pay = PayTerms::hourly((100..1000).fake());
        employee
    }

    pub fn at_site(mut employee: Employee, site_id: Uuid) -> Employee {
        employee.object_id = Some(site_id);
        employee
    }

    pub fn position(site_id: Uuid, title: &str, positions_count: u32) -> Position {
        Position {
            id: Uuid::new_v4(),
            object_id: site_id,
            title: title.to_string(),
            work_schedule: WorkSchedule::FiveTwo,
            pay: PayTerms::hourly(300),
            positions_count,
        }
    }

    pub fn daily_hours(
        employee_id: Uuid,
        dates: impl IntoIterator<Item = NaiveDate>,
        hours: i32,
    ) -> Vec<TimeEntry> {
        dates
            .into_iter()
            .map(|date| TimeEntry::new(employee_id, date, DayValue::hours(hours)))
            .collect()
    }
}
