use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::Money;
use super::macros::string_enum;
use super::schedule::WorkSchedule;
use crate::error::PayrollError;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum EmployeeStatus {
        #[default]
        Active => "active",
        NotRegistered => "not_registered",
        Fired => "fired",
    }
}

impl EmployeeStatus {
    /// Active and part-time staff occupy a position slot; fired staff do not.
    pub fn holds_position(&self) -> bool {
        matches!(self, EmployeeStatus::Active | EmployeeStatus::NotRegistered)
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum PaymentType {
        #[default]
        Hourly => "hourly",
        Salary => "salary",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum PaymentMethod {
        #[default]
        Card => "card",
        Cash => "cash",
    }
}

/// Pay terms shared by employees and positions.
///
/// Only the rate matching `payment_type` is meaningful; the other one is
/// ignored by every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PayTerms {
    #[serde(default)]
    pub payment_type: PaymentType,
    pub hourly_rate: Option<Money>,
    pub monthly_salary: Option<Money>,
}

impl PayTerms {
    pub fn hourly(rate: Money) -> Self {
        PayTerms {
            payment_type: PaymentType::Hourly,
            hourly_rate: Some(rate),
            monthly_salary: None,
        }
    }

    pub fn salary(amount: Money) -> Self {
        PayTerms {
            payment_type: PaymentType::Salary,
            hourly_rate: None,
            monthly_salary: Some(amount),
        }
    }
}

/// Reads an explicit `null` the same way as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub object_id: Option<Uuid>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: EmployeeStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_schedule: WorkSchedule,
    #[serde(flatten)]
    pub pay: PayTerms,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_method: PaymentMethod,
    pub termination_date: Option<NaiveDate>,
}

impl Employee {
    /// Rejects records that cannot be shown on a report.
    pub fn validate(&self) -> Result<(), PayrollError> {
        if self.id.is_nil() {
            return Err(PayrollError::missing_field("id", &self.name));
        }
        if self.name.trim().is_empty() {
            return Err(PayrollError::missing_field("name", self.id.to_string()));
        }
        Ok(())
    }

    pub fn is_valid_record(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn works_at(&self, site_id: Uuid) -> bool {
        self.object_id == Some(site_id)
    }

    pub fn display_name(&self) -> &str {
        self.name.trim()
    }

    /// Marks the employee as fired as of `date`.
    pub fn fire(&mut self, date: NaiveDate) {
        self.status = EmployeeStatus::Fired;
        self.termination_date = Some(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_parses_case_insensitively() {
        assert_eq!(
            " Not_Registered ".parse::<EmployeeStatus>(),
            Ok(EmployeeStatus::NotRegistered)
        );
        assert!("retired".parse::<EmployeeStatus>().is_err());
        assert!(EmployeeStatus::Active.holds_position());
        assert!(!EmployeeStatus::Fired.holds_position());
    }

    #[test]
    fn test_employee_deserializes_with_missing_name() {
        let employee: Employee = serde_json::from_value(serde_json::json!({
            "id": "7f1b3c3e-9a49-4c57-9f0e-2d0c0e6f1a11",
            "objectId": null,
            "status": "active",
            "workSchedule": "5/2",
            "paymentType": "salary",
            "monthlySalary": 60000,
            "paymentMethod": "cash"
        }))
        .unwrap();

        assert_eq!(employee.name, "");
        assert_eq!(employee.pay, PayTerms::salary(60000));
        assert_eq!(employee.payment_method, PaymentMethod::Cash);
        assert!(matches!(
            employee.validate(),
            Err(PayrollError::MissingField { field: "name", .. })
        ));
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let employees: Vec<Employee> = serde_json::from_value(serde_json::json!([
            {
                "id": null,
                "name": "Сидоров С.",
                "title": null,
                "workSchedule": null,
                "paymentType": "hourly",
                "hourlyRate": 250
            },
            {
                "id": "7f1b3c3e-9a49-4c57-9f0e-2d0c0e6f1a11",
                "name": null,
                "status": null,
                "paymentMethod": null
            }
        ]))
        .unwrap();

        assert!(employees[0].id.is_nil());
        assert_eq!(employees[0].title, "");
        assert_eq!(employees[0].work_schedule, WorkSchedule::default());
        assert!(matches!(
            employees[0].validate(),
            Err(PayrollError::MissingField { field: "id", .. })
        ));

        assert_eq!(employees[1].name, "");
        assert_eq!(employees[1].status, EmployeeStatus::Active);
        assert_eq!(employees[1].payment_method, PaymentMethod::Card);
        assert!(matches!(
            employees[1].validate(),
            Err(PayrollError::MissingField { field: "name", .. })
        ));
    }

    #[test]
    fn test_nil_id_is_missing() {
        let employee = Employee {
            id: Uuid::nil(),
            name: "Иванов Иван".to_string(),
            object_id: None,
            title: "Охранник".to_string(),
            status: EmployeeStatus::Active,
            work_schedule: WorkSchedule::default(),
            pay: PayTerms::hourly(300),
            payment_method: PaymentMethod::Card,
            termination_date: None,
        };

        assert!(!employee.is_valid_record());
    }

    #[test]
    fn test_fire_sets_termination_date() {
        let mut employee = crate::test_utils::MockData::hourly_employee("Петров", 300);
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        employee.fire(date);

        assert_eq!(employee.status, EmployeeStatus::Fired);
        assert_eq!(employee.termination_date, Some(date));
    }
}
