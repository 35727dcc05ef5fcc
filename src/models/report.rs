use bigdecimal::BigDecimal;
use serde::Serialize;
use uuid::Uuid;

use super::Money;
use super::employee::{PaymentMethod, PaymentType};
use super::month::ReportMonth;
use super::schedule::WorkSchedule;

/// Hours and day counts reduced from one employee's month of timesheet cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub actual_hours: BigDecimal,
    pub advance_hours: BigDecimal,
    pub main_hours: BigDecimal,
    pub worked_days: u32,
    pub sick_days: u32,
    pub vacation_days: u32,
    pub absence_days: u32,
    pub terminated_days: u32,
    pub rejected_entries: u32,
}

/// Wage of one employee split into the advance and final payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WageBreakdown {
    pub planned_wage: Money,
    pub total_wage: Money,
    pub advance_wage: Money,
    pub final_wage: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub employee_id: Uuid,
    pub name: String,
    pub title: String,
    pub work_schedule: WorkSchedule,
    pub payment_type: PaymentType,
    pub payment_method: PaymentMethod,
    pub planned_hours: u32,
    #[serde(flatten)]
    pub attendance: AttendanceSummary,
    #[serde(flatten)]
    pub wages: WageBreakdown,
    pub is_valid: bool,
}

impl ReportRow {
    /// Hours still missing to reach the plan, zero when the plan is met.
    pub fn shortfall_hours(&self) -> BigDecimal {
        let missing = BigDecimal::from(self.planned_hours) - &self.attendance.actual_hours;
        if missing > BigDecimal::from(0) {
            missing
        } else {
            BigDecimal::from(0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSubtotal {
    pub actual_hours: BigDecimal,
    pub total_wage: Money,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportGroup {
    pub rows: Vec<ReportRow>,
    pub subtotal: GroupSubtotal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    pub position_id: Uuid,
    pub title: String,
    pub count: u32,
    pub work_schedule: WorkSchedule,
    pub payment_type: PaymentType,
    /// Planned hours of a single vacant slot.
    pub planned_hours: u32,
    /// Planned wage of a single vacant slot.
    pub planned_wage: Money,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancySection {
    pub items: Vec<Vacancy>,
    pub total_slots: u32,
}

/// Amounts paid by card and in cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelTotals {
    pub card: Money,
    pub cash: Money,
}

impl ChannelTotals {
    pub fn add(&mut self, method: PaymentMethod, amount: Money) {
        match method {
            PaymentMethod::Card => self.card += amount,
            PaymentMethod::Cash => self.cash += amount,
        }
    }

    pub fn total(&self) -> Money {
        self.card + self.cash
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    pub planned_hours: u32,
    pub actual_hours: BigDecimal,
    pub planned_wage: Money,
    pub actual_wage: Money,
    pub advance: ChannelTotals,
    #[serde(rename = "final")]
    pub final_pay: ChannelTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortfall {
    pub employee_id: Uuid,
    pub name: String,
    pub planned_hours: u32,
    pub actual_hours: BigDecimal,
    pub missing_hours: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validity {
    pub is_valid: bool,
    pub shortfalls: Vec<Shortfall>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub month: ReportMonth,
    pub site_id: Uuid,
    pub staff: ReportGroup,
    pub part_time: ReportGroup,
    pub vacancies: VacancySection,
    pub totals: ReportTotals,
    pub validity: Validity,
    /// Site employee records skipped for a missing id or name.
    pub rejected_records: u32,
}

impl Report {
    /// Staff rows followed by part-time rows, in presentation order.
    pub fn rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.staff.rows.iter().chain(self.part_time.rows.iter())
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid
    }
}
