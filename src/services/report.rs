use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{
    Employee, GroupSubtotal, Locale, Position, Report, ReportGroup, ReportMonth,
    ReportRow, ReportTotals, Shortfall, TimeEntry, Timesheet, Validity,
};
use crate::services::attendance::{self, DEFAULT_ADVANCE_CUTOFF_DAY};
use crate::services::{roster, schedule_hours, vacancy, wage};

/// Explicit engine settings; nothing is read from ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub locale: Locale,
    pub advance_cutoff_day: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            locale: Locale::default(),
            advance_cutoff_day: DEFAULT_ADVANCE_CUTOFF_DAY,
        }
    }
}

/// Read-only snapshot of one site-month.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub month: &'a str,
    pub site_id: Uuid,
    pub manager_name: Option<&'a str>,
    pub employees: &'a [Employee],
    pub positions: &'a [Position],
    pub time_entries: &'a [TimeEntry],
}

/// Builds monthly timesheet and payroll reports.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    settings: ReportSettings,
}

impl ReportAssembler {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Computes the report for one site and month.
    ///
    /// Fails only when the month cannot be parsed; defective employee records
    /// are skipped and logged.
    pub fn build_report(&self, input: ReportInput<'_>) -> Result<Report, PayrollError> {
        let month: ReportMonth = input.month.parse()?;
        let locale = &self.settings.locale;
        let timesheet = Timesheet::from_entries(input.time_entries);

        let site = roster::site_employees(input.employees, input.site_id);
        let roster = roster::classify(&site.employees, input.manager_name, locale);
        let staff = self.group(&roster.staff, &timesheet, &month);
        let part_time = self.group(&roster.part_time, &timesheet, &month);
        let vacancies = vacancy::resolve(
            input.positions,
            &site.employees,
            input.site_id,
            &month,
            locale,
        );

        let mut totals = ReportTotals::default();
        let mut shortfalls = Vec::new();
        for row in staff.rows.iter().chain(part_time.rows.iter()) {
            totals.planned_hours += row.planned_hours;
            totals.actual_hours += &row.attendance.actual_hours;
            totals.planned_wage += row.wages.planned_wage;
            totals.actual_wage += row.wages.total_wage;
            totals.advance.add(row.payment_method, row.wages.advance_wage);
            totals.final_pay.add(row.payment_method, row.wages.final_wage);

            if !row.is_valid {
                shortfalls.push(Shortfall {
                    employee_id: row.employee_id,
                    name: row.name.clone(),
                    planned_hours: row.planned_hours,
                    actual_hours: row.attendance.actual_hours.clone(),
                    missing_hours: row.shortfall_hours(),
                });
            }
        }

        let validity = Validity {
            is_valid: shortfalls.is_empty(),
            shortfalls,
        };

        log::info!(
            "Built report for site {} {}: {} staff, {} part-time, {} vacant slots, {} rejected records, valid={}",
            input.site_id,
            month,
            staff.rows.len(),
            part_time.rows.len(),
            vacancies.total_slots,
            site.rejected,
            validity.is_valid
        );

        Ok(Report {
            month,
            site_id: input.site_id,
            staff,
            part_time,
            vacancies,
            totals,
            validity,
            rejected_records: site.rejected,
        })
    }

    /// Computes one employee's row.
    pub fn row(&self, employee: &Employee, timesheet: &Timesheet, month: &ReportMonth) -> ReportRow {
        let planned_hours = schedule_hours::planned_hours(&employee.work_schedule, month);
        let attendance = attendance::summarize(
            employee.id,
            timesheet,
            month,
            self.settings.advance_cutoff_day,
        );
        let wages = wage::breakdown(&employee.pay, &attendance, planned_hours);
        let is_valid = attendance.actual_hours >= BigDecimal::from(planned_hours);

        ReportRow {
            employee_id: employee.id,
            name: employee.display_name().to_string(),
            title: employee.title.clone(),
            work_schedule: employee.work_schedule.clone(),
            payment_type: employee.pay.payment_type,
            payment_method: employee.payment_method,
            planned_hours,
            attendance,
            wages,
            is_valid,
        }
    }

    fn group(&self, employees: &[&Employee], timesheet: &Timesheet, month: &ReportMonth) -> ReportGroup {
        let rows: Vec<ReportRow> = employees
            .iter()
            .map(|employee| self.row(employee, timesheet, month))
            .collect();

        let mut subtotal = GroupSubtotal::default();
        for row in &rows {
            subtotal.actual_hours += &row.attendance.actual_hours;
            subtotal.total_wage += row.wages.total_wage;
        }

        ReportGroup { rows, subtotal }
    }
}
