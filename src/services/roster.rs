use uuid::Uuid;

use crate::models::{Employee, EmployeeStatus, Locale};

/// Employees of one site grouped for presentation.
#[derive(Debug, Clone, Default)]
pub struct Roster<'a> {
    /// Site manager first, then administrators, then everyone else.
    pub staff: Vec<&'a Employee>,
    /// Part-time (`not_registered`) employees, alphabetical.
    pub part_time: Vec<&'a Employee>,
}

impl Roster<'_> {
    pub fn len(&self) -> usize {
        self.staff.len() + self.part_time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty() && self.part_time.is_empty()
    }
}

/// Usable employee records of one site.
#[derive(Debug, Clone, Default)]
pub struct SiteEmployees<'a> {
    pub employees: Vec<&'a Employee>,
    /// Site records skipped for a missing id or name.
    pub rejected: u32,
}

/// Employees of `site_id` with a usable id and name.
///
/// Defective records are logged once and skipped rather than failing the report.
pub fn site_employees(employees: &[Employee], site_id: Uuid) -> SiteEmployees<'_> {
    let mut site = SiteEmployees::default();
    for employee in employees.iter().filter(|employee| employee.works_at(site_id)) {
        match employee.validate() {
            Ok(()) => site.employees.push(employee),
            Err(e) => {
                log::warn!("Skipping employee record: {}", e);
                site.rejected += 1;
            }
        }
    }
    site
}

/// Orders the employees of a site into staff and part-time groups.
///
/// `site_staff` is the output of [`site_employees`]. Fired employees are left out. The staff member whose name equals
/// `manager_name` leads the list, administrators follow, and the remaining
/// staff close it, each group sorted with the locale's collation.
pub fn classify<'a>(
    site_staff: &[&'a Employee],
    manager_name: Option<&str>,
    locale: &Locale,
) -> Roster<'a> {
    let manager_name = manager_name.map(str::trim).filter(|name| !name.is_empty());

    let mut manager: Option<&Employee> = None;
    let mut administrators = Vec::new();
    let mut others = Vec::new();
    let mut part_time = Vec::new();

    for &employee in site_staff {
        match employee.status {
            EmployeeStatus::Fired => {}
            EmployeeStatus::NotRegistered => part_time.push(employee),
            EmployeeStatus::Active => {
                if manager.is_none() && manager_name == Some(employee.display_name()) {
                    manager = Some(employee);
                } else if locale.is_administrator_title(&employee.title) {
                    administrators.push(employee);
                } else {
                    others.push(employee);
                }
            }
        }
    }

    let by_name = |a: &&Employee, b: &&Employee| locale.compare(a.display_name(), b.display_name());
    administrators.sort_by(by_name);
    others.sort_by(by_name);
    part_time.sort_by(by_name);

    let mut staff = Vec::with_capacity(administrators.len() + others.len() + 1);
    staff.extend(manager);
    staff.extend(administrators);
    staff.extend(others);

    Roster { staff, part_time }
}
