use uuid::Uuid;

use crate::models::{Employee, Locale, Position, ReportMonth, Vacancy, VacancySection};
use crate::services::{schedule_hours, wage};

/// Unfilled slots per position of a site.
///
/// `site_staff` holds the site's usable employee records. Assigned headcount counts active and part-time employees whose title
/// equals the position's title exactly. Each position row is compared on its
/// own, so rows sharing a title are not merged.
pub fn resolve(
    positions: &[Position],
    site_staff: &[&Employee],
    site_id: Uuid,
    month: &ReportMonth,
    locale: &Locale,
) -> VacancySection {
    let holders: Vec<&Employee> = site_staff
        .iter()
        .copied()
        .filter(|employee| employee.status.holds_position())
        .collect();

    let mut items: Vec<Vacancy> = positions
        .iter()
        .filter(|position| position.belongs_to(site_id))
        .filter_map(|position| {
            let assigned = holders
                .iter()
                .filter(|employee| employee.title == position.title)
                .count() as u32;
            let count = position.positions_count.saturating_sub(assigned);
            if count == 0 {
                return None;
            }

            let planned_hours = schedule_hours::planned_hours(&position.work_schedule, month);
            Some(Vacancy {
                position_id: position.id,
                title: position.title.clone(),
                count,
                work_schedule: position.work_schedule.clone(),
                payment_type: position.pay.payment_type,
                planned_hours,
                planned_wage: wage::planned_wage(&position.pay, planned_hours),
            })
        })
        .collect();

    items.sort_by(|a, b| locale.compare(&a.title, &b.title));
    let total_slots = items.iter().map(|vacancy| vacancy.count).sum();

    VacancySection { items, total_slots }
}
