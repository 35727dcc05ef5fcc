use bigdecimal::{BigDecimal, RoundingMode, Signed, ToPrimitive, Zero};

use crate::models::{AttendanceSummary, Money, PayTerms, PaymentType, WageBreakdown};

/// Rounds half away from zero to a whole money amount.
pub fn round_money(value: &BigDecimal) -> Money {
    let rounded = value.with_scale_round(0, RoundingMode::HalfUp);
    rounded.to_i64().unwrap_or_else(|| {
        log::error!("Money amount {} is out of range, saturating", rounded);
        if rounded.is_negative() { Money::MIN } else { Money::MAX }
    })
}

/// Wage earned for `actual_hours` against a plan of `planned_hours`.
///
/// Salaried staff get the full salary once the plan is met and a
/// proportional share otherwise. A zero plan yields a zero wage.
pub fn wage(pay: &PayTerms, actual_hours: &BigDecimal, planned_hours: u32) -> Money {
    match (pay.payment_type, pay.monthly_salary, pay.hourly_rate) {
        (PaymentType::Salary, Some(salary), _) => {
            if planned_hours == 0 {
                return 0;
            }
            let planned = BigDecimal::from(planned_hours);
            if *actual_hours >= planned {
                salary
            } else {
                round_money(&(BigDecimal::from(salary) * actual_hours / planned))
            }
        }
        (PaymentType::Hourly, _, Some(rate)) => round_money(&(BigDecimal::from(rate) * actual_hours)),
        _ => 0,
    }
}

/// Wage budgeted for a month worked exactly to plan.
pub fn planned_wage(pay: &PayTerms, planned_hours: u32) -> Money {
    match (pay.payment_type, pay.monthly_salary, pay.hourly_rate) {
        (PaymentType::Salary, Some(salary), _) => salary,
        (PaymentType::Hourly, _, Some(rate)) => rate.saturating_mul(Money::from(planned_hours)),
        _ => 0,
    }
}

/// Splits `total` proportionally to the hours worked in each half.
///
/// Returns `(advance, final)`; the final part absorbs rounding so both
/// parts always add up to `total`.
pub fn split_wage(
    total: Money,
    advance_hours: &BigDecimal,
    actual_hours: &BigDecimal,
) -> (Money, Money) {
    if actual_hours.is_zero() || actual_hours.is_negative() {
        return (0, total);
    }
    let advance = round_money(&(BigDecimal::from(total) * advance_hours / actual_hours));
    (advance, total - advance)
}

/// Full wage breakdown of one employee for the month.
pub fn breakdown(pay: &PayTerms, attendance: &AttendanceSummary, planned_hours: u32) -> WageBreakdown {
    let total_wage = wage(pay, &attendance.actual_hours, planned_hours);
    let (advance_wage, final_wage) = split_wage(
        total_wage,
        &attendance.advance_hours,
        &attendance.actual_hours,
    );

    WageBreakdown {
        planned_wage: planned_wage(pay, planned_hours),
        total_wage,
        advance_wage,
        final_wage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn hours(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(&hours("2.5")), 3);
        assert_eq!(round_money(&hours("2.49")), 2);
        assert_eq!(round_money(&hours("0.5")), 1);
        assert_eq!(round_money(&hours("0")), 0);
    }

    #[test]
    fn test_hourly_wage() {
        let pay = PayTerms::hourly(300);
        assert_eq!(wage(&pay, &hours("150"), 160), 45000);
        assert_eq!(wage(&pay, &hours("7.5"), 160), 2250);
        assert_eq!(planned_wage(&pay, 160), 48000);
    }

    #[test]
    fn test_salary_wage_reduced_for_underwork() {
        let pay = PayTerms::salary(60000);
        assert_eq!(wage(&pay, &hours("80"), 160), 30000);
        assert_eq!(wage(&pay, &hours("160"), 160), 60000);
        assert_eq!(wage(&pay, &hours("200"), 160), 60000);
        assert_eq!(wage(&pay, &hours("1"), 168), 357);
        assert_eq!(planned_wage(&pay, 160), 60000);
    }

    #[test]
    fn test_salary_with_zero_plan_is_zero() {
        assert_eq!(wage(&PayTerms::salary(60000), &hours("10"), 0), 0);
    }

    #[test]
    fn test_missing_rate_is_zero() {
        let pay = PayTerms {
            payment_type: PaymentType::Hourly,
            hourly_rate: None,
            monthly_salary: Some(50000),
        };
        assert_eq!(wage(&pay, &hours("100"), 160), 0);
        assert_eq!(planned_wage(&pay, 160), 0);
    }

    #[test]
    fn test_planned_wage_saturates() {
        assert_eq!(planned_wage(&PayTerms::hourly(Money::MAX / 100), 160), Money::MAX);
        assert_eq!(planned_wage(&PayTerms::hourly(-Money::MAX / 100), 160), Money::MIN);
        assert_eq!(planned_wage(&PayTerms::hourly(300), 160), 48000);
    }

    #[test]
    fn test_split_wage() {
        assert_eq!(split_wage(45000, &hours("150"), &hours("150")), (45000, 0));
        assert_eq!(split_wage(30000, &hours("40"), &hours("80")), (15000, 15000));
        assert_eq!(split_wage(100, &hours("1"), &hours("3")), (33, 67));
        assert_eq!(split_wage(0, &hours("0"), &hours("0")), (0, 0));
    }

    #[test]
    fn test_split_never_leaks() {
        for _ in 0..200 {
            let total: Money = (0..1_000_000).fake();
            let actual: u32 = (1..400).fake();
            let advance: u32 = (0..=actual).fake();

            let (a, f) = split_wage(
                total,
                &BigDecimal::from(advance),
                &BigDecimal::from(actual),
            );

            assert_eq!(a + f, total);
            assert!(a >= 0 && f >= 0);
        }
    }
}
