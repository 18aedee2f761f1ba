//! Derived figures for a [`FormSnapshot`].
//!
//! Everything here is a pure function of the snapshot. The view calls these on
//! every render instead of caching results, so the totals can never lag behind
//! what is typed into the form.

use crate::snapshot::FormSnapshot;

/// Months of total costs the emergency reserve is expected to cover.
pub const RESERVE_MONTHS: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HealthStatus {
    /// Profit is zero or negative.
    Deficit,
    /// Profitable, but the emergency reserve is below `required_reserve`.
    UnderReserved { required_reserve: f64 },
    Healthy,
}

/// Numeric value of a form entry.
///
/// Blank text is zero, well-formed numbers are their value and anything else
/// is NaN, which then flows through the arithmetic untouched.
pub fn coerce(text: &str) -> f64 {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = radix_literal(trimmed) {
        return value;
    }

    // f64::from_str also takes "inf" and "nan", which are not numbers here.
    let decimal_chars = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_chars {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(value.unwrap_or(f64::NAN))
}

pub fn total_revenue(snapshot: &FormSnapshot) -> f64 {
    let revenue = &snapshot.revenue;
    [&revenue.products, &revenue.services]
        .into_iter()
        .fold(0.0, |total, value| total + coerce(value))
}

pub fn total_fixed_costs(snapshot: &FormSnapshot) -> f64 {
    let fixed = &snapshot.fixed_costs;
    [&fixed.tools, &fixed.hosting, &fixed.workspace]
        .into_iter()
        .fold(0.0, |total, value| total + coerce(value))
}

/// Payment-processor cut of total revenue.
pub fn gateway_fee(snapshot: &FormSnapshot) -> f64 {
    let percentage = coerce(&snapshot.variable_costs.gateway_percentage);
    total_revenue(snapshot) * (percentage / 100.0)
}

/// Marketing, other costs and the gateway fee.
///
/// The raw gateway percentage is not a cost and is never summed here.
pub fn total_variable_costs(snapshot: &FormSnapshot) -> f64 {
    let variable = &snapshot.variable_costs;
    coerce(&variable.marketing) + coerce(&variable.others) + gateway_fee(snapshot)
}

pub fn total_costs(snapshot: &FormSnapshot) -> f64 {
    total_fixed_costs(snapshot) + total_variable_costs(snapshot)
}

pub fn profit(snapshot: &FormSnapshot) -> f64 {
    total_revenue(snapshot) - (total_fixed_costs(snapshot) + total_variable_costs(snapshot))
}

pub fn required_reserve(snapshot: &FormSnapshot) -> f64 {
    total_costs(snapshot) * RESERVE_MONTHS
}

pub fn health_status(snapshot: &FormSnapshot) -> HealthStatus {
    let required_reserve = required_reserve(snapshot);

    if profit(snapshot) <= 0.0 {
        HealthStatus::Deficit
    } else if coerce(&snapshot.emergency) < required_reserve {
        HealthStatus::UnderReserved { required_reserve }
    } else {
        HealthStatus::Healthy
    }
}

/// All derived figures for one render of the summary tab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub total_revenue: f64,
    pub total_fixed_costs: f64,
    pub gateway_fee: f64,
    pub total_variable_costs: f64,
    pub profit: f64,
    pub health: HealthStatus,
}

impl Summary {
    pub fn of(snapshot: &FormSnapshot) -> Self {
        Self {
            total_revenue: total_revenue(snapshot),
            total_fixed_costs: total_fixed_costs(snapshot),
            gateway_fee: gateway_fee(snapshot),
            total_variable_costs: total_variable_costs(snapshot),
            profit: profit(snapshot),
            health: health_status(snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Field;

    fn snapshot(values: &[(Field, &str)]) -> FormSnapshot {
        let mut snapshot = FormSnapshot::default();
        for (field, value) in values {
            snapshot.set(*field, *value);
        }
        snapshot
    }

    #[test]
    fn coerce_follows_form_number_rules() {
        assert_eq!(coerce(""), 0.0);
        assert_eq!(coerce("   "), 0.0);
        assert_eq!(coerce("42"), 42.0);
        assert_eq!(coerce(" 2.99 "), 2.99);
        assert_eq!(coerce("-150.5"), -150.5);
        assert_eq!(coerce("+7"), 7.0);
        assert_eq!(coerce(".5"), 0.5);
        assert_eq!(coerce("1e3"), 1000.0);
        assert_eq!(coerce("0x1F"), 31.0);
        assert_eq!(coerce("0b101"), 5.0);
        assert_eq!(coerce("Infinity"), f64::INFINITY);
        assert_eq!(coerce("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn coerce_turns_garbage_into_nan() {
        for text in ["abc", "12abc", "1,5", "inf", "NaN", "infinity", "0x", "0xZZ", "."] {
            assert!(coerce(text).is_nan(), "{text:?} should be NaN");
        }
    }

    #[test]
    fn blank_snapshot_has_zero_totals() {
        let blank = FormSnapshot::default();

        assert_eq!(total_revenue(&blank), 0.0);
        assert_eq!(total_fixed_costs(&blank), 0.0);
        assert_eq!(gateway_fee(&blank), 0.0);
        assert_eq!(total_variable_costs(&blank), 0.0);
        assert_eq!(profit(&blank), 0.0);
        assert_eq!(required_reserve(&blank), 0.0);
    }

    #[test]
    fn blank_snapshot_is_a_deficit_because_zero_profit_is_not_profit() {
        assert_eq!(health_status(&FormSnapshot::default()), HealthStatus::Deficit);
    }

    #[test]
    fn zero_reserve_meets_zero_requirement() {
        let costless = snapshot(&[(Field::Services, "100")]);

        assert_eq!(required_reserve(&costless), 0.0);
        assert_eq!(health_status(&costless), HealthStatus::Healthy);
    }

    #[test]
    fn gateway_fee_is_a_percentage_of_revenue() {
        let base = snapshot(&[(Field::Products, "1000"), (Field::Services, "0")]);

        for percentage in [0.0, 1.5, 3.0, 10.0, 100.0] {
            let with_fee = base.with(Field::GatewayPercentage, percentage.to_string());
            assert_eq!(gateway_fee(&with_fee), 1000.0 * (percentage / 100.0));
        }
    }

    #[test]
    fn variable_costs_include_fee_but_not_raw_percentage() {
        let snapshot = snapshot(&[
            (Field::Products, "1000"),
            (Field::Services, "0"),
            (Field::GatewayPercentage, "3"),
            (Field::Marketing, "0"),
            (Field::Others, "0"),
        ]);

        assert_eq!(gateway_fee(&snapshot), 30.0);
        assert_eq!(total_variable_costs(&snapshot), 30.0);
    }

    #[test]
    fn profit_is_revenue_minus_all_costs() {
        let snapshot = snapshot(&[
            (Field::Products, "3000"),
            (Field::Services, "2000"),
            (Field::Tools, "500"),
            (Field::Hosting, "500"),
            (Field::Workspace, "1000"),
            (Field::Marketing, "300"),
            (Field::Others, "200"),
        ]);

        assert_eq!(total_revenue(&snapshot), 5000.0);
        assert_eq!(total_fixed_costs(&snapshot), 2000.0);
        assert_eq!(total_variable_costs(&snapshot), 500.0);
        assert_eq!(profit(&snapshot), 2500.0);
    }

    #[test]
    fn thin_reserve_reports_required_amount() {
        let snapshot = snapshot(&[
            (Field::Products, "5000"),
            (Field::Tools, "2000"),
            (Field::Marketing, "500"),
            (Field::Emergency, "5000"),
        ]);

        assert_eq!(profit(&snapshot), 2500.0);
        assert_eq!(
            health_status(&snapshot),
            HealthStatus::UnderReserved {
                required_reserve: 7500.0
            }
        );
        assert_eq!(
            health_status(&snapshot.with(Field::Emergency, "7500")),
            HealthStatus::Healthy
        );
    }

    #[test]
    fn losses_are_a_deficit_whatever_the_reserve() {
        let losing = snapshot(&[(Field::Services, "900"), (Field::Hosting, "1000")]);
        assert_eq!(profit(&losing), -100.0);

        for emergency in ["", "0", "1000000"] {
            assert_eq!(
                health_status(&losing.with(Field::Emergency, emergency)),
                HealthStatus::Deficit
            );
        }
    }

    #[test]
    fn negative_inputs_are_taken_as_entered() {
        let snapshot = snapshot(&[(Field::Products, "1000"), (Field::Tools, "-200")]);

        assert_eq!(total_fixed_costs(&snapshot), -200.0);
        assert_eq!(profit(&snapshot), 1200.0);
    }

    #[test]
    fn garbage_propagates_as_nan() {
        let snapshot = snapshot(&[(Field::Products, "1000"), (Field::Services, "lots")]);

        assert!(total_revenue(&snapshot).is_nan());
        assert!(gateway_fee(&snapshot).is_nan());
        assert!(profit(&snapshot).is_nan());
        // NaN fails both comparisons, so nothing flags it.
        assert_eq!(health_status(&snapshot), HealthStatus::Healthy);
    }

    #[test]
    fn goals_do_not_affect_any_total() {
        let with_goals = snapshot(&[
            (Field::ShortTermGoal, "5000"),
            (Field::MediumTermGoal, "10000"),
            (Field::LongTermGoal, "abc"),
        ]);

        assert_eq!(Summary::of(&with_goals), Summary::of(&FormSnapshot::default()));
    }

    #[test]
    fn summary_is_stable_across_evaluations() {
        let snapshot = snapshot(&[
            (Field::Products, "1234.56"),
            (Field::GatewayPercentage, "2.99"),
            (Field::Hosting, "89.9"),
            (Field::Emergency, "100"),
        ]);

        let first = Summary::of(&snapshot);
        assert_eq!(first, Summary::of(&snapshot));
        assert_eq!(first.profit, profit(&snapshot));
        assert_eq!(first.health, health_status(&snapshot));
    }
}
