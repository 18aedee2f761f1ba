//! Brazilian Real rendering: `.` groups thousands and `,` separates decimals.

use crate::calc::{HealthStatus, RESERVE_MONTHS};

const MAX_FRACTION_DIGITS: usize = 3;

/// pt-BR rendering of `value` with at least `min_fraction_digits` decimals.
///
/// Up to three decimals are kept (more if the minimum asks for it), rounding
/// half away from zero on the shortest decimal form of the value.
pub fn format_number(value: f64, min_fraction_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}∞", sign);
    }

    let max_fraction_digits = min_fraction_digits.max(MAX_FRACTION_DIGITS);
    let (integer, mut fraction) = round_decimal(&value.abs().to_string(), max_fraction_digits);

    while fraction.len() > min_fraction_digits && fraction.ends_with('0') {
        fraction.pop();
    }
    while fraction.len() < min_fraction_digits {
        fraction.push('0');
    }

    let grouped = group_thousands(&integer);
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, fraction)
    }
}

pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{} {}", symbol, format_number(amount, 2))
}

pub fn health_message(status: &HealthStatus, symbol: &str) -> String {
    match status {
        HealthStatus::Deficit => "🚨 Atenção: Seu negócio está operando com prejuízo!".to_string(),
        HealthStatus::UnderReserved { required_reserve } => format!(
            "💡 Recomendamos uma reserva de emergência de {} {} ({}x seus custos mensais)",
            symbol,
            format_number(*required_reserve, 0),
            RESERVE_MONTHS
        ),
        HealthStatus::Healthy => "✅ Parabéns! Seu negócio está saudável financeiramente!".to_string(),
    }
}

/// Splits a plain decimal string and rounds it to `digits` fraction digits.
fn round_decimal(plain: &str, digits: usize) -> (String, String) {
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain, ""));
    if fraction.len() <= digits {
        return (integer.to_string(), fraction.to_string());
    }

    let round_up = fraction.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = integer.bytes().chain(fraction[..digits].bytes()).collect();

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let kept = String::from_utf8_lossy(&kept).into_owned();
    (kept[..split].to_string(), kept[split..].to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_number(0.0, 2), "0,00");
        assert_eq!(format_number(999.0, 2), "999,00");
        assert_eq!(format_number(1234.5, 2), "1.234,50");
        assert_eq!(format_number(1234567.891, 2), "1.234.567,891");
        assert_eq!(format_number(7500.0, 0), "7.500");
    }

    #[test]
    fn keeps_at_most_three_decimals() {
        assert_eq!(format_number(29.9, 2), "29,90");
        assert_eq!(format_number(2.9949, 2), "2,995");
        assert_eq!(format_number(1.0005, 2), "1,001");
        assert_eq!(format_number(999.9995, 2), "1.000,00");
        assert_eq!(format_number(0.1 + 0.2, 0), "0,3");
    }

    #[test]
    fn renders_signs_and_non_finite_values() {
        assert_eq!(format_number(-100.0, 2), "-100,00");
        assert_eq!(format_number(-1234.5, 2), "-1.234,50");
        assert_eq!(format_number(f64::NAN, 2), "NaN");
        assert_eq!(format_number(f64::INFINITY, 2), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY, 2), "-∞");
    }

    #[test]
    fn currency_prefixes_symbol() {
        assert_eq!(format_currency(30.0, "R$"), "R$ 30,00");
        assert_eq!(format_currency(-100.0, "R$"), "R$ -100,00");
    }

    #[test]
    fn health_messages_carry_reserve_amount() {
        let message = health_message(
            &HealthStatus::UnderReserved {
                required_reserve: 7500.0,
            },
            "R$",
        );
        assert_eq!(
            message,
            "💡 Recomendamos uma reserva de emergência de R$ 7.500 (3x seus custos mensais)"
        );
        assert!(health_message(&HealthStatus::Deficit, "R$").starts_with("🚨"));
        assert!(health_message(&HealthStatus::Healthy, "R$").starts_with("✅"));
    }
}
