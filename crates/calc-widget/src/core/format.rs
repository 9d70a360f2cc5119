//! Result rounding and display formatting

/// Decimal places kept in evaluated results
pub const RESULT_DECIMAL_PLACES: u32 = 8;

/// Magnitude from which results are shown in exponent notation
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Magnitude below which non-zero results are shown in exponent notation
const SMALL_EXPONENT_THRESHOLD: f64 = 1e-6;

/// Rounds `value` to `places` decimal places
///
/// Suppresses floating-point noise such as `0.1 + 0.2 = 0.30000000000000004`.
/// Halves round towards positive infinity, so `-1.000000005` becomes `-1`.
/// Values too large to scale are returned unchanged; they carry no
/// fractional digits anyway.
#[must_use]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    (scaled + 0.5).floor() / factor
}

/// Rounds to [`RESULT_DECIMAL_PLACES`]
#[must_use]
pub fn round_result(value: f64) -> f64 {
    round_to_places(value, RESULT_DECIMAL_PLACES)
}

/// Formats a number for the display field
///
/// Shortest representation without insignificant trailing zeros. Negative
/// zero shows as `0`. Magnitudes of `1e21` and above switch to `1.5e+21`
/// notation, magnitudes below `1e-6` to `1e-7` notation. Non-finite values
/// read `Infinity`, `-Infinity` or `NaN`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() >= EXPONENT_THRESHOLD || value.abs() < SMALL_EXPONENT_THRESHOLD {
        let s = format!("{value:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{value}")
}

/// Parses an operand string typed on the keypad
///
/// Accepts everything [`format_number`] produces.
pub fn parse_operand(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_removes_float_noise() {
        assert_eq!(round_result(0.1 + 0.2), 0.3);
        assert_eq!(round_result(1.0 / 3.0), 0.33333333);
    }

    #[test]
    fn test_round_keeps_integers() {
        assert_eq!(round_result(42.0), 42.0);
        assert_eq!(round_result(-7.0), -7.0);
    }

    #[test]
    fn test_round_huge_value_unchanged() {
        assert_eq!(round_result(1e305), 1e305);
        assert!(round_result(f64::INFINITY).is_infinite());
    }

    #[test]
    fn test_round_to_places_custom() {
        assert_eq!(round_to_places(3.14159, 2), 3.14);
        assert_eq!(round_to_places(2.5, 0), 3.0);
    }

    #[test]
    fn test_round_negative_halves_towards_positive_infinity() {
        assert_eq!(round_to_places(-2.5, 0), -2.0);
        assert_eq!(round_to_places(-0.5, 0), 0.0);
        assert_eq!(round_result(-1.000000005), -1.0);
        assert_eq!(format_number(round_result(-0.000000005)), "0");
    }

    #[test]
    fn test_format_integers_without_fraction() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-15.0), "-15");
        assert_eq!(format_number(1024.0), "1024");
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.3), "0.3");
        assert_eq!(format_number(0.33333333), "0.33333333");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_huge_values_use_exponent() {
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(-2e30), "-2e+30");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_tiny_values_use_exponent() {
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-1.5e-7), "-1.5e-7");
        assert_eq!(format_number(0.00000099), "9.9e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_parse_operand_accepts_formatted_output() {
        for value in [0.3, -15.0, 1.5e21, 1e-7, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(parse_operand(&format_number(value)), Some(value));
        }
    }

    #[test]
    fn test_parse_operand_keypad_forms() {
        assert_eq!(parse_operand("0."), Some(0.0));
        assert_eq!(parse_operand("12.50"), Some(12.5));
        assert_eq!(parse_operand("007"), Some(7.0));
    }

    #[test]
    fn test_parse_operand_rejects_malformed() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("1.2.3"), None);
        assert_eq!(parse_operand("Infinit"), None);
    }
}
