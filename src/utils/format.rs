/// Render a score the way the original service printed it.
///
/// Shortest round-trip digits; scientific notation with a signed, two-digit
/// exponent below `1e-4` or from `1e16` up; integral values keep `.0`.
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let fixed = value.to_string();
    if fixed.contains('.') {
        fixed
    } else {
        format!("{}.0", fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimals_unchanged() {
        assert_eq!(format_score(0.1), "0.1");
        assert_eq!(format_score(0.05), "0.05");
        assert_eq!(format_score(0.7), "0.7");
        assert_eq!(format_score(0.0001), "0.0001");
        assert_eq!(format_score(0.008537), "0.008537");
    }

    #[test]
    fn test_integral_values_keep_fraction() {
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(1.0), "1.0");
        assert_eq!(format_score(-0.0), "-0.0");
    }

    #[test]
    fn test_small_and_large_values_use_exponent() {
        assert_eq!(format_score(1.2e-5), "1.2e-05");
        assert_eq!(format_score(1e-5), "1e-05");
        assert_eq!(format_score(3.4567e-12), "3.4567e-12");
        assert_eq!(format_score(1e16), "1e+16");
        assert_eq!(format_score(1.5e300), "1.5e+300");
    }
}
