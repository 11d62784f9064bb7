use crate::error::{DcaError, DcaResult};
use crate::models::conversion::ConversionResult;

const PREFIXES: [&str; 9] = ["B", "K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Rounds `value` to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Formats a byte count with metric (1000-based) prefixes and three
/// significant digits, e.g. `1500.0` becomes `"1.5K"`.
pub fn pretty_size(bytes: f64) -> String {
    let mut value = if bytes.is_finite() && bytes > 0.0 { bytes } else { 0.0 };
    let mut prefix_idx = 0;
    loop {
        while value >= 1000.0 && prefix_idx < PREFIXES.len() - 1 {
            value /= 1000.0;
            prefix_idx += 1;
        }
        let integer_digits = (value.floor() as u64).to_string().len() as u32;
        let rounded = round_to(value, 3u32.saturating_sub(integer_digits));
        // 999.6 rounds up to 1000 and belongs to the next prefix
        if rounded >= 1000.0 && prefix_idx < PREFIXES.len() - 1 {
            value = rounded;
            continue;
        }
        return format!("{}{}", rounded, PREFIXES[prefix_idx]);
    }
}

/// Percentage size reduction from `input_size` to `output_size`, rounded to
/// two decimals. Negative when the output grew.
pub fn reduction(input_size: u64, output_size: u64) -> DcaResult<f64> {
    if input_size == 0 {
        return Err(DcaError::DivisionUndefined);
    }
    Ok(round_to((1.0 - output_size as f64 / input_size as f64) * 100.0, 2))
}

/// Mean reduction over the results whose reduction is defined, or `None`
/// when there is nothing to average.
pub fn average_reduction(results: &[ConversionResult]) -> Option<f64> {
    let defined: Vec<f64> = results
        .iter()
        .filter_map(|r| reduction(r.input_size, r.output_size).ok())
        .collect();
    if defined.is_empty() {
        return None;
    }
    Some(round_to(defined.iter().sum::<f64>() / defined.len() as f64, 2))
}

// Renders an optional percentage, `n/a` for the undefined case
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(pct) => format!("{}%", pct),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(input_size: u64, output_size: u64) -> ConversionResult {
        ConversionResult {
            duration: Duration::from_millis(10),
            input_size,
            output_size,
        }
    }

    #[test]
    fn pretty_size_uses_three_significant_digits() {
        assert_eq!(pretty_size(0.0), "0B");
        assert_eq!(pretty_size(999.0), "999B");
        assert_eq!(pretty_size(1000.0), "1K");
        assert_eq!(pretty_size(1500.0), "1.5K");
        assert_eq!(pretty_size(253_000_000.0), "253M");
        assert_eq!(pretty_size(12_345_000_000.0), "12.3G");
        assert_eq!(pretty_size(1_234.0), "1.23K");
    }

    #[test]
    fn pretty_size_carries_rounding_into_next_prefix() {
        assert_eq!(pretty_size(999_999.0), "1M");
        assert_eq!(pretty_size(9_999.0), "10K");
    }

    #[test]
    fn pretty_size_stops_at_largest_prefix() {
        assert_eq!(pretty_size(2e24), "2Y");
        assert_eq!(pretty_size(5e27), "5000Y");
    }

    #[test]
    fn pretty_size_treats_invalid_input_as_zero() {
        assert_eq!(pretty_size(-5.0), "0B");
        assert_eq!(pretty_size(f64::NAN), "0B");
    }

    #[test]
    fn reduction_matches_reference_values() {
        assert_eq!(reduction(1000, 500).unwrap(), 50.0);
        assert_eq!(reduction(1000, 1000).unwrap(), 0.0);
        assert_eq!(reduction(1000, 0).unwrap(), 100.0);
        assert_eq!(reduction(3, 1).unwrap(), 66.67);
    }

    #[test]
    fn reduction_keeps_negative_values() {
        assert_eq!(reduction(1000, 1500).unwrap(), -50.0);
    }

    #[test]
    fn reduction_of_empty_input_is_undefined() {
        assert!(matches!(reduction(0, 10), Err(DcaError::DivisionUndefined)));
    }

    #[test]
    fn average_reduction_skips_undefined_entries() {
        let results = vec![result(1_000_000, 400_000), result(2_000_000, 1_800_000), result(0, 5)];
        assert_eq!(average_reduction(&results), Some(35.0));
        assert_eq!(average_reduction(&[]), None);
        assert_eq!(average_reduction(&[result(0, 0)]), None);
    }

    #[test]
    fn undefined_percentage_renders_as_na() {
        assert_eq!(format_percentage(None), "n/a");
        assert_eq!(format_percentage(Some(35.0)), "35%");
        assert_eq!(format_percentage(Some(-12.5)), "-12.5%");
    }
}
