use rust_decimal::{Decimal, RoundingStrategy};

const ZERO_PERCENT: &str = "0.0%";
/// Largest share magnitude printed; keeps near-zero totals representable.
const MAX_SHARE: f64 = 1e15;

/// Formats `value / total` as a one-decimal percentage (`"25.0%"`).
///
/// Rounds the exact binary value half away from zero. A zero or non-finite
/// total yields `"0.0%"` instead of `NaN`/`Infinity`. Shares from a tiny
/// non-zero total (mixed-sign slices that nearly cancel) saturate at
/// `±1e15%` rather than collapsing to zero.
#[must_use]
pub fn format_percentage(value: f64, total: f64) -> String {
    if total == 0.0 || !total.is_finite() || !value.is_finite() {
        return ZERO_PERCENT.to_owned();
    }
    let share = (value / total * 100.0).clamp(-MAX_SHARE, MAX_SHARE);
    let Some(share) = Decimal::from_f64_retain(share) else {
        return ZERO_PERCENT.to_owned();
    };
    let mut rounded = share.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    format!("{rounded}%")
}

/// Sum of the finite values; non-finite samples count as zero.
#[must_use]
pub fn finite_total(values: &[f64]) -> f64 {
    values.iter().copied().filter(|value| value.is_finite()).sum()
}

/// Percentage label for every value against the finite total.
#[must_use]
pub fn format_percentages(values: &[f64]) -> Vec<String> {
    let total = finite_total(values);
    values
        .iter()
        .map(|value| format_percentage(*value, total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{format_percentage, format_percentages};

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(format_percentage(1.0, 3.0), "33.3%");
        assert_eq!(format_percentage(2.0, 3.0), "66.7%");
        assert_eq!(format_percentage(1.0, 8.0), "12.5%");
    }

    #[test]
    fn non_finite_values_do_not_leak_into_labels() {
        let labels = format_percentages(&[50.0, f64::NAN, 50.0]);
        assert_eq!(labels, vec!["50.0%", "0.0%", "50.0%"]);
    }

    #[test]
    fn near_cancelling_total_saturates_instead_of_hiding_the_share() {
        assert_eq!(format_percentage(1.0, 1e-300), "1000000000000000.0%");
        assert_eq!(format_percentage(-1.0, 1e-300), "-1000000000000000.0%");
        let labels = format_percentages(&[1.0, -1.0 + 1e-12]);
        assert_ne!(labels[0], "0.0%");
    }
}
