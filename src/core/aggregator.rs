//! Weighted average over credit-hour weighted line items.
//!
//! Items with a weight of zero or less (or NaN) are skipped entirely: they
//! contribute to neither sum. When nothing is left the caller gets `None`
//! and no division happens.

use crate::domain::model::{AggregationResult, LineItem};

pub fn aggregate(items: &[LineItem]) -> Option<AggregationResult> {
    let mut total_weight = 0.0;
    let mut total_weighted_value = 0.0;

    for item in items.iter().filter(|item| item.counts()) {
        total_weight += item.weight;
        total_weighted_value += item.weight * item.value;
    }

    if total_weight > 0.0 {
        Some(AggregationResult {
            average: round_to_hundredths(total_weighted_value / total_weight),
            total_weight,
            total_weighted_value,
        })
    } else {
        None
    }
}

/// Rounds to 2 decimals, ties to even, on the exact binary value of `value`.
///
/// `3.005` is stored as `3.00499999...` and therefore rounds to `3.0`.
pub fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grade_scale::GradeScale;

    fn items(pairs: &[(f64, f64)]) -> Vec<LineItem> {
        pairs.iter().map(|&(w, v)| LineItem::new(w, v)).collect()
    }

    #[test]
    fn test_equal_weights_average() {
        let result = aggregate(&items(&[(3.0, 4.0), (3.0, 2.0)])).unwrap();
        assert_eq!(result.average, 3.0);
        assert_eq!(result.total_weight, 6.0);
        assert_eq!(result.total_weighted_value, 18.0);
    }

    #[test]
    fn test_single_course_with_letter_grade() {
        let points = GradeScale::points_for("B").unwrap();
        let result = aggregate(&items(&[(3.0, points)])).unwrap();
        assert_eq!(result.average, 3.0);
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert!(aggregate(&[]).is_none());
    }

    #[test]
    fn test_all_zero_weights_yield_none() {
        assert!(aggregate(&items(&[(0.0, 4.0), (0.0, 2.0)])).is_none());
    }

    #[test]
    fn test_non_positive_weights_are_excluded_from_both_sums() {
        let result = aggregate(&items(&[(0.0, 4.0), (-2.0, 4.0), (f64::NAN, 1.0), (4.0, 2.0)]))
            .unwrap();
        assert_eq!(result.total_weight, 4.0);
        assert_eq!(result.total_weighted_value, 8.0);
        assert_eq!(result.average, 2.0);
    }

    #[test]
    fn test_rounding_uses_exact_binary_value() {
        assert_eq!(aggregate(&items(&[(1.0, 3.005)])).unwrap().average, 3.0);
        assert_eq!(round_to_hundredths(2.675), 2.67);
        assert_eq!(round_to_hundredths(3.078_75), 3.08);
    }

    #[test]
    fn test_permutation_does_not_change_result() {
        let b_plus = GradeScale::points_for("B+").unwrap();
        let a_minus = GradeScale::points_for("A-").unwrap();
        let f = GradeScale::points_for("F").unwrap();

        let forward = aggregate(&items(&[(3.0, b_plus), (4.0, a_minus), (1.0, f)])).unwrap();
        let backward = aggregate(&items(&[(1.0, f), (4.0, a_minus), (3.0, b_plus)])).unwrap();
        let middle = aggregate(&items(&[(4.0, a_minus), (1.0, f), (3.0, b_plus)])).unwrap();

        assert_eq!(forward.average, 3.08);
        assert_eq!(forward.average, backward.average);
        assert_eq!(forward.average, middle.average);
        assert_eq!(forward.total_weight, 8.0);
    }

    #[test]
    fn test_fractional_credit_hours() {
        let result = aggregate(&items(&[(1.5, 4.0), (0.5, 0.0)])).unwrap();
        assert_eq!(result.total_weight, 2.0);
        assert_eq!(result.average, 3.0);
    }
}
