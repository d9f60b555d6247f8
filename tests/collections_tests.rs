use approx::assert_abs_diff_eq;
use pie_chart_rs::core::{collapse_adjacent_duplicates, normalize, partial_sums, with_size};

#[test]
fn normalize_scales_values_to_unit_sum() {
    let normalized = normalize(&[1.0, 1.0, 2.0]);
    assert_eq!(normalized, vec![0.25, 0.25, 0.5]);
}

#[test]
fn normalize_returns_input_when_sum_is_not_positive() {
    assert_eq!(normalize(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    assert_eq!(normalize(&[-1.0, 0.5]), vec![-1.0, 0.5]);
    assert!(normalize(&[]).is_empty());
}

#[test]
fn partial_sums_starts_at_zero_and_is_one_longer() {
    let sums = partial_sums(&[0.2, 0.3, 0.5]);
    assert_eq!(sums.len(), 4);
    assert_eq!(sums[0], 0.0);
    assert_abs_diff_eq!(sums[1], 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(sums[2], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(sums[3], 1.0, epsilon = 1e-12);
}

#[test]
fn partial_sums_of_empty_is_single_zero() {
    assert_eq!(partial_sums(&[]), vec![0.0]);
}

#[test]
fn all_zero_values_yield_degenerate_boundaries() {
    let boundaries = partial_sums(&normalize(&[0.0, 0.0]));
    assert_eq!(boundaries, vec![0.0, 0.0, 0.0]);
}

#[test]
fn with_size_truncates_trailing_elements() {
    assert_eq!(with_size(&[1.0, 2.0, 3.0], 2, 0.0), vec![1.0, 2.0]);
}

#[test]
fn with_size_pads_with_last_element() {
    assert_eq!(with_size(&[0.0, 1.0], 4, 7.0), vec![0.0, 1.0, 1.0, 1.0]);
}

#[test]
fn with_size_pads_empty_input_with_fill() {
    assert_eq!(with_size(&[], 3, 7.0), vec![7.0, 7.0, 7.0]);
}

#[test]
fn with_size_works_for_non_float_items() {
    let labels = with_size(&["a".to_owned()], 2, String::new());
    assert_eq!(labels, vec!["a".to_owned(), "a".to_owned()]);
}

#[test]
fn collapse_folds_padding_from_previous_transition() {
    assert_eq!(
        collapse_adjacent_duplicates(&[0.0, 0.5, 1.0, 1.0, 1.0]),
        vec![0.0, 0.5, 1.0]
    );
}
