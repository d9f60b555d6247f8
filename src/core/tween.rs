/// Interpolates element-wise between `start` and `end`.
///
/// `fraction` is not clamped: values outside `[0, 1]` extrapolate, which
/// overshooting interpolators rely on.
///
/// # Panics
///
/// Panics when `start` and `end` differ in length.
#[must_use]
pub fn evaluate(fraction: f64, start: &[f64], end: &[f64]) -> Vec<f64> {
    assert_eq!(
        start.len(),
        end.len(),
        "tween arrays must have equal length"
    );
    start
        .iter()
        .zip(end)
        .map(|(start, end)| start + fraction * (end - start))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::evaluate;

    #[test]
    fn evaluate_at_bounds_returns_endpoints() {
        let start = [1.0, 2.0];
        let end = [3.0, -2.0];
        assert_eq!(evaluate(0.0, &start, &end), start.to_vec());
        assert_eq!(evaluate(1.0, &start, &end), end.to_vec());
    }

    #[test]
    #[should_panic(expected = "tween arrays must have equal length")]
    fn evaluate_rejects_length_mismatch() {
        let _ = evaluate(0.5, &[0.0, 1.0], &[0.0]);
    }
}
