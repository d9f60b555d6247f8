//! Array helpers turning raw data-set values into slice boundaries.

/// Scales `values` so they sum to 1, preserving ratios.
///
/// When the sum is not positive the input is returned unchanged, so an
/// all-zero data set yields all-zero output instead of NaN.
#[must_use]
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let sum: f64 = values.iter().sum();
    if sum > 0.0 {
        values.iter().map(|value| value / sum).collect()
    } else {
        values.to_vec()
    }
}

/// Running totals of `values`, starting with 0.
///
/// The output is one element longer than the input. Applied to normalized
/// values it yields slice boundaries in `[0, 1]`.
#[must_use]
pub fn partial_sums(values: &[f64]) -> Vec<f64> {
    let mut sums = Vec::with_capacity(values.len() + 1);
    let mut total = 0.0;
    sums.push(total);
    for value in values {
        total += value;
        sums.push(total);
    }
    sums
}

/// Resizes `values` to exactly `size` elements.
///
/// Truncation drops trailing elements. Padding repeats the last element, or
/// `fill` when `values` is empty.
#[must_use]
pub fn with_size<T: Clone>(values: &[T], size: usize, fill: T) -> Vec<T> {
    let pad = values.last().cloned().unwrap_or(fill);
    let mut resized: Vec<T> = values.iter().take(size).cloned().collect();
    resized.resize(size, pad);
    resized
}

/// Folds runs of equal consecutive values into a single entry.
#[must_use]
pub fn collapse_adjacent_duplicates(values: &[f64]) -> Vec<f64> {
    let mut collapsed: Vec<f64> = Vec::with_capacity(values.len());
    for &value in values {
        if collapsed.last() != Some(&value) {
            collapsed.push(value);
        }
    }
    collapsed
}

/// Drops the trailing run of values equal to the last one, keeping its first entry.
///
/// Unlike `collapse_adjacent_duplicates`, interior runs are kept, so every
/// kept element stays at its index.
#[must_use]
pub fn trim_trailing_duplicates(values: &[f64]) -> &[f64] {
    let Some(&last) = values.last() else {
        return values;
    };
    let mut end = values.len();
    while end > 1 && values[end - 2] == last {
        end -= 1;
    }
    &values[..end]
}
