/// Index of the first element whose value is not less than `x`, assuming
/// `values` is sorted ascending by `value_of`.
pub(crate) fn bisect_left<T, F>(values: &[T], x: f64, value_of: F) -> usize
where
    F: Fn(&T) -> f64,
{
    let mut low = 0;
    let mut high = values.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if value_of(&values[mid]) < x {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// The `p`-quantile of sorted `values` (R-7: linear interpolation between
/// closest ranks).  Returns `None` for an empty slice.
pub(crate) fn quantile<T, F>(values: &[T], p: f64, value_of: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    let n = values.len();
    if n == 0 || p.is_nan() {
        return None;
    }
    if p <= 0. || n < 2 {
        return Some(value_of(&values[0]));
    }
    if p >= 1. {
        return Some(value_of(&values[n - 1]));
    }
    let i = (n - 1) as f64 * p;
    let i0 = i.floor() as usize;
    let value0 = value_of(&values[i0]);
    let value1 = value_of(&values[i0 + 1]);
    Some(value0 + (value1 - value0) * (i - i0 as f64))
}
