use crate::utils::{bisect_left, quantile};
use log::trace;

/// Percentile limits for [`extent_limited`]. Percentiles are in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ExtentLimits {
    pub min_percentile: Option<f64>,
    pub max_percentile: Option<f64>,
    /// Skip the in-place sort; the caller guarantees the input is already
    /// sorted ascending by the accessor.
    pub assume_sorted: bool,
}

impl ExtentLimits {
    pub fn with_min_percentile(mut self, percentile: f64) -> Self {
        self.min_percentile = Some(percentile);
        self
    }

    pub fn with_max_percentile(mut self, percentile: f64) -> Self {
        self.max_percentile = Some(percentile);
        self
    }

    pub fn with_percentiles(self, min_percentile: f64, max_percentile: f64) -> Self {
        self.with_min_percentile(min_percentile)
            .with_max_percentile(max_percentile)
    }

    pub fn presorted(mut self) -> Self {
        self.assume_sorted = true;
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.min_percentile.is_none() && self.max_percentile.is_none()
    }
}

/// Minimum and maximum of the accessor values, ignoring NaN. `None` if there
/// is no comparable value.
pub fn extent<T, F>(items: &[T], accessor: F) -> Option<(f64, f64)>
where
    F: Fn(&T) -> f64,
{
    items
        .iter()
        .map(accessor)
        .filter(|value| !value.is_nan())
        .fold(None, |bounds, value| match bounds {
            None => Some((value, value)),
            Some((min, max)) => Some((value.min(min), value.max(max))),
        })
}

/**
 * Extent of the accessor values, with either end optionally pulled in to a
 * percentile to ignore outliers.
 *
 * Without percentiles this is [`extent`]. With one, `items` is sorted in
 * place by the accessor (unless `limits.assume_sorted`), and each limited end
 * becomes the item value nearest to the quantile. The max end never exceeds
 * its quantile unless no smaller item exists. NaN values are ignored, as in
 * [`extent`]. Returns `None` if no value is comparable.
 */
pub fn extent_limited<T, F>(items: &mut [T], accessor: F, limits: ExtentLimits) -> Option<(f64, f64)>
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return None;
    }
    if limits.is_unbounded() {
        return extent(items, accessor);
    }

    if !limits.assume_sorted {
        items.sort_by(|a, b| accessor(a).total_cmp(&accessor(b)));
    }
    // total_cmp puts negative NaN first and positive NaN last.
    let first = items.iter().position(|item| !accessor(item).is_nan())?;
    let end = items.iter().rposition(|item| !accessor(item).is_nan())? + 1;
    let items: &[T] = &items[first..end];
    let last = items.len() - 1;
    let mut min_value = accessor(&items[0]);
    let mut max_value = accessor(&items[last]);

    if let Some(percentile) = limits.min_percentile {
        if let Some(quantile_value) = quantile(items, percentile, &accessor) {
            // The quantile may fall between items; take the nearest one at or above it.
            let index = bisect_left(items, quantile_value, &accessor).min(last);
            min_value = accessor(&items[index]);
            trace!(
                "Min percentile {} has quantile {}, limited to {}",
                percentile,
                quantile_value,
                min_value
            );
        }
    }

    if let Some(percentile) = limits.max_percentile {
        if let Some(quantile_value) = quantile(items, percentile, &accessor) {
            let index = bisect_left(items, quantile_value, &accessor).min(last);
            max_value = accessor(&items[index]);
            if max_value > quantile_value && index > 0 {
                max_value = accessor(&items[index - 1]);
            }
            trace!(
                "Max percentile {} has quantile {}, limited to {}",
                percentile,
                quantile_value,
                max_value
            );
        }
    }

    Some((min_value, max_value))
}

/**
 * [`extent_limited`] across the inner collections of `outer`.
 *
 * ```
 * use vis_utils::algorithms::{extent_multi, ExtentLimits};
 *
 * let runs = vec![vec![4., 3.], vec![1., 2.]];
 * let bounds = extent_multi(&runs, |run| run.as_slice(), |d| *d, ExtentLimits::default());
 * assert_eq!(bounds, Some((1., 4.)));
 * ```
 *
 * The items are gathered by reference, so `outer` is left untouched even when
 * a percentile forces a sort.
 */
pub fn extent_multi<O, T, I, F>(
    outer: &[O],
    inner: I,
    accessor: F,
    limits: ExtentLimits,
) -> Option<(f64, f64)>
where
    I: Fn(&O) -> &[T],
    F: Fn(&T) -> f64,
{
    let mut combined: Vec<&T> = outer.iter().flat_map(|o| inner(o).iter()).collect();
    extent_limited(&mut combined, |item: &&T| accessor(*item), limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(d: &f64) -> f64 {
        *d
    }

    fn one_to_ten() -> Vec<f64> {
        (1..=10).map(f64::from).collect()
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Reading {
        value: f64,
    }

    struct Station {
        results: Vec<Reading>,
    }

    #[test]
    fn test_extent() {
        assert_eq!(extent(&[3., 1., 7., 2.], identity), Some((1., 7.)));
        assert_eq!(extent(&[3., f64::NAN, -1.], identity), Some((-1., 3.)));
        assert_eq!(extent(&[f64::NAN], identity), None);
        assert_eq!(extent(&Vec::<f64>::new(), identity), None);
    }

    #[test]
    fn test_extent_limited_without_percentiles() {
        let mut values = one_to_ten();
        values.reverse();
        assert_eq!(
            extent_limited(&mut values, identity, ExtentLimits::default()),
            Some((1., 10.))
        );
        // No percentile, no sort.
        assert_eq!(values[0], 10.);
    }

    #[test]
    fn test_extent_limited_empty() {
        let mut values: Vec<f64> = Vec::new();
        let limits = ExtentLimits::default().with_percentiles(0.1, 0.9);
        assert_eq!(extent_limited(&mut values, identity, limits), None);
    }

    #[test]
    fn test_extent_limited_percentiles() {
        let mut values = one_to_ten();
        let limits = ExtentLimits::default().with_percentiles(0.1, 0.9);
        let (min, max) = extent_limited(&mut values, identity, limits).unwrap();
        assert_eq!((min, max), (2., 9.));
        assert!(1. < min && max < 10.);
        // Max stays at or below the 0.9 quantile (9.1).
        assert!(max <= 9.1);
    }

    #[test]
    fn test_extent_limited_one_side() {
        let mut values = one_to_ten();
        let limits = ExtentLimits::default().with_max_percentile(0.5);
        assert_eq!(extent_limited(&mut values, identity, limits), Some((1., 5.)));

        let limits = ExtentLimits::default().with_min_percentile(0.5);
        assert_eq!(extent_limited(&mut values, identity, limits), Some((6., 10.)));
    }

    #[test]
    fn test_extent_limited_sorts_in_place() {
        let mut values = vec![9., 1., 5., 3., 7.];
        let limits = ExtentLimits::default().with_percentiles(0., 1.);
        assert_eq!(extent_limited(&mut values, identity, limits), Some((1., 9.)));
        assert_eq!(values, vec![1., 3., 5., 7., 9.]);
    }

    #[test]
    fn test_extent_limited_presorted_skips_sort() {
        let mut values = vec![1., 3., 5., 7., 9.];
        let limits = ExtentLimits::default().with_percentiles(0.25, 0.75).presorted();
        assert_eq!(extent_limited(&mut values, identity, limits), Some((3., 7.)));

        let mut unsorted = vec![9., 1., 5.];
        extent_limited(&mut unsorted, identity, limits);
        assert_eq!(unsorted, vec![9., 1., 5.]);
    }

    #[test]
    fn test_extent_limited_ignores_nan() {
        let limits = ExtentLimits::default().with_percentiles(0., 1.);
        let mut values = vec![3., f64::NAN, 1., 2.];
        assert_eq!(extent_limited(&mut values, identity, limits), Some((1., 3.)));

        let mut values = vec![3., -f64::NAN, 1., 2.];
        assert_eq!(extent_limited(&mut values, identity, limits), Some((1., 3.)));

        let mut values = vec![f64::NAN, 5., -f64::NAN, 1., 4., 2., 3., f64::NAN];
        let limits = ExtentLimits::default().with_percentiles(0.25, 0.75);
        assert_eq!(extent_limited(&mut values, identity, limits), Some((2., 4.)));
        let plain = extent(&values, identity);
        let limits = ExtentLimits::default().with_max_percentile(1.);
        assert_eq!(extent_limited(&mut values, identity, limits), plain);

        let mut values = vec![f64::NAN, -f64::NAN];
        assert_eq!(extent_limited(&mut values, identity, limits), None);
    }

    #[test]
    fn test_extent_limited_accessor() {
        let mut readings: Vec<Reading> = vec![40., 10., 30., 20.]
            .into_iter()
            .map(|value| Reading { value })
            .collect();
        let limits = ExtentLimits::default().with_max_percentile(1.);
        assert_eq!(
            extent_limited(&mut readings, |r| r.value, limits),
            Some((10., 40.))
        );
        assert_eq!(readings[0], Reading { value: 10. });
    }

    #[test]
    fn test_extent_multi() {
        let nested = vec![vec![4., 3.], vec![1., 2.]];
        assert_eq!(
            extent_multi(&nested, |v| v.as_slice(), identity, ExtentLimits::default()),
            Some((1., 4.))
        );

        let stations = vec![
            Station {
                results: vec![Reading { value: 4. }, Reading { value: 3. }],
            },
            Station {
                results: vec![Reading { value: 1. }, Reading { value: 2. }],
            },
        ];
        let limits = ExtentLimits::default().with_max_percentile(0.5);
        assert_eq!(
            extent_multi(&stations, |s| s.results.as_slice(), |r| r.value, limits),
            Some((1., 2.))
        );
        // Inner collections are not reordered.
        assert_eq!(stations[0].results[0].value, 4.);

        let empty: Vec<Vec<f64>> = Vec::new();
        assert_eq!(
            extent_multi(&empty, |v| v.as_slice(), identity, ExtentLimits::default()),
            None
        );
    }
}
