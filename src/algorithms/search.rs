use crate::errors::SearchError;
use std::cmp::Ordering;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    Found(usize),
    /// Not present; `insert_at` is where it would go to keep the order.
    NotFound { insert_at: usize },
}

/**
 * Binary search over `haystack[low..=high]`.
 *
 * `compare` orders an element relative to the target, as in
 * `slice::binary_search_by`. Missing bounds default to the whole slice. A
 * supplied bound outside the slice (or `high < low`) is a caller error.
 */
pub fn binary_search_by_range<T, F>(
    haystack: &[T],
    low: Option<usize>,
    high: Option<usize>,
    mut compare: F,
) -> Result<SearchResult, SearchError>
where
    F: FnMut(&T) -> Ordering,
{
    let len = haystack.len();
    let mut low = match low {
        None => 0,
        Some(low) if low < len => low,
        Some(low) => return Err(SearchError::InvalidLowerBound { low, len }),
    };
    // Exclusive from here on.
    let mut high = match high {
        None => len,
        Some(high) if low <= high && high < len => high + 1,
        Some(high) => return Err(SearchError::InvalidUpperBound { low, high, len }),
    };

    while low < high {
        let mid = low + (high - low) / 2;
        match compare(&haystack[mid]) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Ok(SearchResult::Found(mid)),
        }
    }
    Ok(SearchResult::NotFound { insert_at: low })
}

fn compare_values(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/**
 * The item of `items` whose value is closest to `value`, in O(log n).
 *
 * `items` must be sorted ascending by `accessor`; this is not checked. When
 * two neighbours are equally close the later one wins. An empty slice is a
 * caller error.
 */
pub fn find_closest_sorted<T, F>(items: &[T], value: f64, accessor: F) -> Result<&T, SearchError>
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return Err(SearchError::EmptyInput);
    }

    let index = match binary_search_by_range(items, None, None, |item| {
        compare_values(accessor(item), value)
    })? {
        SearchResult::Found(index) => index,
        SearchResult::NotFound { insert_at } => insert_at.min(items.len() - 1),
    };

    // The insertion point is to the right of value; the left neighbour may be closer.
    let mut result = &items[index];
    if index > 0 {
        let before = &items[index - 1];
        if (accessor(result) - value).abs() > (accessor(before) - value).abs() {
            result = before;
        }
    }
    Ok(result)
}

/// The item of `items` whose value is closest to `value`, in O(n). The first
/// of several equally close items wins; `None` only for an empty slice.
pub fn find_closest_unsorted<T, F>(items: &[T], value: f64, accessor: F) -> Option<&T>
where
    F: Fn(&T) -> f64,
{
    let mut closest: Option<(&T, f64)> = None;
    for item in items {
        let distance = (accessor(item) - value).abs();
        let closer = match closest {
            None => true,
            Some((_, closest_distance)) => distance < closest_distance,
        };
        if closer {
            closest = Some((item, distance));
        }
    }
    closest.map(|(item, _)| item)
}

/// An item of sorted `items` whose value equals `value`, in O(log n).
pub fn find_equal_sorted<T, F>(items: &[T], value: f64, accessor: F) -> Option<&T>
where
    F: Fn(&T) -> f64,
{
    match binary_search_by_range(items, None, None, |item| compare_values(accessor(item), value)) {
        Ok(SearchResult::Found(index)) => Some(&items[index]),
        _ => None,
    }
}

/// The first item of `items` whose value equals `value`, in O(n).
pub fn find_equal_unsorted<T, F>(items: &[T], value: f64, accessor: F) -> Option<&T>
where
    F: Fn(&T) -> f64,
{
    items.iter().find(|item| accessor(*item) == value)
}
