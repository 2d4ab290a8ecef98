mod bezier;
mod extent;
mod filter_in_rect;
mod search;

pub use bezier::{
    interpolate_cubic_bezier, interpolate_cubic_bezier_angle, interpolate_quadratic_bezier,
    interpolate_quadratic_bezier_angle,
};
pub use extent::{extent, extent_limited, extent_multi, ExtentLimits};
pub use filter_in_rect::{filter_in_rect, filter_in_rect_from_quadtree};
pub use search::{
    binary_search_by_range, find_closest_sorted, find_closest_unsorted, find_equal_sorted,
    find_equal_unsorted, SearchResult,
};
