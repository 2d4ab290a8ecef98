use rstar::{RTree, AABB};
use vis_utils::{Coordinate, Rectangle};

pub(crate) fn build_rstar(points: &[Coordinate]) -> RTree<[f64; 2]> {
    RTree::bulk_load(points.iter().map(|p| [p.x, p.y]).collect())
}

pub(crate) fn filter_in_rect_rstar(rtree: &RTree<[f64; 2]>, rect: Rectangle) -> usize {
    let envelope = AABB::from_corners([rect.x_min, rect.y_min], [rect.x_max, rect.y_max]);
    rtree.locate_in_envelope(&envelope).count()
}
