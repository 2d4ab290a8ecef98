use crate::quadtree::{QuadNode, Quadtree};
use crate::{Coordinate, HasPosition, Rectangle};

/// The items of `items` whose position lies inside `rect`, in input order.
pub fn filter_in_rect<T, F>(items: &[T], rect: Rectangle, position: F) -> Vec<&T>
where
    F: Fn(&T) -> Coordinate,
{
    items
        .iter()
        .filter(|item| rect.contains(position(*item)))
        .collect()
}

/**
 * The items of `quadtree` whose position lies inside `rect`.
 *
 * Subtrees whose bounds miss `rect` are pruned. A leaf's bounds touching
 * `rect` says nothing about the leaf's point, so each point is tested too.
 * The result order follows the tree layout and is otherwise unspecified.
 */
pub fn filter_in_rect_from_quadtree<T: HasPosition>(
    quadtree: &Quadtree<T>,
    rect: Rectangle,
) -> Vec<&T> {
    let mut results = Vec::new();
    quadtree.visit(|node| {
        if !rect.intersects(node.bounds()) {
            return true;
        }
        if let QuadNode::Leaf { position, data, .. } = node {
            if rect.contains(position) {
                results.extend(data.iter());
            }
        }
        false
    });
    results
}
