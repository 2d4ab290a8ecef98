use crate::{Coordinate, HasEnvelope, HasPosition, Rectangle};
use log::{debug, trace};
use std::iter::FromIterator;
use std::mem;

#[derive(Debug, Clone)]
enum Node<T> {
    Empty,
    // Every item in `data` sits exactly at `position`.
    Leaf { position: Coordinate, data: Vec<T> },
    // Children are indexed by (bottom << 1) | right.
    Internal(Box<[Node<T>; 4]>),
}

impl<T> Node<T> {
    fn new_internal() -> Self {
        Node::Internal(Box::new([Node::Empty, Node::Empty, Node::Empty, Node::Empty]))
    }

    fn is_internal(&self) -> bool {
        matches!(self, Node::Internal(_))
    }
}

/// A node as seen by [`Quadtree::visit`].
#[derive(Debug)]
pub enum QuadNode<'a, T> {
    Internal {
        bounds: Rectangle,
    },
    Leaf {
        bounds: Rectangle,
        position: Coordinate,
        data: &'a [T],
    },
}

impl<'a, T> QuadNode<'a, T> {
    pub fn bounds(&self) -> Rectangle {
        match self {
            QuadNode::Internal { bounds } => *bounds,
            QuadNode::Leaf { bounds, .. } => *bounds,
        }
    }
}

/**
 * A point quadtree over items with a position.
 *
 * The tree covers a square extent that doubles whenever an item outside of it
 * is added, so node bounds are implied by the extent and are not stored.
 * Items at exactly the same position share a leaf. Items with a non-finite
 * coordinate are not indexed.
 */
#[derive(Debug, Clone)]
pub struct Quadtree<T> {
    extent: Option<Rectangle>,
    root: Node<T>,
    size: usize,
}

impl<T> Default for Quadtree<T> {
    fn default() -> Self {
        Quadtree {
            extent: None,
            root: Node::Empty,
            size: 0,
        }
    }
}

impl<T> Quadtree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed items, counting coincident items separately.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The square currently covered by the tree, if anything was ever covered.
    pub fn extent(&self) -> Option<Rectangle> {
        self.extent
    }

    /**
     * Visit nodes in pre-order, top-left quadrant first.
     *
     * If the callback returns `true` for an internal node, its children are
     * skipped. The return value for leaves is ignored. Empty quadrants are
     * never visited.
     */
    pub fn visit<'a, F>(&'a self, mut callback: F)
    where
        F: FnMut(QuadNode<'a, T>) -> bool,
    {
        let extent = match self.extent {
            Some(extent) => extent,
            None => return,
        };

        let mut stack: Vec<(&'a Node<T>, Rectangle)> = vec![(&self.root, extent)];
        while let Some((node, bounds)) = stack.pop() {
            match node {
                Node::Empty => continue,
                Node::Leaf { position, data } => {
                    callback(QuadNode::Leaf {
                        bounds,
                        position: *position,
                        data,
                    });
                }
                Node::Internal(children) => {
                    if callback(QuadNode::Internal { bounds }) {
                        continue;
                    }
                    // Reversed, so the top-left child is popped first.
                    for quadrant in (0..4).rev() {
                        stack.push((&children[quadrant], child_bounds(bounds, quadrant)));
                    }
                }
            }
        }
    }

    /// All indexed items, in traversal order.
    pub fn data(&self) -> Vec<&T> {
        let mut results = Vec::with_capacity(self.size);
        self.visit(|node| {
            if let QuadNode::Leaf { data, .. } = node {
                results.extend(data.iter());
            }
            false
        });
        results
    }

    /**
     * Grow the extent until it covers `point`.
     *
     * The first covered point gets the unit square at its floored
     * coordinates. Afterwards the square doubles towards the point, and the
     * old root becomes a child of the new one. Returns false, leaving the
     * extent unchanged, if `point` is not finite or the grown extent would
     * overflow.
     */
    pub fn cover(&mut self, point: Coordinate) -> bool {
        if !is_finite(point) {
            debug!("Ignoring non-finite point {} for quadtree extent", point);
            return false;
        }
        self.covered(point).is_some()
    }

    /// The extent after growing it to cover `point`, or `None`, leaving the
    /// tree unchanged, if the extent would no longer be finite.
    fn covered(&mut self, point: Coordinate) -> Option<Rectangle> {
        let mut extent = match self.extent {
            Some(extent) => extent,
            None => {
                let x_min = point.x.floor();
                let y_min = point.y.floor();
                let extent = Rectangle::new((x_min, y_min).into(), (x_min + 1., y_min + 1.).into());
                self.extent = Some(extent);
                return Some(extent);
            }
        };

        let mut size = extent.width();
        if size == 0. {
            size = 1.;
        }
        let mut quadrants = Vec::new();
        // The extent is half-open on its right and bottom sides.
        while point.x < extent.x_min
            || point.x >= extent.x_max
            || point.y < extent.y_min
            || point.y >= extent.y_max
        {
            let quadrant = ((point.y < extent.y_min) as usize) << 1 | (point.x < extent.x_min) as usize;
            size *= 2.;
            match quadrant {
                0 => {
                    extent.x_max = extent.x_min + size;
                    extent.y_max = extent.y_min + size;
                }
                1 => {
                    extent.x_min = extent.x_max - size;
                    extent.y_max = extent.y_min + size;
                }
                2 => {
                    extent.x_max = extent.x_min + size;
                    extent.y_min = extent.y_max - size;
                }
                _ => {
                    extent.x_min = extent.x_max - size;
                    extent.y_min = extent.y_max - size;
                }
            }
            if !size.is_finite()
                || !is_finite(extent.top_left())
                || !is_finite(extent.bottom_right())
            {
                debug!("Cannot grow quadtree extent {:?} to cover {}", self.extent, point);
                return None;
            }
            trace!("Grew quadtree extent to {:?}", extent);
            quadrants.push(quadrant);
        }

        for quadrant in quadrants {
            if self.root.is_internal() {
                let old_root = mem::replace(&mut self.root, Node::new_internal());
                if let Node::Internal(children) = &mut self.root {
                    children[quadrant] = old_root;
                }
            }
        }
        self.extent = Some(extent);
        Some(extent)
    }
}

impl<T: HasPosition> Quadtree<T> {
    /// An empty tree whose extent already covers `extent`.
    pub fn with_extent(extent: Rectangle) -> Self {
        let mut tree = Self::new();
        tree.cover(extent.top_left());
        tree.cover(extent.bottom_right());
        tree
    }

    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.add_all(items);
        tree
    }

    /// Index `item`. Returns false, and drops the item, if its position is
    /// not finite or too far from the current extent to be covered.
    pub fn add(&mut self, item: T) -> bool {
        let position = item.position();
        if !is_finite(position) {
            debug!("Skipping item at non-finite position {}", position);
            return false;
        }
        let extent = match self.covered(position) {
            Some(extent) => extent,
            None => {
                debug!("Skipping item at uncoverable position {}", position);
                return false;
            }
        };
        insert(&mut self.root, extent, position, item);
        self.size += 1;
        true
    }

    /// Index every item, covering the bounds of the batch first so the tree is
    /// only grown once. Returns the number of items indexed.
    pub fn add_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let total = items.len();

        let mut bounds = Rectangle::new_empty();
        for item in &items {
            let position = item.position();
            if is_finite(position) {
                bounds.expand(Rectangle::new(position, position));
            }
        }
        if !bounds.is_empty() {
            self.covered(bounds.top_left());
            self.covered(bounds.bottom_right());
        }

        let mut added = 0;
        for item in items {
            if self.add(item) {
                added += 1;
            }
        }
        debug!(
            "Indexed {} of {} items; quadtree holds {} with extent {:?}",
            added, total, self.size, self.extent
        );
        added
    }
}

impl<T: HasPosition> FromIterator<T> for Quadtree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Quadtree::from_items(iter)
    }
}

impl<T> HasEnvelope for Quadtree<T> {
    fn envelope(&self) -> Rectangle {
        self.extent.unwrap_or_else(Rectangle::new_empty)
    }
}

fn is_finite(point: Coordinate) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

fn child_bounds(bounds: Rectangle, quadrant: usize) -> Rectangle {
    let mid = bounds.center();
    let right = quadrant & 1 == 1;
    let bottom = quadrant & 2 == 2;
    Rectangle {
        x_min: if right { mid.x } else { bounds.x_min },
        y_min: if bottom { mid.y } else { bounds.y_min },
        x_max: if right { bounds.x_max } else { mid.x },
        y_max: if bottom { bounds.y_max } else { mid.y },
    }
}

fn quadrant_of(bounds: Rectangle, position: Coordinate) -> usize {
    let mid = bounds.center();
    ((position.y >= mid.y) as usize) << 1 | (position.x >= mid.x) as usize
}

fn insert<T>(node: &mut Node<T>, bounds: Rectangle, position: Coordinate, item: T) {
    match node {
        Node::Internal(children) => {
            let quadrant = quadrant_of(bounds, position);
            insert(
                &mut children[quadrant],
                child_bounds(bounds, quadrant),
                position,
                item,
            );
        }
        Node::Leaf {
            position: existing,
            data,
        } if *existing == position => data.push(item),
        Node::Leaf {
            position: existing, ..
        } => {
            // Split: push the occupant down one level and retry from here.
            let quadrant = quadrant_of(bounds, *existing);
            let leaf = mem::replace(node, Node::new_internal());
            if let Node::Internal(children) = node {
                children[quadrant] = leaf;
            }
            insert(node, bounds, position, item);
        }
        Node::Empty => {
            *node = Node::Leaf {
                position,
                data: vec![item],
            }
        }
    }
}
