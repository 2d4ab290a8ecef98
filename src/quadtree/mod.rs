mod tree;

pub use tree::{QuadNode, Quadtree};
