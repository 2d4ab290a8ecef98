mod coordinate;
mod quadtree;
mod rectangle;
mod zoom;

pub mod algorithms;
pub mod errors;
pub mod from_wkt;
mod utils;

pub use coordinate::{rotate, Coordinate, HasPosition};
pub use quadtree::{QuadNode, Quadtree};
pub use rectangle::{HasEnvelope, Rectangle};
pub use zoom::ZoomTransform;
