pub mod other_impls;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use vis_utils::{Coordinate, Rectangle};

//// Utility functions

pub(crate) fn get_random_points(envelope: Rectangle, count: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Coordinate::new(
                rng.gen_range(envelope.x_min, envelope.x_max),
                rng.gen_range(envelope.y_min, envelope.y_max),
            )
        })
        .collect()
}

/// Square query windows of side `size` scattered over `envelope`.
pub(crate) fn get_random_windows(
    envelope: Rectangle,
    size: f64,
    count: usize,
    seed: u64,
) -> Vec<Rectangle> {
    get_random_points(envelope, count, seed)
        .into_iter()
        .map(|p| Rectangle::new(p, p + Coordinate::new(size, size)))
        .collect()
}

pub(crate) fn viewport() -> Rectangle {
    Rectangle::new(Coordinate::new(0., 0.), Coordinate::new(960., 600.))
}
