use crate::{Coordinate, Rectangle};
use std::fmt;

/// A uniform scale `k` followed by a translation `(x, y)`, mapping data
/// coordinates to screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        ZoomTransform::identity()
    }
}

impl fmt::Display for ZoomTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({},{}) scale({})", self.x, self.y, self.k)
    }
}

impl ZoomTransform {
    pub fn new(k: f64, x: f64, y: f64) -> Self {
        ZoomTransform { k, x, y }
    }

    pub fn identity() -> Self {
        ZoomTransform {
            k: 1.,
            x: 0.,
            y: 0.,
        }
    }

    /// This transform scaled by a further factor `k`.
    pub fn scale(&self, k: f64) -> Self {
        ZoomTransform {
            k: self.k * k,
            ..*self
        }
    }

    /// This transform translated by `(x, y)` in data units.
    pub fn translate(&self, x: f64, y: f64) -> Self {
        ZoomTransform {
            x: self.x + self.k * x,
            y: self.y + self.k * y,
            ..*self
        }
    }

    pub fn apply(&self, point: Coordinate) -> Coordinate {
        Coordinate::new(self.apply_x(point.x), self.apply_y(point.y))
    }

    pub fn apply_x(&self, x: f64) -> f64 {
        x * self.k + self.x
    }

    pub fn apply_y(&self, y: f64) -> f64 {
        y * self.k + self.y
    }

    pub fn invert(&self, point: Coordinate) -> Coordinate {
        Coordinate::new(self.invert_x(point.x), self.invert_y(point.y))
    }

    pub fn invert_x(&self, x: f64) -> f64 {
        (x - self.x) / self.k
    }

    pub fn invert_y(&self, y: f64) -> f64 {
        (y - self.y) / self.k
    }

    /// The data-space rectangle under a square of half-size `radius` screen
    /// units around `screen_point`, e.g. for a hover hit test.
    pub fn hit_box(&self, screen_point: Coordinate, radius: f64) -> Rectangle {
        let delta = Coordinate::new(radius, radius);
        Rectangle::new(
            self.invert(screen_point - delta),
            self.invert(screen_point + delta),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::filter_in_rect_from_quadtree;
    use crate::Quadtree;

    #[test]
    fn test_identity() {
        let t = ZoomTransform::default();
        let p = Coordinate::new(3., -4.);
        assert_eq!(t.apply(p), p);
        assert_eq!(t.invert(p), p);
    }

    #[test]
    fn test_apply_and_invert() {
        let t = ZoomTransform::new(2., 10., -5.);
        let p = Coordinate::new(3., 4.);
        assert_eq!(t.apply(p), Coordinate::new(16., 3.));
        assert_eq!(t.invert(t.apply(p)), p);
        assert_eq!(t.apply_x(1.), 12.);
        assert_eq!(t.invert_y(-5.), 0.);
    }

    #[test]
    fn test_scale_and_translate() {
        let t = ZoomTransform::identity().translate(5., 5.).scale(4.);
        assert_eq!(t, ZoomTransform::new(4., 5., 5.));
        assert_eq!(t.translate(1., 0.), ZoomTransform::new(4., 9., 5.));
        assert_eq!(format!("{}", t), "translate(5,5) scale(4)");
    }

    #[test]
    fn test_hit_box() {
        let t = ZoomTransform::new(2., 100., 50.);
        let mouse = Coordinate::new(120., 70.);
        let hit_box = t.hit_box(mouse, 3.);
        assert_eq!(hit_box, Rectangle::new((8.5, 8.5).into(), (11.5, 11.5).into()));
        assert!(hit_box.contains(t.invert(mouse)));
    }

    #[test]
    fn test_hover_lookup() {
        let t = ZoomTransform::new(4., -20., -20.);
        let offices = Quadtree::from_items(vec![
            Coordinate::new(10., 10.),
            Coordinate::new(10.5, 10.),
            Coordinate::new(30., 30.),
        ]);
        // (10, 10) is drawn at (20, 20); (10.5, 10) at (22, 20).
        let under_mouse = filter_in_rect_from_quadtree(&offices, t.hit_box((20., 20.).into(), 1.));
        assert_eq!(under_mouse, vec![&Coordinate::new(10., 10.)]);
        let under_mouse = filter_in_rect_from_quadtree(&offices, t.hit_box((21., 20.).into(), 1.));
        assert_eq!(under_mouse.len(), 2);
    }
}
