use crate::Coordinate;

/// An axis-aligned rectangle in screen orientation: `(x_min, y_min)` is the
/// top-left corner and `(x_max, y_max)` the bottom-right one.
#[derive(Copy, Clone, Debug)]
pub struct Rectangle {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

pub trait HasEnvelope {
    fn envelope(&self) -> Rectangle;
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            self.x_min == other.x_min
                && self.y_min == other.y_min
                && self.x_max == other.x_max
                && self.y_max == other.y_max
        }
    }
}

impl Rectangle {
    /// Build a rectangle from its top-left and bottom-right corners, as given.
    ///
    /// The corners are not reordered: the caller must ensure `top_left` is
    /// really above and left of `bottom_right`.  Use [`Rectangle::bounding`]
    /// for two arbitrary corners.
    pub fn new(top_left: Coordinate, bottom_right: Coordinate) -> Self {
        Rectangle {
            x_min: top_left.x,
            y_min: top_left.y,
            x_max: bottom_right.x,
            y_max: bottom_right.y,
        }
    }

    /// The smallest rectangle containing both points.
    pub fn bounding(p1: Coordinate, p2: Coordinate) -> Self {
        Rectangle {
            x_min: p1.x.min(p2.x),
            y_min: p1.y.min(p2.y),
            x_max: p1.x.max(p2.x),
            y_max: p1.y.max(p2.y),
        }
    }

    pub fn new_empty() -> Self {
        Rectangle {
            x_min: f64::NAN,
            y_min: f64::NAN,
            x_max: f64::NAN,
            y_max: f64::NAN,
        }
    }

    pub fn of_points(points: &[Coordinate]) -> Self {
        points.iter().fold(Rectangle::new_empty(), |mut s, p| {
            s.expand(Rectangle::new(*p, *p));
            s
        })
    }

    pub fn is_empty(&self) -> bool {
        self.x_min.is_nan() || self.y_min.is_nan() || self.x_max.is_nan() || self.y_max.is_nan()
    }

    pub fn top_left(&self) -> Coordinate {
        Coordinate::new(self.x_min, self.y_min)
    }

    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new(self.x_max, self.y_max)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Midpoint, computed so that it stays finite for any finite rectangle
    /// whose width and height are finite.
    pub fn center(&self) -> Coordinate {
        Coordinate {
            x: self.x_min + self.width() / 2.,
            y: self.y_min + self.height() / 2.,
        }
    }

    /// Closed-interval overlap test: rectangles sharing only an edge or a
    /// corner intersect.
    pub fn intersects(&self, other: Rectangle) -> bool {
        self.x_min <= other.x_max
            && other.x_min <= self.x_max
            && self.y_min <= other.y_max
            && other.y_min <= self.y_max
    }

    /// Inclusive on all four sides.
    pub fn contains(&self, point: Coordinate) -> bool {
        self.x_min <= point.x
            && point.x <= self.x_max
            && self.y_min <= point.y
            && point.y <= self.y_max
    }

    pub fn contains_rect(&self, other: Rectangle) -> bool {
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    pub fn expand(&mut self, other: Rectangle) {
        // f64::min/max return the non-NaN operand, so an empty side is replaced.
        self.x_min = self.x_min.min(other.x_min);
        self.y_min = self.y_min.min(other.y_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_max = self.y_max.max(other.y_max);
    }
}
