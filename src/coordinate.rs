use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Coordinate {
    fn from(coord: (f64, f64)) -> Self {
        Coordinate {
            x: coord.0,
            y: coord.1,
        }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(coord: [f64; 2]) -> Self {
        Coordinate {
            x: coord[0],
            y: coord[1],
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    pub fn origin() -> Self {
        Coordinate { x: 0., y: 0. }
    }

    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Rotate this point by `theta` radians (counter-clockwise in a y-up frame)
    /// around `origin`.
    pub fn rotate_about(&self, origin: Coordinate, theta: f64) -> Coordinate {
        let (sin, cos) = theta.sin_cos();
        let offset = *self - origin;
        Coordinate {
            x: origin.x + offset.x * cos - offset.y * sin,
            y: origin.y + offset.x * sin + offset.y * cos,
        }
    }
}

/// Rotate `point` by `theta` radians around `origin`.
pub fn rotate(point: Coordinate, theta: f64, origin: Coordinate) -> Coordinate {
    point.rotate_about(origin, theta)
}

/// Anything that can be placed at a single position in the plane.
pub trait HasPosition {
    fn position(&self) -> Coordinate;
}

impl HasPosition for Coordinate {
    fn position(&self) -> Coordinate {
        *self
    }
}

impl HasPosition for (f64, f64) {
    fn position(&self) -> Coordinate {
        (*self).into()
    }
}

impl HasPosition for [f64; 2] {
    fn position(&self) -> Coordinate {
        (*self).into()
    }
}

impl<P: HasPosition + ?Sized> HasPosition for &P {
    fn position(&self) -> Coordinate {
        (**self).position()
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Coordinate {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Coordinate {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Coordinate {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Coordinate {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
