use crate::Coordinate;

/// Point on the cubic Bezier curve from `start` to `end` at `t` in `[0, 1]`.
///
/// B(t) = (1 - t)^3 P0 + 3(1 - t)^2 t P1 + 3(1 - t) t^2 P2 + t^3 P3
pub fn interpolate_cubic_bezier(
    start: Coordinate,
    control1: Coordinate,
    control2: Coordinate,
    end: Coordinate,
) -> impl Fn(f64) -> Coordinate {
    move |t| {
        let s = 1. - t;
        start * s.powi(3) + control1 * (3. * s.powi(2) * t) + control2 * (3. * s * t.powi(2))
            + end * t.powi(3)
    }
}

/// Direction of travel, in degrees, along the cubic Bezier curve at `t`.
///
/// B'(t) = 3(1 - t)^2 (P1 - P0) + 6(1 - t) t (P2 - P1) + 3 t^2 (P3 - P2)
pub fn interpolate_cubic_bezier_angle(
    start: Coordinate,
    control1: Coordinate,
    control2: Coordinate,
    end: Coordinate,
) -> impl Fn(f64) -> f64 {
    move |t| {
        let s = 1. - t;
        let tangent = (control1 - start) * (3. * s.powi(2))
            + (control2 - control1) * (6. * s * t)
            + (end - control2) * (3. * t.powi(2));
        tangent.y.atan2(tangent.x).to_degrees()
    }
}

/// Point on the quadratic Bezier curve from `start` to `end` at `t` in `[0, 1]`.
///
/// B(t) = (1 - t)^2 P0 + 2(1 - t) t P1 + t^2 P2
pub fn interpolate_quadratic_bezier(
    start: Coordinate,
    control: Coordinate,
    end: Coordinate,
) -> impl Fn(f64) -> Coordinate {
    move |t| {
        let s = 1. - t;
        start * s.powi(2) + control * (2. * s * t) + end * t.powi(2)
    }
}

/// Direction of travel, in degrees, along the quadratic Bezier curve at `t`.
pub fn interpolate_quadratic_bezier_angle(
    start: Coordinate,
    control: Coordinate,
    end: Coordinate,
) -> impl Fn(f64) -> f64 {
    move |t| {
        let tangent = (control - start) * (2. * (1. - t)) + (end - control) * (2. * t);
        tangent.y.atan2(tangent.x).to_degrees()
    }
}
