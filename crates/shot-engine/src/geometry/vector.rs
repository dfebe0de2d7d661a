//! Vector helpers with the engine's tolerance baked in.

use glam::DVec2;

/// Two positions closer than this (in table units) are the same point.
pub const EPSILON: f64 = 1e-6;

/// Whether two points coincide within [`EPSILON`].
pub fn approx_eq(a: DVec2, b: DVec2) -> bool {
    a.distance(b) <= EPSILON
}

/// Unit vector pointing from `from` to `to`, or `None` when the points coincide.
pub fn direction(from: DVec2, to: DVec2) -> Option<DVec2> {
    let delta = to - from;
    let len = delta.length();
    if len <= EPSILON {
        None
    } else {
        Some(delta / len)
    }
}

/// 2D cross product (z component of `a × b`).
pub fn cross(a: DVec2, b: DVec2) -> f64 {
    a.perp_dot(b)
}

/// Whether `point` lies on the circle of `radius` around `center`.
pub fn point_on_circle(point: DVec2, center: DVec2, radius: f64) -> bool {
    (point.distance(center) - radius).abs() <= EPSILON
}

/// Unsigned angle between two vectors in degrees, `[0, 180]`.
/// `None` if either vector has zero length.
pub fn angle_between_deg(a: DVec2, b: DVec2) -> Option<f64> {
    if a.length() <= EPSILON || b.length() <= EPSILON {
        return None;
    }
    // atan2 keeps precision near 0 and 180 where acos does not
    Some(cross(a, b).atan2(a.dot(b)).abs().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_unit_length() {
        let d = direction(DVec2::new(1.0, 1.0), DVec2::new(4.0, 5.0)).unwrap();
        assert!((d.length() - 1.0).abs() < 1e-12);
        assert!((d.x - 0.6).abs() < 1e-12);
        assert!((d.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn direction_of_coincident_points_is_none() {
        let p = DVec2::new(10.0, 20.0);
        assert!(direction(p, p + DVec2::splat(1e-8)).is_none());
    }

    #[test]
    fn approx_eq_uses_tolerance() {
        let p = DVec2::new(3.0, 4.0);
        assert!(approx_eq(p, p + DVec2::new(5e-7, 0.0)));
        assert!(!approx_eq(p, p + DVec2::new(1e-5, 0.0)));
    }

    #[test]
    fn angle_between_handles_extremes() {
        assert_eq!(angle_between_deg(DVec2::X, DVec2::X), Some(0.0));
        let opposite = angle_between_deg(DVec2::X, -DVec2::X).unwrap();
        assert!((opposite - 180.0).abs() < 1e-9);
        let right = angle_between_deg(DVec2::X, DVec2::new(0.0, -3.0)).unwrap();
        assert!((right - 90.0).abs() < 1e-9);
        assert!(angle_between_deg(DVec2::ZERO, DVec2::X).is_none());
    }

    #[test]
    fn point_on_circle_within_tolerance() {
        let c = DVec2::new(50.0, 25.0);
        assert!(point_on_circle(DVec2::new(52.25, 25.0), c, 2.25));
        assert!(!point_on_circle(DVec2::new(52.0, 25.0), c, 2.25));
    }
}
