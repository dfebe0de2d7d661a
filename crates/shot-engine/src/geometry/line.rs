//! Axis-aligned lines: the rails of the table are all of this kind, which
//! keeps mirror reflection and intersection exact.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::vector::EPSILON;

/// Which coordinate a line holds constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// `x = offset` (a vertical line).
    X,
    /// `y = offset` (a horizontal line).
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub axis: Axis,
    pub offset: f64,
}

impl AxisLine {
    pub fn vertical(x: f64) -> Self {
        Self { axis: Axis::X, offset: x }
    }

    pub fn horizontal(y: f64) -> Self {
        Self { axis: Axis::Y, offset: y }
    }

    /// Coordinate of `p` perpendicular to the line.
    fn across(&self, p: DVec2) -> f64 {
        match self.axis {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    /// Coordinate of `p` measured along the line.
    pub fn along(&self, p: DVec2) -> f64 {
        match self.axis {
            Axis::X => p.y,
            Axis::Y => p.x,
        }
    }

    /// The point on the line at the given along-coordinate.
    pub fn point_at(&self, along: f64) -> DVec2 {
        match self.axis {
            Axis::X => DVec2::new(self.offset, along),
            Axis::Y => DVec2::new(along, self.offset),
        }
    }

    /// Signed distance: positive on the side of increasing coordinate.
    pub fn signed_distance(&self, p: DVec2) -> f64 {
        self.across(p) - self.offset
    }

    /// Mirror image of `p` across the line.
    pub fn reflect(&self, p: DVec2) -> DVec2 {
        let mirrored = 2.0 * self.offset - self.across(p);
        match self.axis {
            Axis::X => DVec2::new(mirrored, p.y),
            Axis::Y => DVec2::new(p.x, mirrored),
        }
    }

    /// Where the infinite line through `from` and `to` crosses this line.
    /// `None` when the two are parallel.
    pub fn intersect(&self, from: DVec2, to: DVec2) -> Option<DVec2> {
        let a = self.signed_distance(from);
        let b = self.signed_distance(to);
        if (a - b).abs() <= EPSILON {
            return None;
        }
        let t = a / (a - b);
        let hit = from.lerp(to, t);
        // Snap exactly onto the line so along() is not polluted by rounding
        Some(self.point_at(self.along(hit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_is_an_involution() {
        let line = AxisLine::horizontal(3.0);
        let p = DVec2::new(12.0, 10.0);
        let m = line.reflect(p);
        assert_eq!(m, DVec2::new(12.0, -4.0));
        assert_eq!(line.reflect(m), p);
    }

    #[test]
    fn intersect_between_point_and_mirror() {
        let line = AxisLine::vertical(0.0);
        let hit = line.intersect(DVec2::new(4.0, 0.0), DVec2::new(-4.0, 8.0)).unwrap();
        assert_eq!(hit, DVec2::new(0.0, 4.0));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let line = AxisLine::horizontal(1.0);
        assert!(line.intersect(DVec2::new(0.0, 5.0), DVec2::new(10.0, 5.0)).is_none());
    }

    #[test]
    fn signed_distance_and_along() {
        let line = AxisLine::vertical(96.875);
        let p = DVec2::new(90.0, 20.0);
        assert!((line.signed_distance(p) + 6.875).abs() < 1e-12);
        assert_eq!(line.along(p), 20.0);
        assert_eq!(line.point_at(20.0), DVec2::new(96.875, 20.0));
    }
}
