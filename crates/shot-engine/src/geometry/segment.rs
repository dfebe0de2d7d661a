//! Line segments and the "corridor" test used for ball obstruction.

use glam::DVec2;

use super::vector::{cross, direction, EPSILON};

/// A finite segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

/// Where a point sits relative to a segment it projects onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorridorHit {
    /// Distance from `start` to the foot of the perpendicular.
    pub along: f64,
    /// Perpendicular distance from the point to the segment's line.
    pub offset: f64,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Unit direction, `None` for a zero-length segment.
    pub fn direction(&self) -> Option<DVec2> {
        direction(self.start, self.end)
    }

    /// Perpendicular projection of `p`, only when its foot lands between the
    /// endpoints. Points that project past either end return `None`.
    pub fn corridor(&self, p: DVec2) -> Option<CorridorHit> {
        let dir = self.direction()?;
        let rel = p - self.start;
        let along = rel.dot(dir);
        if along < -EPSILON || along > self.length() + EPSILON {
            return None;
        }
        Some(CorridorHit {
            along,
            offset: cross(dir, rel).abs(),
        })
    }
}
