use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::ShotError;
use crate::geometry::AxisLine;

/// The four cushions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rail {
    Top,
    Bottom,
    Left,
    Right,
}

impl Rail {
    /// Search order for kicks; also the tie-break order.
    pub const ALL: [Rail; 4] = [Rail::Top, Rail::Bottom, Rail::Left, Rail::Right];

    pub fn name(self) -> &'static str {
        match self {
            Rail::Top => "top",
            Rail::Bottom => "bottom",
            Rail::Left => "left",
            Rail::Right => "right",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rail {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Rail::Top),
            "bottom" => Ok(Rail::Bottom),
            "left" => Ok(Rail::Left),
            "right" => Ok(Rail::Right),
            _ => Err(ShotError::NoSuchRail(s.to_string())),
        }
    }
}

/// One rail as seen by a ball center: the line the center sits on when the
/// ball touches the cushion, and the cushion spans between pocket jaws.
#[derive(Debug, Clone, PartialEq)]
pub struct RailGeometry {
    pub rail: Rail,
    pub line: AxisLine,
    /// Cushion spans along `line`, ascending and disjoint.
    pub segments: Vec<(f64, f64)>,
    /// +1 when the cloth lies on the positive side of `line`.
    inward: f64,
    diamond_origin: f64,
    diamond_spacing: f64,
}

impl RailGeometry {
    pub(crate) fn new(
        rail: Rail,
        line: AxisLine,
        inward: f64,
        segments: Vec<(f64, f64)>,
        diamond_origin: f64,
        diamond_spacing: f64,
    ) -> Self {
        Self {
            rail,
            line,
            segments,
            inward,
            diamond_origin,
            diamond_spacing,
        }
    }

    /// Distance of `p` from the rail line, positive on the cloth side.
    pub fn depth(&self, p: DVec2) -> f64 {
        self.line.signed_distance(p) * self.inward
    }

    /// The cushion span holding `along`, if any. Points inside a pocket
    /// mouth belong to no span.
    pub fn segment_containing(&self, along: f64) -> Option<(f64, f64)> {
        self.segments
            .iter()
            .copied()
            .find(|&(lo, hi)| along >= lo && along <= hi)
    }

    /// Position along the rail in diamonds, counted from the rail's
    /// low-coordinate end.
    pub fn diamond(&self, along: f64) -> f64 {
        (along - self.diamond_origin) / self.diamond_spacing
    }
}
