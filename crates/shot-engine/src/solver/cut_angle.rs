use glam::DVec2;
use serde::Serialize;

use crate::error::ShotError;
use crate::geometry::{angle_between_deg, cross, EPSILON};

/// Raw cut angles above this cannot send the object ball to the pocket.
pub const UNMAKEABLE_CUT_DEG: f64 = 85.0;

/// Angle between the cue ball's travel and the object ball's travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "degrees", rename_all = "snake_case")]
pub enum CutAngle {
    /// Cut in `[0, 85]` degrees.
    Makeable(f64),
    /// Thinner than the makeable limit, or a back-cut. Carries the acute
    /// line angle for display only.
    Unmakeable(f64),
}

impl CutAngle {
    /// Classify a raw angle in `[0, 180]`.
    pub fn from_raw(raw_deg: f64) -> Self {
        let acute = if raw_deg > 90.0 { 180.0 - raw_deg } else { raw_deg };
        if raw_deg > UNMAKEABLE_CUT_DEG {
            CutAngle::Unmakeable(acute)
        } else {
            CutAngle::Makeable(acute)
        }
    }

    pub fn degrees(self) -> f64 {
        match self {
            CutAngle::Makeable(d) | CutAngle::Unmakeable(d) => d,
        }
    }

    pub fn is_makeable(self) -> bool {
        matches!(self, CutAngle::Makeable(_))
    }

    /// The angle of a makeable cut, `UnmakeableAngle` otherwise.
    pub fn makeable(self) -> Result<f64, ShotError> {
        match self {
            CutAngle::Makeable(d) => Ok(d),
            CutAngle::Unmakeable(degrees) => Err(ShotError::UnmakeableAngle { degrees }),
        }
    }
}

/// Which way the object ball leaves relative to the cue ball's line, as seen
/// from behind the cue ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CutSide {
    Straight,
    Left,
    Right,
}

/// Cut angle for a cue ball at `cue` driving through `ghost` into the
/// object ball at `object`, bound for `pocket`.
pub fn cut_angle(cue: DVec2, ghost: DVec2, object: DVec2, pocket: DVec2) -> Result<CutAngle, ShotError> {
    let aim = ghost - cue;
    if aim.length() <= EPSILON {
        return Err(ShotError::DegenerateGeometry("cue ball already sits on the ghost ball"));
    }
    let raw = angle_between_deg(aim, pocket - object)
        .ok_or(ShotError::DegenerateGeometry("object ball coincides with the pocket"))?;
    Ok(CutAngle::from_raw(raw))
}

/// Side of the cut. Screen coordinates have y pointing down, so a positive
/// cross product turns clockwise on screen, to the right.
pub fn cut_side(cue: DVec2, ghost: DVec2, object: DVec2, pocket: DVec2) -> CutSide {
    let aim = ghost - cue;
    let travel = pocket - object;
    let scale = aim.length() * travel.length();
    if scale <= EPSILON {
        return CutSide::Straight;
    }
    let sine = cross(aim, travel) / scale;
    if sine.abs() <= 1e-9 {
        CutSide::Straight
    } else if sine > 0.0 {
        CutSide::Right
    } else {
        CutSide::Left
    }
}
