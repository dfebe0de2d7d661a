//! One-rail kicks by the mirror method: reflect the target across the line
//! a ball center follows when touching the cushion, then aim straight at
//! the reflection.

use glam::DVec2;
use serde::Serialize;

use crate::api::config::KickConfig;
use crate::core::ball::BallId;
use crate::core::ball_set::BallSet;
use crate::core::rail::Rail;
use crate::core::table::Table;
use crate::error::ShotError;
use crate::geometry::EPSILON;
use crate::solver::obstruction::check_path;

/// A cue ball route off one rail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KickSolution {
    pub rail: Rail,
    pub cue: DVec2,
    /// Where the cue ball center meets the rail line.
    pub contact: DVec2,
    /// Rail point to aim at once side english is accounted for.
    pub aim_point: DVec2,
    pub virtual_target: DVec2,
    pub target: DVec2,
    pub path_length: f64,
    /// Aim point in diamonds from the rail's low-coordinate end.
    pub diamond: f64,
}

impl KickSolution {
    pub fn label(&self) -> String {
        let rail = match self.rail {
            Rail::Top => "Top",
            Rail::Bottom => "Bottom",
            Rail::Left => "Left",
            Rail::Right => "Right",
        };
        format!("{rail} rail, diamond {:.1}", self.diamond)
    }
}

/// What a kick has to achieve.
#[derive(Debug, Clone, Copy)]
pub struct KickRequest<'a> {
    pub cue: DVec2,
    pub target: DVec2,
    pub balls: &'a BallSet,
    /// Balls that never obstruct either leg.
    pub ignore: &'a [BallId],
    /// Ball the kick is played at. It may sit beside the final leg but
    /// still blocks the cue ball on its way to the rail.
    pub object_ball: Option<BallId>,
    /// Horizontal english in `[-1, 1]`.
    pub side_english: f64,
}

/// Solve a kick off a single rail. `NoValidKick` when the rail cannot be
/// used: the ball would hit a pocket mouth, or a leg is obstructed.
pub fn solve_kick(table: &Table, config: &KickConfig, req: &KickRequest<'_>, rail: Rail) -> Result<KickSolution, ShotError> {
    let geometry = table.rail(rail);
    let line = geometry.line;

    if geometry.depth(req.cue) <= EPSILON || geometry.depth(req.target) <= EPSILON {
        return Err(ShotError::NoValidKick);
    }

    let virtual_target = line.reflect(req.target);
    let contact = line.intersect(req.cue, virtual_target).ok_or(ShotError::NoValidKick)?;
    let contact_along = line.along(contact);
    let (lo, hi) = geometry
        .segment_containing(contact_along)
        .ok_or(ShotError::NoValidKick)?;

    let radius = table.ball_radius();
    let first = check_path(req.cue, contact, req.balls, req.ignore, radius);
    let mut final_ignore = req.ignore.to_vec();
    final_ignore.extend(req.object_ball);
    let second = check_path(contact, req.target, req.balls, &final_ignore, radius);
    if !first.is_clear() || !second.is_clear() {
        log::debug!("{rail} rail kick obstructed: {first:?} / {second:?}");
        return Err(ShotError::NoValidKick);
    }

    let travel = contact_along - line.along(req.cue);
    let heading = if travel.abs() <= EPSILON { 0.0 } else { travel.signum() };
    let aim_along = (contact_along + req.side_english * config.max_english_shift * heading).clamp(lo, hi);
    let aim_point = line.point_at(aim_along);

    Ok(KickSolution {
        rail,
        cue: req.cue,
        contact,
        aim_point,
        virtual_target,
        target: req.target,
        path_length: req.cue.distance(contact) + contact.distance(req.target),
        diamond: geometry.diamond(aim_along),
    })
}

/// Shortest valid kick among the rails `accept` allows. Ties go to the
/// earlier rail in [`Rail::ALL`].
pub fn best_kick_by<F>(table: &Table, config: &KickConfig, req: &KickRequest<'_>, accept: F) -> Result<KickSolution, ShotError>
where
    F: Fn(&KickSolution) -> bool,
{
    let mut best: Option<KickSolution> = None;
    for rail in Rail::ALL {
        let Ok(kick) = solve_kick(table, config, req, rail) else {
            continue;
        };
        if !accept(&kick) {
            continue;
        }
        let shorter = best
            .as_ref()
            .map_or(true, |b| kick.path_length < b.path_length - EPSILON);
        if shorter {
            best = Some(kick);
        }
    }
    best.ok_or(ShotError::NoValidKick)
}

pub fn best_kick(table: &Table, config: &KickConfig, req: &KickRequest<'_>) -> Result<KickSolution, ShotError> {
    best_kick_by(table, config, req, |_| true)
}
