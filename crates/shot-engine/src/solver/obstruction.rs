use glam::DVec2;
use serde::Serialize;

use crate::core::ball::BallId;
use crate::core::ball_set::BallSet;
use crate::geometry::{approx_eq, Segment, EPSILON};

/// Result of sweeping a ball along a straight path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PathCheck {
    Clear,
    /// `distance` is measured from the path start to the blocker's
    /// projection onto the path.
    Blocked { by: BallId, distance: f64 },
}

impl PathCheck {
    pub fn is_clear(&self) -> bool {
        matches!(self, PathCheck::Clear)
    }

    pub fn blocker(&self) -> Option<BallId> {
        match self {
            PathCheck::Clear => None,
            PathCheck::Blocked { by, .. } => Some(*by),
        }
    }
}

/// Sweep a ball of `radius` from `start` to `end`.
///
/// A ball blocks when its center is closer than two radii to the path and
/// projects between the endpoints. Balls sitting on either endpoint and
/// those in `ignore` never block. The blocker nearest `start` wins.
pub fn check_path(start: DVec2, end: DVec2, balls: &BallSet, ignore: &[BallId], radius: f64) -> PathCheck {
    let path = Segment::new(start, end);
    let clearance = 2.0 * radius - EPSILON;
    let mut nearest: Option<(BallId, f64)> = None;

    for ball in balls.iter() {
        if ignore.contains(&ball.id) || approx_eq(ball.pos, start) || approx_eq(ball.pos, end) {
            continue;
        }
        let Some(hit) = path.corridor(ball.pos) else {
            continue;
        };
        if hit.offset >= clearance {
            continue;
        }
        if nearest.map_or(true, |(_, best)| hit.along < best) {
            nearest = Some((ball.id, hit.along));
        }
    }

    match nearest {
        Some((by, distance)) => {
            log::trace!("path {start} -> {end} blocked by {by} at {distance:.3}");
            PathCheck::Blocked { by, distance }
        }
        None => PathCheck::Clear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ball::Ball;

    const R: f64 = 1.125;

    fn set(balls: &[(u8, f64, f64)]) -> BallSet {
        balls
            .iter()
            .map(|&(n, x, y)| Ball::at(if n == 0 { BallId::Cue } else { BallId::Object(n) }, x, y))
            .collect()
    }

    #[test]
    fn empty_path_is_clear() {
        let balls = set(&[(0, 10.0, 25.0), (1, 60.0, 25.0)]);
        let check = check_path(DVec2::new(10.0, 25.0), DVec2::new(40.0, 25.0), &balls, &[], R);
        assert_eq!(check, PathCheck::Clear);
    }

    #[test]
    fn ball_in_corridor_blocks() {
        let balls = set(&[(0, 10.0, 25.0), (4, 30.0, 26.5)]);
        let check = check_path(DVec2::new(10.0, 25.0), DVec2::new(50.0, 25.0), &balls, &[], R);
        match check {
            PathCheck::Blocked { by, distance } => {
                assert_eq!(by, BallId::Object(4));
                assert!((distance - 20.0).abs() < 1e-9);
            }
            PathCheck::Clear => panic!("expected blocked"),
        }
    }

    #[test]
    fn grazing_at_exactly_two_radii_passes() {
        let balls = set(&[(4, 30.0, 25.0 + 2.0 * R)]);
        let check = check_path(DVec2::new(10.0, 25.0), DVec2::new(50.0, 25.0), &balls, &[], R);
        assert!(check.is_clear());
    }

    #[test]
    fn ball_beyond_the_end_does_not_block() {
        let balls = set(&[(4, 52.0, 25.0)]);
        let check = check_path(DVec2::new(10.0, 25.0), DVec2::new(50.0, 25.0), &balls, &[], R);
        assert!(check.is_clear());
    }

    #[test]
    fn nearest_blocker_is_reported() {
        let balls = set(&[(2, 40.0, 25.0), (7, 20.0, 25.5)]);
        let check = check_path(DVec2::new(10.0, 25.0), DVec2::new(50.0, 25.0), &balls, &[], R);
        assert_eq!(check.blocker(), Some(BallId::Object(7)));
    }

    #[test]
    fn ignored_balls_are_transparent() {
        let balls = set(&[(2, 30.0, 25.0)]);
        let check = check_path(
            DVec2::new(10.0, 25.0),
            DVec2::new(50.0, 25.0),
            &balls,
            &[BallId::Object(2)],
            R,
        );
        assert!(check.is_clear());
    }
}
