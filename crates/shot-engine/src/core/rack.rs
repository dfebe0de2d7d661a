//! Starting arrangements: object balls racked on the foot spot, cue ball in
//! the kitchen.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::ball::{Ball, BallId};
use crate::core::table::Table;
use crate::error::ShotError;

/// Clearance added between racked balls so neighbours are not reported as
/// overlapping.
const RACK_CLEARANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RackKind {
    /// 15-ball triangle with the 8 in the middle.
    #[default]
    EightBall,
    /// 9-ball diamond with the 9 in the middle.
    NineBall,
}

impl fmt::Display for RackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RackKind::EightBall => f.write_str("8-ball"),
            RackKind::NineBall => f.write_str("9-ball"),
        }
    }
}

impl FromStr for RackKind {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "8-ball" | "8ball" | "eight-ball" => Ok(RackKind::EightBall),
            "9-ball" | "9ball" | "nine-ball" => Ok(RackKind::NineBall),
            _ => Err(ShotError::NoSuchRack(s.to_string())),
        }
    }
}

/// Triangle layout as `(ball number, row, vertical offset in ball spacings)`.
/// The apex points left toward the cue ball; rows spread right.
///
/// ```text
///  1
///  9  2
///  3  8 10
/// 11  4  5 12
///  6 13 14  7 15
/// ```
const EIGHT_BALL: [(u8, usize, f64); 15] = [
    (1, 0, 0.0),
    (9, 1, -0.5), (2, 1, 0.5),
    (3, 2, -1.0), (8, 2, 0.0), (10, 2, 1.0),
    (11, 3, -1.5), (4, 3, -0.5), (5, 3, 0.5), (12, 3, 1.5),
    (6, 4, -2.0), (13, 4, -1.0), (14, 4, 0.0), (7, 4, 1.0), (15, 4, 2.0),
];

/// Diamond layout, 1 at the apex and 9 in the center.
const NINE_BALL: [(u8, usize, f64); 9] = [
    (1, 0, 0.0),
    (2, 1, -0.5), (3, 1, 0.5),
    (4, 2, -1.0), (9, 2, 0.0), (5, 2, 1.0),
    (6, 3, -0.5), (7, 3, 0.5),
    (8, 4, 0.0),
];

/// Every ball of the rack plus the cue ball on the head spot.
pub fn rack_positions(kind: RackKind, table: &Table) -> Vec<Ball> {
    let layout: &[(u8, usize, f64)] = match kind {
        RackKind::EightBall => &EIGHT_BALL,
        RackKind::NineBall => &NINE_BALL,
    };
    let apex = table.foot_spot();
    let gap = table.ball_radius() * 2.0 + RACK_CLEARANCE;
    let row_offset = gap * 0.75_f64.sqrt();

    let mut balls = Vec::with_capacity(layout.len() + 1);
    balls.push(Ball::new(BallId::Cue, table.head_spot()));
    for &(number, row, v_offset) in layout {
        let pos = DVec2::new(apex.x + row as f64 * row_offset, apex.y + v_offset * gap);
        balls.push(Ball::new(BallId::Object(number), pos));
    }
    balls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_ball_rack_has_all_balls_on_table() {
        let table = Table::default();
        let balls = rack_positions(RackKind::EightBall, &table);
        assert_eq!(balls.len(), 16);
        for ball in &balls {
            assert!(table.contains_ball(ball.pos), "ball {} off table", ball.id);
        }
    }

    #[test]
    fn racked_balls_never_overlap() {
        let table = Table::default();
        for kind in [RackKind::EightBall, RackKind::NineBall] {
            let balls = rack_positions(kind, &table);
            for (i, a) in balls.iter().enumerate() {
                for b in &balls[i + 1..] {
                    assert!(!a.overlaps(b.pos, table.ball_radius()), "{} overlaps {}", a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn eight_sits_in_the_middle_of_the_rack() {
        let table = Table::default();
        let balls = rack_positions(RackKind::EightBall, &table);
        let eight = balls.iter().find(|b| b.id == BallId::Object(8)).unwrap();
        assert!((eight.pos.y - table.foot_spot().y).abs() < 1e-9);
        assert!(eight.pos.x > table.length() / 2.0);
    }

    #[test]
    fn cue_ball_in_kitchen() {
        let table = Table::default();
        let balls = rack_positions(RackKind::NineBall, &table);
        assert_eq!(balls[0].id, BallId::Cue);
        assert!(balls[0].pos.x < table.length() * 0.35);
        assert_eq!(balls.len(), 10);
    }

    #[test]
    fn parse_rack_kind() {
        assert_eq!("8-ball".parse::<RackKind>().unwrap(), RackKind::EightBall);
        assert_eq!("Nine-Ball".parse::<RackKind>().unwrap(), RackKind::NineBall);
        assert!(matches!("snooker".parse::<RackKind>(), Err(ShotError::NoSuchRack(ref s)) if s == "snooker"));
    }
}
