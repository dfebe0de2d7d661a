use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::ball::BallId;
use crate::core::pocket::PocketId;
use crate::solver::classifier::Verdict;
use crate::solver::cut_angle::{CutAngle, CutSide};
use crate::solver::kick::KickSolution;
use crate::solver::obstruction::PathCheck;

/// Offsets below this on either axis count as centered.
const SPIN_DEAD_ZONE: f64 = 0.2;

/// Cue tip offset from the cue ball center, each axis in `[-1, 1]`.
/// `x > 0` is right english, `y > 0` is follow (above center).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct English {
    pub x: f64,
    pub y: f64,
}

impl English {
    pub const CENTER: English = English { x: 0.0, y: 0.0 };
    /// Preset applied when the table is racked.
    pub const BREAK: English = English { x: 0.0, y: 0.5 };

    /// Clamps both axes; NaN becomes center.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    pub fn spin(&self) -> SpinType {
        let vertical = if self.y >= SPIN_DEAD_ZONE {
            1
        } else if self.y <= -SPIN_DEAD_ZONE {
            -1
        } else {
            0
        };
        let horizontal = if self.x >= SPIN_DEAD_ZONE {
            1
        } else if self.x <= -SPIN_DEAD_ZONE {
            -1
        } else {
            0
        };
        match (vertical, horizontal) {
            (1, -1) => SpinType::FollowLeft,
            (1, 1) => SpinType::FollowRight,
            (1, _) => SpinType::Follow,
            (-1, -1) => SpinType::DrawLeft,
            (-1, 1) => SpinType::DrawRight,
            (-1, _) => SpinType::Draw,
            (_, -1) => SpinType::Left,
            (_, 1) => SpinType::Right,
            _ => SpinType::Center,
        }
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-1.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpinType {
    Center,
    Follow,
    Draw,
    Left,
    Right,
    FollowLeft,
    FollowRight,
    DrawLeft,
    DrawRight,
}

impl SpinType {
    pub fn label(self) -> &'static str {
        match self {
            SpinType::Center => "center",
            SpinType::Follow => "follow",
            SpinType::Draw => "draw",
            SpinType::Left => "left",
            SpinType::Right => "right",
            SpinType::FollowLeft => "follow-left",
            SpinType::FollowRight => "follow-right",
            SpinType::DrawLeft => "draw-left",
            SpinType::DrawRight => "draw-right",
        }
    }
}

impl fmt::Display for SpinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stroke power as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Power(f64);

impl Power {
    pub const BREAK: Power = Power(70.0);

    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            Self(0.0)
        } else {
            Self(percent.clamp(0.0, 100.0))
        }
    }

    pub fn percent(self) -> f64 {
        self.0
    }
}

impl From<f64> for Power {
    fn from(percent: f64) -> Self {
        Power::new(percent)
    }
}

impl From<Power> for f64 {
    fn from(power: Power) -> Self {
        power.0
    }
}

impl Default for Power {
    fn default() -> Self {
        Self(50.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotKind {
    Direct,
    Kick,
}

/// Everything derived about the current shot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shot {
    pub kind: ShotKind,
    pub object_ball: BallId,
    pub pocket: PocketId,
    pub cue: DVec2,
    pub object: DVec2,
    pub pocket_pos: DVec2,
    pub ghost: DVec2,
    /// Where the cue ball touches the object ball.
    pub contact: DVec2,
    pub cut: CutAngle,
    pub cut_side: CutSide,
    /// Cue ball center to ghost ball center.
    pub cue_path: PathCheck,
    /// Object ball center to pocket center.
    pub target_path: PathCheck,
    pub ghost_on_table: bool,
    pub kick: Option<KickSolution>,
    pub verdict: Verdict,
    pub make_probability: f64,
    pub english: English,
    pub spin: SpinType,
    pub power: Power,
    /// How hard this shot wants to be hit.
    pub recommended_power: Power,
}

impl Shot {
    /// One line for a status bar.
    pub fn status(&self) -> String {
        format!("{} ({:.0}%)", self.verdict, self.make_probability * 100.0)
    }

    /// Plain-language description of how to play the shot.
    pub fn instructions(&self) -> String {
        let pocket = pocket_phrase(self.pocket);
        let ball = format!("the {} ball", self.object_ball);

        if !self.target_path.is_clear() {
            let by = self.target_path.blocker().map(|b| b.to_string()).unwrap_or_default();
            return format!("The {by} ball blocks {ball} from reaching {pocket}.");
        }
        if !self.ghost_on_table {
            return format!("The cue ball cannot reach the contact point to send {ball} into {pocket}.");
        }

        let cut = match (self.cut, self.cut_side) {
            (CutAngle::Unmakeable(_), _) => {
                return format!("The {} ball cannot be cut into {pocket} from here.", self.object_ball)
            }
            (_, CutSide::Straight) => "straight in".to_string(),
            (c, CutSide::Left) => format!("cut {:.1} deg to the left", c.degrees()),
            (c, CutSide::Right) => format!("cut {:.1} deg to the right", c.degrees()),
        };
        let stroke = format!(
            "{} english, {:.0}% power (about {:.0}% needed)",
            self.spin,
            self.power.percent(),
            self.recommended_power.percent()
        );

        match (&self.kick, self.kind) {
            (Some(kick), ShotKind::Kick) => format!(
                "Kick off the {} rail at diamond {:.1} to reach the ghost ball, sending {ball} into {pocket} ({cut}). {stroke}.",
                kick.rail, kick.diamond
            ),
            _ if !self.cue_path.is_clear() => {
                let by = self.cue_path.blocker().map(|b| b.to_string()).unwrap_or_default();
                format!("The {by} ball blocks the cue ball and no kick reaches {ball}.")
            }
            _ => format!("Aim at the ghost ball: {ball} goes into {pocket}, {cut}. {stroke}."),
        }
    }
}

fn pocket_phrase(pocket: PocketId) -> &'static str {
    match pocket {
        PocketId::TopLeft => "the top-left corner",
        PocketId::TopRight => "the top-right corner",
        PocketId::MiddleLeft => "the top side pocket",
        PocketId::MiddleRight => "the bottom side pocket",
        PocketId::BottomLeft => "the bottom-left corner",
        PocketId::BottomRight => "the bottom-right corner",
    }
}
