use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::ShotError;
use crate::geometry::EPSILON;

/// Highest numbered object ball.
pub const MAX_OBJECT_BALL: u8 = 15;

/// Ball identity: the cue ball or object balls 1-15.
///
/// Serializes as `"cue"` or as the bare ball number, matching the ids the
/// UI uses in its DOM (`#ball-cue`, `#ball-9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "BallKey", into = "BallKey")]
pub enum BallId {
    Cue,
    Object(u8),
}

impl BallId {
    /// Object ball by number, validated to 1-15.
    pub fn object(number: u8) -> Result<Self, ShotError> {
        if (1..=MAX_OBJECT_BALL).contains(&number) {
            Ok(BallId::Object(number))
        } else {
            Err(ShotError::NoSuchBall(number.to_string()))
        }
    }

    pub fn is_cue(self) -> bool {
        matches!(self, BallId::Cue)
    }

    /// Number painted on the ball; 0 for the cue ball.
    pub fn number(self) -> u8 {
        match self {
            BallId::Cue => 0,
            BallId::Object(n) => n,
        }
    }
}

impl fmt::Display for BallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BallId::Cue => f.write_str("cue"),
            BallId::Object(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for BallId {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_prefix("ball-").unwrap_or(&key);
        if key == "cue" {
            return Ok(BallId::Cue);
        }
        key.parse::<u8>()
            .map_err(|_| ShotError::NoSuchBall(s.to_string()))
            .and_then(BallId::object)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BallKey {
    Number(u8),
    Name(String),
}

impl TryFrom<BallKey> for BallId {
    type Error = ShotError;

    fn try_from(key: BallKey) -> Result<Self, Self::Error> {
        match key {
            BallKey::Number(n) => BallId::object(n),
            BallKey::Name(name) => name.parse(),
        }
    }
}

impl From<BallId> for BallKey {
    fn from(id: BallId) -> Self {
        match id {
            BallId::Cue => BallKey::Name("cue".to_string()),
            BallId::Object(n) => BallKey::Number(n),
        }
    }
}

/// A ball resting on the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: BallId,
    pub pos: DVec2,
}

impl Ball {
    pub fn new(id: BallId, pos: DVec2) -> Self {
        Self { id, pos }
    }

    pub fn at(id: BallId, x: f64, y: f64) -> Self {
        Self::new(id, DVec2::new(x, y))
    }

    /// Whether a ball of the same radius at `pos` would intersect this one.
    /// Frozen (touching) balls do not overlap.
    pub fn overlaps(&self, pos: DVec2, radius: f64) -> bool {
        self.pos.distance(pos) < 2.0 * radius - EPSILON
    }
}
