use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::ShotError;

/// The six pockets. `MiddleLeft` is the side pocket on the top rail,
/// `MiddleRight` the one on the bottom rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PocketId {
    #[serde(rename = "TL")]
    TopLeft,
    #[serde(rename = "TR")]
    TopRight,
    #[serde(rename = "ML")]
    MiddleLeft,
    #[serde(rename = "MR")]
    MiddleRight,
    #[serde(rename = "BL")]
    BottomLeft,
    #[serde(rename = "BR")]
    BottomRight,
}

impl PocketId {
    pub const ALL: [PocketId; 6] = [
        PocketId::TopLeft,
        PocketId::TopRight,
        PocketId::MiddleLeft,
        PocketId::MiddleRight,
        PocketId::BottomLeft,
        PocketId::BottomRight,
    ];

    /// Two-letter code (`TL`, `MR`, ...).
    pub fn code(self) -> &'static str {
        match self {
            PocketId::TopLeft => "TL",
            PocketId::TopRight => "TR",
            PocketId::MiddleLeft => "ML",
            PocketId::MiddleRight => "MR",
            PocketId::BottomLeft => "BL",
            PocketId::BottomRight => "BR",
        }
    }

    /// Name used by the table diagram's pocket targets.
    pub fn target_name(self) -> &'static str {
        match self {
            PocketId::TopLeft => "corner-tl",
            PocketId::TopRight => "corner-tr",
            PocketId::MiddleLeft => "side-top",
            PocketId::MiddleRight => "side-bottom",
            PocketId::BottomLeft => "corner-bl",
            PocketId::BottomRight => "corner-br",
        }
    }

    /// Index into `PocketId::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PocketId {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let id = match key.as_str() {
            "tl" | "corner-tl" | "top-left" => PocketId::TopLeft,
            "tr" | "corner-tr" | "top-right" => PocketId::TopRight,
            "ml" | "side-top" | "middle-left" => PocketId::MiddleLeft,
            "mr" | "side-bottom" | "middle-right" => PocketId::MiddleRight,
            "bl" | "corner-bl" | "bottom-left" => PocketId::BottomLeft,
            "br" | "corner-br" | "bottom-right" => PocketId::BottomRight,
            _ => return Err(ShotError::NoSuchPocket(s.to_string())),
        };
        Ok(id)
    }
}

/// A pocket: fixed for the lifetime of the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pocket {
    pub id: PocketId,
    pub pos: DVec2,
    pub capture_radius: f64,
}

impl Pocket {
    /// Whether a ball center at `point` has dropped.
    pub fn captures(&self, point: DVec2) -> bool {
        self.pos.distance(point) <= self.capture_radius
    }
}
