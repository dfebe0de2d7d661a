use serde::{Deserialize, Serialize};

use crate::api::types::{English, Power};
use crate::core::ball::{Ball, BallId};
use crate::core::pocket::PocketId;
use crate::error::ShotError;

/// A complete, serialisable table state: balls, selections and stroke
/// settings. Missing fields fall back to an empty table.
///
/// ```json
/// { "balls": [{ "id": "cue", "pos": [20, 30] }, { "id": 1, "pos": [60, 30] }],
///   "object_ball": 1, "pocket": "TR" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    pub balls: Vec<Ball>,
    pub object_ball: Option<BallId>,
    pub pocket: Option<PocketId>,
    pub english: English,
    pub power: Power,
}

impl TableLayout {
    pub fn from_json(json: &str) -> Result<Self, ShotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ShotError> {
        Ok(serde_json::to_string(self)?)
    }
}
