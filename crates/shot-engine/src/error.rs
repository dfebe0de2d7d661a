use thiserror::Error;

use crate::core::ball::BallId;

/// Everything the engine can refuse to do.
///
/// All variants are recoverable: the UI layer turns them into a status
/// message instead of drawing a stale shot.
#[derive(Error, Debug)]
pub enum ShotError {
    /// A direction vector collapsed to zero length.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    #[error("position ({x:.3}, {y:.3}) is outside the playing surface")]
    OutOfBounds { x: f64, y: f64 },

    #[error("ball {placed} would overlap ball {with}")]
    Overlap { placed: BallId, with: BallId },

    #[error("no such ball: {0}")]
    NoSuchBall(String),

    #[error("no such pocket: {0}")]
    NoSuchPocket(String),

    #[error("no such rail: {0}")]
    NoSuchRail(String),

    #[error("no such rack: {0}")]
    NoSuchRack(String),

    #[error("the cue ball cannot be the object ball")]
    CueBallSelected,

    #[error("no valid kick: every rail path is obstructed or misses the cushion")]
    NoValidKick,

    #[error("cut angle {degrees:.1} deg is beyond the makeable limit")]
    UnmakeableAngle { degrees: f64 },

    #[error("shot is incomplete: {0}")]
    IncompleteShot(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
