pub mod api;
pub mod bridge;
pub mod core;
pub mod error;
pub mod geometry;
pub mod solver;

#[cfg(any(test, feature = "test-control"))]
pub mod testing;

// Re-export key types at crate root for convenience
pub use api::config::{ClassifierPolicy, EngineConfig, KickConfig, PowerConfig, TableConfig};
pub use api::engine::ShotEngine;
pub use api::layout::TableLayout;
pub use api::types::{English, Power, Shot, ShotKind, SpinType};
pub use bridge::protocol::{OverlayFrame, OVERLAY_FLOATS, PROTOCOL_VERSION};
pub use crate::core::{Ball, BallId, BallSet, Pocket, PocketId, RackKind, Rail, Table};
pub use error::ShotError;
pub use solver::{CutAngle, CutSide, KickSolution, PathCheck, Verdict};

#[cfg(any(test, feature = "test-control"))]
pub use testing::TestControl;
