pub mod ball;
pub mod ball_set;
pub mod pocket;
pub mod rack;
pub mod rail;
pub mod table;

pub use ball::{Ball, BallId, MAX_OBJECT_BALL};
pub use ball_set::BallSet;
pub use pocket::{Pocket, PocketId};
pub use rack::{rack_positions, RackKind};
pub use rail::{Rail, RailGeometry};
pub use table::Table;
