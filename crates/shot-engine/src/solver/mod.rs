pub mod classifier;
pub mod cut_angle;
pub mod ghost;
pub mod kick;
pub mod obstruction;
pub mod power;

pub use classifier::{Approach, Classification, Classifier, ShotFeatures, Verdict};
pub use cut_angle::{cut_angle, cut_side, CutAngle, CutSide, UNMAKEABLE_CUT_DEG};
pub use ghost::{contact_point, ghost_ball};
pub use kick::{best_kick, best_kick_by, solve_kick, KickRequest, KickSolution};
pub use obstruction::{check_path, PathCheck};
pub use power::recommended_power;
