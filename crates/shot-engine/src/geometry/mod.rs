//! Pure 2D primitives over `glam::DVec2`. No table knowledge lives here:
//! solvers combine these with the table model.

pub mod line;
pub mod segment;
pub mod vector;

pub use line::{Axis, AxisLine};
pub use segment::{CorridorHit, Segment};
pub use vector::{angle_between_deg, approx_eq, cross, direction, point_on_circle, EPSILON};
