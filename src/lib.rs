//! Indoor multi-wall path loss and access point assignment.
//!
//! A floor plan is a list of attenuating wall segments. The loss between two
//! points follows a log-distance law whose coefficients depend on whether the
//! direct path crosses any wall, plus the attenuation of every wall crossed.
//! Each station is then assigned to the access point with the lowest loss.

pub mod access_point;
pub mod assignment;
pub mod calibration;
pub mod channel;
pub mod error;
pub mod floor_plan;
pub mod geometry;
pub mod path_loss;
pub mod station;

pub use access_point::{assign_station, AccessPoint};
pub use assignment::{AssignmentTable, PathLossMatrix};
pub use calibration::{CalibrationCoefficients, Regime};
pub use error::{Error, Result};
pub use floor_plan::{FloorPlan, WallSegment};
pub use geometry::{intersects, Point};
pub use path_loss::{path_loss, PathLossResult};
pub use station::Station;
