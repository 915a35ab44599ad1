/*
Multi-wall path loss:
L = A + B * log10(d / d0) + 20 * log10(f_ref / 5 GHz) + sum(L_wall)

(A, B) is the line-of-sight pair when the direct path crosses no wall and
the obstructed pair otherwise. L_wall is the attenuation of each wall the
direct path crosses.
*/

use crate::calibration::{CalibrationCoefficients, Regime};
use crate::floor_plan::FloorPlan;
use crate::geometry::{intersects, Point};

/// Frequency the calibration is normalized against. This is a property of
/// the fitted coefficients and is not the frequency of the channel in use.
pub const FIXED_REFERENCE_FREQUENCY_GHZ: f64 = 5.0;

/// Below this distance no loss is applied at all.
pub const NEAR_FIELD_M: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PathLossResult {
    pub distance_m: f64,
    /// Indices into the floor plan, in floor-plan order.
    pub intersected_walls: Vec<usize>,
    pub regime: Regime,
    pub loss_db: f64,
}

impl PathLossResult {
    pub fn wall_count(&self) -> usize {
        self.intersected_walls.len()
    }
}

pub fn frequency_term_db(calibration: &CalibrationCoefficients) -> f64 {
    20.0 * (calibration.reference_frequency_ghz / FIXED_REFERENCE_FREQUENCY_GHZ).log10()
}

/// Path loss between `tx` and `rx`. Symmetric in its two points.
pub fn path_loss(
    tx: &Point,
    rx: &Point,
    floor_plan: &FloorPlan,
    calibration: &CalibrationCoefficients,
) -> PathLossResult {
    let distance_m = tx.distance(rx);
    if distance_m <= NEAR_FIELD_M {
        return PathLossResult {
            distance_m,
            intersected_walls: Vec::new(),
            regime: Regime::LineOfSight,
            loss_db: 0.0,
        };
    }

    let mut intersected_walls = Vec::new();
    let mut wall_loss_db = 0.0;
    for (index, wall) in floor_plan.walls().iter().enumerate() {
        if intersects(tx, rx, &wall.start, &wall.end) {
            intersected_walls.push(index);
            wall_loss_db += wall.attenuation_db;
        }
    }

    let regime = if intersected_walls.is_empty() {
        Regime::LineOfSight
    } else {
        Regime::Obstructed
    };
    let law = calibration.law(regime);
    let base_loss_db = law.a
        + law.b * (distance_m / calibration.reference_distance_m).log10()
        + frequency_term_db(calibration);

    PathLossResult {
        distance_m,
        intersected_walls,
        regime,
        loss_db: base_loss_db + wall_loss_db,
    }
}
