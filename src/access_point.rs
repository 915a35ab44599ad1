use crate::calibration::CalibrationCoefficients;
use crate::channel::Channel;
use crate::error::{Error, Result};
use crate::floor_plan::FloorPlan;
use crate::geometry::Point;
use crate::path_loss::{path_loss, PathLossResult};
use crate::station::Station;
use serde::Deserialize;
use std::io;

#[derive(Clone, Debug, PartialEq)]
pub struct AccessPoint {
    pub id: String,
    pub position: Point,
    pub channel: Channel,
}

#[derive(Deserialize)]
struct AccessPointRow {
    id: String,
    x: f64,
    y: f64,
    channel: u16,
    ssid: String,
}

/// Reads `id,x,y,channel,ssid` rows. Declaration order is kept because it
/// decides ties in [`assign_station`].
pub fn read_access_points<R: io::Read>(reader: R) -> Result<Vec<AccessPoint>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut access_points = Vec::new();
    for row in rdr.deserialize() {
        let row: AccessPointRow = row?;
        let position = Point::new(row.x, row.y);
        if !position.is_finite() {
            return Err(Error::NonFiniteCoordinate {
                what: format!("access point {}", row.id),
                x: row.x,
                y: row.y,
            });
        }
        access_points.push(AccessPoint {
            id: row.id,
            position,
            channel: Channel::new(row.channel, row.ssid),
        });
    }
    Ok(access_points)
}

/// Finds the candidate with the lowest path loss to `station`, returning its
/// index in `candidates` with the winning result. On equal loss the
/// candidate declared first wins.
pub fn best_candidate(
    station: &Station,
    candidates: &[AccessPoint],
    floor_plan: &FloorPlan,
    calibration: &CalibrationCoefficients,
) -> Result<(usize, PathLossResult)> {
    let mut best: Option<(usize, PathLossResult)> = None;
    for (index, ap) in candidates.iter().enumerate() {
        let result = path_loss(&ap.position, &station.position, floor_plan, calibration);
        let better = match &best {
            Some((_, current)) => result.loss_db < current.loss_db,
            None => true,
        };
        if better {
            best = Some((index, result));
        }
    }
    best.ok_or_else(|| Error::NoAccessPoints(station.id.clone()))
}

/// Picks the access point `station` should associate with.
pub fn assign_station<'a>(
    station: &Station,
    candidates: &'a [AccessPoint],
    floor_plan: &FloorPlan,
    calibration: &CalibrationCoefficients,
) -> Result<&'a AccessPoint> {
    let (index, _) = best_candidate(station, candidates, floor_plan, calibration)?;
    Ok(&candidates[index])
}
