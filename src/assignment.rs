use crate::access_point::{best_candidate, AccessPoint};
use crate::calibration::CalibrationCoefficients;
use crate::channel::Channel;
use crate::error::Result;
use crate::floor_plan::FloorPlan;
use crate::path_loss::{path_loss, PathLossResult};
use crate::station::Station;
use serde::Serialize;
use tracing::debug;

/// The decision for one station.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub station: String,
    pub access_point: String,
    pub channel: Channel,
    pub result: PathLossResult,
}

/// Station to access point decisions, in station order. Built once per
/// topology and not modified afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignmentTable {
    assignments: Vec<Assignment>,
}

#[derive(Serialize)]
pub struct AssignmentRow<'a> {
    station: &'a str,
    #[serde(rename = "ap")]
    access_point: &'a str,
    channel: u16,
    ssid: &'a str,
    loss_db: f64,
    walls: usize,
}

impl AssignmentTable {
    /// Assigns every station, failing on the first station that cannot be
    /// assigned.
    pub fn build(
        stations: &[Station],
        access_points: &[AccessPoint],
        floor_plan: &FloorPlan,
        calibration: &CalibrationCoefficients,
    ) -> Result<Self> {
        let mut assignments = Vec::with_capacity(stations.len());
        for station in stations {
            let (index, result) = best_candidate(station, access_points, floor_plan, calibration)?;
            let ap = &access_points[index];
            debug!(
                station = %station.id,
                access_point = %ap.id,
                channel = ap.channel.number,
                loss_db = result.loss_db,
                walls = result.wall_count(),
                "station assigned"
            );
            assignments.push(Assignment {
                station: station.id.clone(),
                access_point: ap.id.clone(),
                channel: ap.channel.clone(),
                result,
            });
        }
        Ok(Self { assignments })
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn get(&self, station: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.station == station)
    }

    /// Number of stations per access point, in `access_points` order.
    pub fn load<'a>(&self, access_points: &'a [AccessPoint]) -> Vec<(&'a str, usize)> {
        access_points
            .iter()
            .map(|ap| {
                let count = self
                    .assignments
                    .iter()
                    .filter(|a| a.access_point == ap.id)
                    .count();
                (ap.id.as_str(), count)
            })
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = AssignmentRow<'_>> {
        self.assignments.iter().map(|a| AssignmentRow {
            station: &a.station,
            access_point: &a.access_point,
            channel: a.channel.number,
            ssid: &a.channel.ssid,
            loss_db: a.result.loss_db,
            walls: a.result.wall_count(),
        })
    }
}

/// Path loss from every access point to every station.
#[derive(Clone, Debug, PartialEq)]
pub struct PathLossMatrix {
    station_ids: Vec<String>,
    access_point_ids: Vec<String>,
    /// `results[station][access_point]`
    results: Vec<Vec<PathLossResult>>,
}

#[derive(Serialize)]
pub struct MatrixRow<'a> {
    station: &'a str,
    #[serde(rename = "ap")]
    access_point: &'a str,
    distance_m: f64,
    walls: String,
    loss_db: f64,
    regime: &'static str,
}

impl PathLossMatrix {
    pub fn compute(
        stations: &[Station],
        access_points: &[AccessPoint],
        floor_plan: &FloorPlan,
        calibration: &CalibrationCoefficients,
    ) -> Self {
        let results = stations
            .iter()
            .map(|station| {
                access_points
                    .iter()
                    .map(|ap| path_loss(&ap.position, &station.position, floor_plan, calibration))
                    .collect()
            })
            .collect();
        Self {
            station_ids: stations.iter().map(|s| s.id.clone()).collect(),
            access_point_ids: access_points.iter().map(|ap| ap.id.clone()).collect(),
            results,
        }
    }

    pub fn get(&self, station: usize, access_point: usize) -> Option<&PathLossResult> {
        self.results.get(station)?.get(access_point)
    }

    /// One row per (station, access point) pair; intersected wall indices
    /// are joined with `;`.
    pub fn rows(&self) -> impl Iterator<Item = MatrixRow<'_>> {
        let access_point_ids = &self.access_point_ids;
        self.station_ids
            .iter()
            .zip(&self.results)
            .flat_map(move |(station, row)| {
                access_point_ids.iter().zip(row).map(move |(ap, result)| MatrixRow {
                    station,
                    access_point: ap,
                    distance_m: result.distance_m,
                    walls: result
                        .intersected_walls
                        .iter()
                        .map(|w| w.to_string())
                        .collect::<Vec<_>>()
                        .join(";"),
                    loss_db: result.loss_db,
                    regime: result.regime.as_str(),
                })
            })
    }
}
