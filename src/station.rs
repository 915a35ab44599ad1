use crate::error::{Error, Result};
use crate::floor_plan::FloorPlan;
use crate::geometry::Point;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::Deserialize;
use std::io;

#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub id: String,
    pub position: Point,
}

impl Station {
    pub fn new(id: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

#[derive(Deserialize)]
struct StationRow {
    id: String,
    x: f64,
    y: f64,
}

/// Reads `id,x,y` rows.
pub fn read_stations<R: io::Read>(reader: R) -> Result<Vec<Station>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut stations = Vec::new();
    for row in rdr.deserialize() {
        let row: StationRow = row?;
        let position = Point::new(row.x, row.y);
        if !position.is_finite() {
            return Err(Error::NonFiniteCoordinate {
                what: format!("station {}", row.id),
                x: row.x,
                y: row.y,
            });
        }
        stations.push(Station::new(row.id, position));
    }
    Ok(stations)
}

/// Places `count` stations uniformly inside the bounding box of the floor
/// plan's walls. A plan without walls has no extent to place them in.
pub fn random_stations<R: Rng>(count: usize, floor_plan: &FloorPlan, rng: &mut R) -> Result<Vec<Station>> {
    let (min, max) = floor_plan.bounds().ok_or(Error::EmptyFloorPlan)?;
    let x = Uniform::new_inclusive(min.x, max.x);
    let y = Uniform::new_inclusive(min.y, max.y);
    Ok((0..count)
        .map(|i| {
            let position = Point::new(x.sample(rng), y.sample(rng));
            Station::new(format!("sta{}", i), position)
        })
        .collect())
}
