use crate::calibration::CalibrationCoefficients;
use crate::error::{Error, Result};
use crate::geometry::Point;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct WallSegment {
    pub start: Point,
    pub end: Point,
    pub attenuation_db: f64,
}

/// One row of a floor-plan CSV file.
#[derive(Deserialize)]
struct WallRow {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Reads wall geometry (`x1,y1,x2,y2` with a header row) in file order.
pub fn read_walls<R: io::Read>(reader: R) -> Result<Vec<(Point, Point)>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut walls = Vec::new();
    for row in rdr.deserialize() {
        let row: WallRow = row?;
        walls.push((Point::new(row.x1, row.y1), Point::new(row.x2, row.y2)));
    }
    Ok(walls)
}

/// An ordered, validated set of walls. Wall indices reported in path-loss
/// results refer to this order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FloorPlan {
    walls: Vec<WallSegment>,
}

impl FloorPlan {
    pub fn new(walls: Vec<WallSegment>) -> Result<Self> {
        for (index, wall) in walls.iter().enumerate() {
            for point in &[wall.start, wall.end] {
                if !point.is_finite() {
                    return Err(Error::NonFiniteCoordinate {
                        what: format!("wall {}", index),
                        x: point.x,
                        y: point.y,
                    });
                }
            }
            if wall.start == wall.end {
                return Err(Error::DegenerateWall {
                    index,
                    x: wall.start.x,
                    y: wall.start.y,
                });
            }
            if !wall.attenuation_db.is_finite() || wall.attenuation_db < 0.0 {
                return Err(Error::InvalidAttenuation {
                    index,
                    value: wall.attenuation_db,
                });
            }
        }
        Ok(Self { walls })
    }

    /// Pairs wall geometry with the attenuation the calibration assigns to it.
    pub fn calibrated(
        geometry: Vec<(Point, Point)>,
        calibration: &CalibrationCoefficients,
        default_attenuation_db: Option<f64>,
    ) -> Result<Self> {
        calibration.validate()?;
        let attenuation = calibration.resolve_wall_attenuation(geometry.len(), default_attenuation_db)?;
        let walls = geometry
            .into_iter()
            .zip(attenuation)
            .map(|((start, end), attenuation_db)| WallSegment {
                start,
                end,
                attenuation_db,
            })
            .collect();
        Self::new(walls)
    }

    pub fn load<P: AsRef<Path>>(
        path: P,
        calibration: &CalibrationCoefficients,
        default_attenuation_db: Option<f64>,
    ) -> Result<Self> {
        let geometry = read_walls(File::open(path)?)?;
        Self::calibrated(geometry, calibration, default_attenuation_db)
    }

    pub fn walls(&self) -> &[WallSegment] {
        &self.walls
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Axis-aligned bounding box of all wall endpoints as `(min, max)`.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.walls.iter().flat_map(|w| vec![w.start, w.end]);
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}
