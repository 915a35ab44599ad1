use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a topology from being evaluated.
///
/// All of these are configuration problems: the computation itself is
/// deterministic, so retrying with the same inputs fails the same way.
#[derive(Error, Debug)]
pub enum Error {
    #[error("wall {index} is degenerate: both endpoints are ({x}, {y})")]
    DegenerateWall { index: usize, x: f64, y: f64 },

    #[error("calibration data has {found} coefficients, at least {expected} required")]
    CalibrationTooShort { expected: usize, found: usize },

    #[error("calibration token {index} ({token:?}) is not a number")]
    InvalidCalibrationToken { index: usize, token: String },

    #[error("floor plan has {walls} walls but calibration provides {coefficients} wall coefficients")]
    WallCountMismatch { walls: usize, coefficients: usize },

    #[error("no attenuation for {walls} walls: calibration has no wall coefficients and no default was given")]
    MissingWallAttenuation { walls: usize },

    #[error("attenuation {value} dB for wall {index} must be finite and non-negative")]
    InvalidAttenuation { index: usize, value: f64 },

    #[error("calibration coefficient {name} = {value} is not usable")]
    InvalidCoefficient { name: &'static str, value: f64 },

    #[error("{what} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { what: String, x: f64, y: f64 },

    #[error("cannot place stations: the floor plan has no walls to bound it")]
    EmptyFloorPlan,

    #[error("no candidate access points to assign station {0} to")]
    NoAccessPoints(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
