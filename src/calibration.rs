use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Number of leading tokens in a calibration file holding the distance law.
pub const LAW_COEFFICIENTS: usize = 4;

/// Reference distance of the log-distance law, in meters.
pub const REFERENCE_DISTANCE_M: f64 = 1.0;

/// Which branch of the dual-regime law a path falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
    LineOfSight,
    Obstructed,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::LineOfSight => "los",
            Regime::Obstructed => "nlos",
        }
    }
}

/// Coefficients of one regime: `loss = a + b * log10(d / d0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LawCoefficients {
    pub a: f64,
    pub b: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalibrationCoefficients {
    pub line_of_sight: LawCoefficients,
    pub obstructed: LawCoefficients,
    pub reference_distance_m: f64,
    pub reference_frequency_ghz: f64,
    /// Per-wall attenuation in dB, in floor-plan order. Empty when the
    /// calibration only fits the distance law.
    pub wall_attenuation_db: Vec<f64>,
}

impl CalibrationCoefficients {
    pub fn new(a1: f64, b1: f64, a2: f64, b2: f64, reference_frequency_ghz: f64) -> Self {
        Self {
            line_of_sight: LawCoefficients { a: a1, b: b1 },
            obstructed: LawCoefficients { a: a2, b: b2 },
            reference_distance_m: REFERENCE_DISTANCE_M,
            reference_frequency_ghz,
            wall_attenuation_db: Vec::new(),
        }
    }

    pub fn with_wall_attenuation(mut self, wall_attenuation_db: Vec<f64>) -> Self {
        self.wall_attenuation_db = wall_attenuation_db;
        self
    }

    pub fn load<P: AsRef<Path>>(path: P, reference_frequency_ghz: f64) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, reference_frequency_ghz)
    }

    /// Parses a whitespace separated token stream: `A1 B1 A2 B2` followed by
    /// one attenuation per wall.
    pub fn parse(content: &str, reference_frequency_ghz: f64) -> Result<Self> {
        let values = content
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<f64>().map_err(|_| Error::InvalidCalibrationToken {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if values.len() < LAW_COEFFICIENTS {
            return Err(Error::CalibrationTooShort {
                expected: LAW_COEFFICIENTS,
                found: values.len(),
            });
        }

        let calibration = Self::new(values[0], values[1], values[2], values[3], reference_frequency_ghz)
            .with_wall_attenuation(values[LAW_COEFFICIENTS..].to_vec());
        calibration.validate()?;
        Ok(calibration)
    }

    /// Rejects coefficients that would turn every loss into NaN or infinity.
    /// Wall attenuation is checked when it is bound to a floor plan.
    pub fn validate(&self) -> Result<()> {
        let law = [
            ("A1", self.line_of_sight.a),
            ("B1", self.line_of_sight.b),
            ("A2", self.obstructed.a),
            ("B2", self.obstructed.b),
        ];
        for &(name, value) in &law {
            if !value.is_finite() {
                return Err(Error::InvalidCoefficient { name, value });
            }
        }
        for &(name, value) in &[
            ("reference distance", self.reference_distance_m),
            ("reference frequency", self.reference_frequency_ghz),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidCoefficient { name, value });
            }
        }
        Ok(())
    }

    pub fn law(&self, regime: Regime) -> LawCoefficients {
        match regime {
            Regime::LineOfSight => self.line_of_sight,
            Regime::Obstructed => self.obstructed,
        }
    }

    /// Resolves one attenuation value per wall.
    ///
    /// Per-wall coefficients take precedence and must match `walls` exactly;
    /// the flat `default_db` is only used when the calibration carries none.
    pub fn resolve_wall_attenuation(&self, walls: usize, default_db: Option<f64>) -> Result<Vec<f64>> {
        let resolved = if !self.wall_attenuation_db.is_empty() {
            if self.wall_attenuation_db.len() != walls {
                return Err(Error::WallCountMismatch {
                    walls,
                    coefficients: self.wall_attenuation_db.len(),
                });
            }
            self.wall_attenuation_db.clone()
        } else if walls == 0 {
            Vec::new()
        } else {
            match default_db {
                Some(db) => vec![db; walls],
                None => return Err(Error::MissingWallAttenuation { walls }),
            }
        };

        for (index, &value) in resolved.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidAttenuation { index, value });
            }
        }
        Ok(resolved)
    }
}
