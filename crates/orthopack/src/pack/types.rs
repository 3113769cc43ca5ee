//! Configuration, results and errors of the packing engine.

use std::fmt;
use std::str::FromStr;

use nalgebra::{vector, Vector2};

use crate::vlist::VList;

/// Candidate selection rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// Stop at the first boundary vertex that yields a valid placement.
    #[default]
    First,
    /// Keep scanning (subject to the distance bound) for the closest placement.
    Best,
}

/// Distance used to rank boundary vertices and candidate centers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    #[default]
    Euclidean,
    Chessboard,
    Manhattan,
}

impl Metric {
    #[inline]
    pub fn distance(self, p: Vector2<f64>, q: Vector2<f64>) -> f64 {
        let d = p - q;
        match self {
            Metric::Euclidean => d.norm(),
            Metric::Chessboard => d.x.abs().max(d.y.abs()),
            Metric::Manhattan => d.x.abs() + d.y.abs(),
        }
    }
}

/// Failed parse of a `Heuristic` or `Metric` name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for ParseOptionError {}

impl FromStr for Heuristic {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Heuristic::First),
            "best" => Ok(Heuristic::Best),
            _ => Err(ParseOptionError {
                kind: "heuristic",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Heuristic::First => "first",
            Heuristic::Best => "best",
        })
    }
}

impl FromStr for Metric {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(Metric::Euclidean),
            "chessboard" => Ok(Metric::Chessboard),
            "manhattan" => Ok(Metric::Manhattan),
            _ => Err(ParseOptionError {
                kind: "metric",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Metric::Euclidean => "euclidean",
            Metric::Chessboard => "chessboard",
            Metric::Manhattan => "manhattan",
        })
    }
}

/// Packing configuration.
///
/// The union region is closed after every `close_frequency`-th placement with
/// radius `close_factor * half_diagonal` of the rectangle just placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackCfg {
    pub heuristic: Heuristic,
    pub metric: Metric,
    pub close_frequency: usize,
    pub close_factor: f64,
}

impl Default for PackCfg {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::First,
            metric: Metric::Euclidean,
            close_frequency: 1,
            close_factor: 0.5,
        }
    }
}

impl PackCfg {
    pub fn validate(&self) -> Result<(), PackError> {
        if self.close_frequency == 0 {
            return Err(PackError::invalid_config("close_frequency must be >= 1"));
        }
        if !(self.close_factor.is_finite() && self.close_factor > 0.0) {
            return Err(PackError::invalid_config(
                "close_factor must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// A placed rectangle, stored by its two corners so that every test sees the
/// same coordinates that were checked during placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedRect {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl PlacedRect {
    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y);
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn sides(&self) -> Vector2<f64> {
        vector![self.width(), self.height()]
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Strict interior overlap; rectangles sharing an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &PlacedRect) -> bool {
        crate::index::boxes_overlap(self.min, self.max, other.min, other.max)
    }

    /// The rectangle as a 4-vertex region with exactly these corners.
    pub fn as_vlist(&self) -> VList {
        VList::boxed(&[self.min.x, self.min.y], &[self.max.x, self.max.y])
    }
}

/// Errors reported by `RectArrangement`.
#[derive(Clone, Debug, PartialEq)]
pub enum PackError {
    InvalidConfig { reason: String },
    InvalidSize { area: f64, aspect: f64 },
    NoPlacement { area: f64, aspect: f64 },
}

impl PackError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid packing config: {reason}"),
            Self::InvalidSize { area, aspect } => {
                write!(f, "invalid rectangle size: area={area}, aspect={aspect}")
            }
            Self::NoPlacement { area, aspect } => write!(
                f,
                "could not find a place for rect (area={area}, aspect={aspect})"
            ),
        }
    }
}

impl std::error::Error for PackError {}
