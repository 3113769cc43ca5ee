//! Seeded generators for rectangle sizes and random orthogonal regions.
//!
//! Purpose
//! - Reproducible `(area, aspect)` streams for the CLI and benchmarks.
//! - Small random unions of grid-aligned boxes for tests.
//!
//! Determinism: the same `(cfg, seed, count)` always yields the same sizes.

use std::fmt;

use nalgebra::vector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::vlist::VList;

/// Error type shared by the generators.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Ranges for sampled rectangle sizes. Aspect is sampled log-uniformly so that
/// `a` and `1/a` are equally likely when the range is symmetric.
#[derive(Clone, Copy, Debug)]
pub struct SizeCfg {
    pub area_min: f64,
    pub area_max: f64,
    pub aspect_min: f64,
    pub aspect_max: f64,
}

impl Default for SizeCfg {
    fn default() -> Self {
        Self {
            area_min: 10.0,
            area_max: 400.0,
            aspect_min: 0.5,
            aspect_max: 2.0,
        }
    }
}

impl SizeCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        let all = [self.area_min, self.area_max, self.aspect_min, self.aspect_max];
        if !all.iter().all(|x| x.is_finite()) {
            return Err(GeneratorError::invalid("size bounds must be finite"));
        }
        if self.area_min <= 0.0 || self.aspect_min <= 0.0 {
            return Err(GeneratorError::invalid("area_min and aspect_min must be > 0"));
        }
        if self.area_min > self.area_max {
            return Err(GeneratorError::invalid("area_min <= area_max required"));
        }
        if self.aspect_min > self.aspect_max {
            return Err(GeneratorError::invalid("aspect_min <= aspect_max required"));
        }
        Ok(())
    }
}

/// Draw `count` `(area, aspect)` pairs.
pub fn draw_sizes(
    cfg: SizeCfg,
    seed: u64,
    count: usize,
) -> Result<Vec<(f64, f64)>, GeneratorError> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let (lo, hi) = (cfg.aspect_min.ln(), cfg.aspect_max.ln());
    Ok((0..count)
        .map(|_| {
            let area = sample_closed(&mut rng, cfg.area_min, cfg.area_max);
            let aspect = sample_closed(&mut rng, lo, hi).exp();
            (area, aspect)
        })
        .collect())
}

fn sample_closed<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

/// `count` boxes with integer corners in `[0, grid]^2` and sides in `1..=3`.
pub fn random_boxes<R: Rng>(rng: &mut R, count: usize, grid: i32) -> Vec<VList> {
    let grid = grid.max(1);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0..grid) as f64;
            let y = rng.gen_range(0..grid) as f64;
            let w = rng.gen_range(1..=3) as f64;
            let h = rng.gen_range(1..=3) as f64;
            VList::rectangle(vector![x, y], vector![w, h])
        })
        .collect()
}

/// Union of `random_boxes(rng, count, grid)`.
pub fn random_region<R: Rng>(rng: &mut R, count: usize, grid: i32) -> VList {
    random_boxes(rng, count, grid)
        .iter()
        .fold(VList::new(), |acc, b| acc.union(b))
}
