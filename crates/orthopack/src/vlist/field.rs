//! Field evaluation and the recursive `transform` behind Boolean operations.
//!
//! `transform(f)` rebuilds the list so that the field value `v` at every point
//! becomes `f(v)`. The n-D case walks slabs and keeps two (n-1)-D profiles:
//! the raw running cross-section and its transformed image. Each slab emits
//! the difference between consecutive transformed profiles.

use super::{project_slab, VList};
use crate::cfg::{is_zero_weight, WEIGHT_EPS};
use crate::vertex::Vertex;

impl VList {
    /// Field value at `q`: sum of the weights of all vertices dominating `q`.
    ///
    /// Linear scan; meant for checks, not for hot loops.
    pub fn value(&self, q: &[f64]) -> f64 {
        self.v
            .iter()
            .filter(|x| x.dominates(q))
            .map(|x| x.w)
            .sum()
    }

    /// Thresholded membership of `q`.
    #[inline]
    pub fn contains(&self, q: &[f64]) -> bool {
        self.value(q) > WEIGHT_EPS
    }

    /// Apply `f` to the field value at every point. `f(0)` must be `0`.
    pub fn transform<F: Fn(f64) -> f64>(&self, f: F) -> VList {
        self.transform_with(&f)
    }

    fn transform_with<F: Fn(f64) -> f64>(&self, f: &F) -> VList {
        let Some(dim) = self.dim() else {
            return VList::new();
        };
        if dim == 0 {
            // normalized 0-D lists hold at most one vertex
            let w = f(self.v.iter().map(|x| x.w).sum());
            return if is_zero_weight(w) {
                VList::new()
            } else {
                VList::from_sorted(vec![Vertex::new(w, Vec::new())])
            };
        }
        let mut out = Vec::new();
        let mut acc = VList::new();
        let mut prev = VList::new();
        for slab in self.slabs() {
            let coord = slab[0].last_coord();
            acc = acc.add(&project_slab(slab));
            let cur = acc.transform_with(f);
            let delta = cur.add(&prev.neg());
            out.extend(delta.v.iter().map(|x| x.unproject(coord)));
            prev = cur;
        }
        VList::from_sorted(out)
    }

    /// Indicator of the set where the field is positive.
    pub fn threshold(&self) -> VList {
        self.transform(indicator)
    }

    /// Boolean union of two regions.
    pub fn union(&self, other: &VList) -> VList {
        self.add(other).threshold()
    }

    /// Boolean intersection of two regions (both indicators present).
    pub fn intersection(&self, other: &VList) -> VList {
        self.add(other)
            .transform(|w| if w > 1.0 + WEIGHT_EPS { 1.0 } else { 0.0 })
    }

    /// Points of `self` not in `other`.
    pub fn difference(&self, other: &VList) -> VList {
        self.add(&other.neg()).threshold()
    }
}

#[inline]
fn indicator(w: f64) -> f64 {
    if w > WEIGHT_EPS {
        1.0
    } else {
        0.0
    }
}
