//! Decomposition of a field into weighted boxes.
//!
//! A box is returned as a `VList` of 2^n vertices: the first vertex is the
//! minimum corner and carries the box's field value, the last one is the
//! maximum corner. Boxes of one slab span `[prev_coord, coord)` along the last
//! axis; boxes are not merged across slabs.

use super::{project_slab, VList};
use crate::cfg::is_zero_weight;
use crate::vertex::Vertex;

impl VList {
    /// Boxes whose weighted sum reproduces this field.
    pub fn rectangles(&self) -> Vec<VList> {
        let mut out = Vec::new();
        let Some(dim) = self.dim() else {
            return out;
        };
        assert!(dim > 0, "0-dimensional lists have no boxes");
        if dim == 1 {
            let mut prev_w = 0.0;
            let mut prev_x = f64::NEG_INFINITY;
            for x in &self.v {
                let cur_x = x.p[0];
                if !is_zero_weight(prev_w) {
                    out.push(VList::from_sorted(vec![
                        Vertex::new(prev_w, vec![prev_x]),
                        Vertex::new(-prev_w, vec![cur_x]),
                    ]));
                }
                prev_w += x.w;
                prev_x = cur_x;
            }
            return out;
        }
        // running (n-1)-D cross-section below the current slab
        let mut profile = VList::new();
        let mut prev_coord = f64::NEG_INFINITY;
        for slab in self.slabs() {
            let coord = slab[0].last_coord();
            for face in profile.rectangles() {
                let mut rect = Vec::with_capacity(face.len() * 2);
                rect.extend(face.v.iter().map(|x| x.unproject(prev_coord)));
                rect.extend(face.v.iter().map(|x| {
                    let mut q = x.unproject(coord);
                    q.w = -q.w;
                    q
                }));
                out.push(VList::from_sorted(rect));
            }
            prev_coord = coord;
            profile = profile.add(&project_slab(slab));
        }
        out
    }

    /// Lower-dimensional boxes of each slab, lifted back to the slab
    /// coordinate. Requires dimension >= 2.
    pub fn faces(&self) -> Vec<VList> {
        let mut out = Vec::new();
        let Some(dim) = self.dim() else {
            return out;
        };
        assert!(dim > 1, "faces need at least two dimensions");
        for slab in self.slabs() {
            let coord = slab[0].last_coord();
            for rect in project_slab(slab).rectangles() {
                out.push(rect.unproject(coord));
            }
        }
        out
    }

    /// Signed volume of the field: `sum(value * box volume)`.
    pub fn measure(&self) -> f64 {
        self.rectangles()
            .iter()
            .map(|r| {
                let lo = &r.v[0];
                let hi = &r.v[r.v.len() - 1];
                let vol: f64 = lo.p.iter().zip(&hi.p).map(|(a, b)| b - a).product();
                lo.w * vol
            })
            .sum()
    }

    /// Componentwise min/max over all vertex positions.
    pub fn bounding_box(&self) -> Option<(Vec<f64>, Vec<f64>)> {
        let first = self.v.first()?;
        let mut min = first.p.clone();
        let mut max = first.p.clone();
        for x in &self.v[1..] {
            for (i, &c) in x.p.iter().enumerate() {
                if c < min[i] {
                    min[i] = c;
                }
                if c > max[i] {
                    max[i] = c;
                }
            }
        }
        Some((min, max))
    }
}
