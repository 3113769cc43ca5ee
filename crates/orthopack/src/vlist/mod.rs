//! Vertex lists: orthogonal regions in R^n as sorted sums of weighted cones.
//!
//! Purpose
//! - Represent unions of axis-aligned boxes (and more generally integer-valued
//!   orthogonal fields) by the vertices where the field changes.
//! - Provide the additive algebra (`add`, `scale`), the recursive `transform`
//!   used for Boolean operations, and the decomposition into boxes.
//!
//! Invariants
//! - Vertices are sorted in scanline order (`Vertex::cmp_scanline`).
//! - No two vertices share a position and no weight is zero (within
//!   `cfg::WEIGHT_EPS`). Every constructor and operation restores both.
//! - All vertices of a non-empty list have the same dimension.
//!
//! Layout
//! - `mod.rs`: container, constructors, slab iteration, `add`/`scale`.
//! - `field.rs`: field evaluation, `transform`, Boolean operations.
//! - `rects.rs`: box decomposition, faces, measure, bounding box.

mod field;
mod rects;

use nalgebra::Vector2;

use crate::cfg::is_zero_weight;
use crate::vertex::Vertex;

/// Sorted, normalized list of vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VList {
    v: Vec<Vertex>,
}

impl VList {
    /// Empty list (the empty region of any dimension).
    #[inline]
    pub fn new() -> Self {
        Self { v: Vec::new() }
    }

    /// Sort in scanline order and merge coincident vertices.
    pub fn from_vertices(mut vertices: Vec<Vertex>) -> Self {
        vertices.sort_by(|a, b| a.cmp_scanline(b));
        Self {
            v: merge_sorted(vertices),
        }
    }

    /// Wrap a list that is already sorted and normalized.
    pub(crate) fn from_sorted(v: Vec<Vertex>) -> Self {
        debug_assert!(
            v.windows(2).all(|w| w[0].cmp_scanline(&w[1]).is_lt()),
            "vertex list out of scanline order"
        );
        Self { v }
    }

    /// 2D box with minimum corner `min` and side lengths `sides`.
    pub fn rectangle(min: Vector2<f64>, sides: Vector2<f64>) -> Self {
        let (x, y) = (min.x, min.y);
        let (sx, sy) = (sides.x, sides.y);
        Self::from_vertices(vec![
            Vertex::new(1.0, vec![x, y]),
            Vertex::new(-1.0, vec![x + sx, y]),
            Vertex::new(-1.0, vec![x, y + sy]),
            Vertex::new(1.0, vec![x + sx, y + sy]),
        ])
    }

    /// n-dimensional box `[min, max)`; corner weights alternate with the
    /// number of coordinates taken from `max`.
    pub fn boxed(min: &[f64], max: &[f64]) -> Self {
        assert_eq!(min.len(), max.len(), "box corners of different dimension");
        let n = min.len();
        let corners = (0..1usize << n)
            .map(|mask| {
                let p: Vec<f64> = (0..n)
                    .map(|i| if (mask >> i) & 1 == 1 { max[i] } else { min[i] })
                    .collect();
                let w = if mask.count_ones() % 2 == 0 { 1.0 } else { -1.0 };
                Vertex::new(w, p)
            })
            .collect();
        Self::from_vertices(corners)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    /// Dimension of the vertices, `None` for the empty list.
    #[inline]
    pub fn dim(&self) -> Option<usize> {
        self.v.first().map(Vertex::dim)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.v.iter()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.v
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.v
    }

    /// Re-merge coincident vertices and drop zero weights.
    pub fn normalize(&mut self) {
        let v = std::mem::take(&mut self.v);
        self.v = merge_sorted(v);
    }

    /// Copy with every vertex rotated by `Vertex::rot_axes_forward`, re-sorted.
    pub fn rot_axes_forward(&self) -> VList {
        let mut v = self.v.clone();
        for x in &mut v {
            x.rot_axes_forward();
        }
        Self::from_vertices(v)
    }

    /// Copy with every vertex rotated by `Vertex::rot_axes_backward`, re-sorted.
    pub fn rot_axes_backward(&self) -> VList {
        let mut v = self.v.clone();
        for x in &mut v {
            x.rot_axes_backward();
        }
        Self::from_vertices(v)
    }

    /// Number of leading vertices sharing the first vertex's last coordinate.
    /// Panics on a non-empty 0-dimensional list, which has no slabs.
    pub fn prefix_len(&self) -> usize {
        match self.v.first() {
            None => 0,
            Some(first) => {
                let c = first.last_coord();
                self.v.iter().take_while(|x| x.last_coord() == c).count()
            }
        }
    }

    /// Leading slab (vertices with the smallest last coordinate).
    pub fn prefix(&self) -> VList {
        Self::from_sorted(self.v[..self.prefix_len()].to_vec())
    }

    /// Everything after the leading slab.
    pub fn remainder(&self) -> VList {
        Self::from_sorted(self.v[self.prefix_len()..].to_vec())
    }

    /// `(prefix, remainder)` in one pass.
    pub fn split(&self) -> (VList, VList) {
        let (a, b) = self.v.split_at(self.prefix_len());
        (Self::from_sorted(a.to_vec()), Self::from_sorted(b.to_vec()))
    }

    /// Iterate slabs front to back; each slab is a maximal run sharing the last
    /// coordinate. Requires dimension >= 1.
    pub(crate) fn slabs(&self) -> impl Iterator<Item = &[Vertex]> {
        self.v.chunk_by(|a, b| a.last_coord() == b.last_coord())
    }

    /// Drop the last coordinate of every vertex; coincident results are summed.
    pub fn project(&self) -> VList {
        Self::from_vertices(self.v.iter().map(Vertex::project).collect())
    }

    /// Append coordinate `h` to every vertex.
    pub fn unproject(&self, h: f64) -> VList {
        Self::from_sorted(self.v.iter().map(|x| x.unproject(h)).collect())
    }

    /// Sum of two fields (sorted merge; tied positions add their weights).
    pub fn add(&self, other: &VList) -> VList {
        let (a, b) = (&self.v, &other.v);
        let mut out = Vec::with_capacity(a.len() + b.len());
        let mut i = 0usize;
        let mut j = 0usize;
        while i < a.len() && j < b.len() {
            match a[i].cmp_scanline(&b[j]) {
                std::cmp::Ordering::Less => {
                    out.push(a[i].clone());
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    out.push(b[j].clone());
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    let w = a[i].w + b[j].w;
                    if !is_zero_weight(w) {
                        out.push(Vertex::new(w, a[i].p.clone()));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        out.extend_from_slice(&a[i..]);
        out.extend_from_slice(&b[j..]);
        Self::from_sorted(out)
    }

    /// Multiply every weight by `scalar` (non-zero).
    pub fn scale(&self, scalar: f64) -> VList {
        Self::from_sorted(self.v.iter().map(|x| x.scale(scalar)).collect())
    }

    /// Negated field, `scale(-1)`.
    #[inline]
    pub fn neg(&self) -> VList {
        self.scale(-1.0)
    }

    /// Translate all vertices by `u` (in place; order is unchanged).
    pub fn translate(&mut self, u: &[f64]) -> &mut Self {
        for x in &mut self.v {
            x.translate(u);
        }
        self
    }
}

impl<'a> IntoIterator for &'a VList {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.v.iter()
    }
}

/// Sorted slab projected one dimension down. Projection keeps the order
/// because every vertex of a slab shares its last coordinate.
pub(crate) fn project_slab(slab: &[Vertex]) -> VList {
    VList::from_sorted(slab.iter().map(Vertex::project).collect())
}

/// Merge equal neighbours of a sorted vector, dropping zero weights.
fn merge_sorted(sorted: Vec<Vertex>) -> Vec<Vertex> {
    let mut out: Vec<Vertex> = Vec::with_capacity(sorted.len());
    let mut it = sorted.into_iter();
    let Some(mut cur) = it.next() else {
        return out;
    };
    for next in it {
        if cur.cmp_scanline(&next).is_eq() {
            cur.w += next.w;
        } else {
            if !is_zero_weight(cur.w) {
                out.push(cur);
            }
            cur = next;
        }
    }
    if !is_zero_weight(cur.w) {
        out.push(cur);
    }
    out
}

#[cfg(test)]
mod tests;
