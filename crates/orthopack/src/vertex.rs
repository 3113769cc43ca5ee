//! Signed weighted points of the vertex-list encoding.
//!
//! A `Vertex` with weight `w` at position `p` contributes `w` to the field at
//! every point `q` it dominates (`p[i] <= q[i]` for all axes). Regions are sums
//! of such cones; see `crate::vlist` for the list type that keeps them ordered.
//!
//! Conventions
//! - Scanline order compares the last coordinate first, then earlier ones.
//! - Dimension mismatches are caller bugs and panic.

use std::cmp::Ordering;

/// Weighted point in R^n.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub w: f64,
    pub p: Vec<f64>,
}

impl Vertex {
    #[inline]
    pub fn new(w: f64, p: Vec<f64>) -> Self {
        Self { w, p }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.p.len()
    }

    /// Coordinate along the scanline axis. Panics for 0-dimensional vertices.
    #[inline]
    pub fn last_coord(&self) -> f64 {
        match self.p.last() {
            Some(&c) => c,
            None => panic!("0-dimensional vertex has no scanline coordinate"),
        }
    }

    /// Cyclic shift: the last axis becomes the first (in place).
    pub fn rot_axes_forward(&mut self) -> &mut Self {
        if let Some(last) = self.p.pop() {
            self.p.insert(0, last);
        }
        self
    }

    /// Undoes `rot_axes_forward` (in place).
    pub fn rot_axes_backward(&mut self) -> &mut Self {
        if !self.p.is_empty() {
            let first = self.p.remove(0);
            self.p.push(first);
        }
        self
    }

    /// Scanline comparison (last axis first).
    pub fn cmp_scanline(&self, other: &Vertex) -> Ordering {
        assert_eq!(
            self.dim(),
            other.dim(),
            "scanline comparison between vertices of different dimension"
        );
        for (a, b) in self.p.iter().zip(&other.p).rev() {
            if a < b {
                return Ordering::Less;
            }
            if a > b {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }

    /// New vertex with weight `w * scalar`.
    pub fn scale(&self, scalar: f64) -> Vertex {
        assert!(scalar != 0.0, "scaling a vertex by zero erases it");
        Vertex::new(self.w * scalar, self.p.clone())
    }

    /// Drop the last coordinate.
    pub fn project(&self) -> Vertex {
        let n = self.p.len().saturating_sub(1);
        Vertex::new(self.w, self.p[..n].to_vec())
    }

    /// Append `h` as a new last coordinate.
    pub fn unproject(&self, h: f64) -> Vertex {
        let mut p = Vec::with_capacity(self.p.len() + 1);
        p.extend_from_slice(&self.p);
        p.push(h);
        Vertex::new(self.w, p)
    }

    /// True iff `q` lies in the cone of this vertex.
    pub fn dominates(&self, q: &[f64]) -> bool {
        assert_eq!(
            self.dim(),
            q.len(),
            "dominance test against a point of different dimension"
        );
        self.p.iter().zip(q).all(|(pi, qi)| pi <= qi)
    }

    /// Shift the position by `u` (in place).
    pub fn translate(&mut self, u: &[f64]) -> &mut Self {
        for (pi, ui) in self.p.iter_mut().zip(u) {
            *pi += ui;
        }
        self
    }
}
