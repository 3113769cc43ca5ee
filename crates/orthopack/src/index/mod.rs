//! Intersection queries against a 2D orthogonal polygon.
//!
//! `RectList` decomposes a region into boxes (`VList::rectangles`) and indexes
//! their y-extents in an `IntervalTree`. It is built once per region and never
//! updated; callers rebuild it when the region changes.
//!
//! Conventions
//! - Boxes are half-open `[x0, x1) x [y0, y1)` for point tests.
//! - Box/box overlap is strict: shared edges do not count.

mod interval_tree;

pub use interval_tree::IntervalTree;

use nalgebra::Vector2;

use crate::vlist::VList;

/// Boxes of a region plus an interval index over their y-extents.
#[derive(Clone, Debug)]
pub struct RectList {
    rects: Vec<VList>,
    tree: IntervalTree<usize>,
}

impl RectList {
    /// Index the boxes of a 2D region.
    pub fn new(region: &VList) -> Self {
        if let Some(d) = region.dim() {
            assert_eq!(d, 2, "RectList indexes 2D regions only");
        }
        let rects = region.rectangles();
        let intervals = rects
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let (lo, hi) = corners(r);
                (lo.y, hi.y, i)
            })
            .collect();
        Self {
            tree: IntervalTree::new(intervals),
            rects,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The indexed boxes (4 vertices each, minimum corner first).
    #[inline]
    pub fn rects(&self) -> &[VList] {
        &self.rects
    }

    /// Indices of boxes whose closed y-extent meets `[ymin, ymax]`.
    pub fn range_search(&self, ymin: f64, ymax: f64) -> Vec<usize> {
        self.tree.query_collect(ymin, ymax)
    }

    /// True iff `p` lies inside the polygon.
    pub fn point_intersection(&self, p: Vector2<f64>) -> bool {
        let mut hit = false;
        // candidates from the unit band above p, then the exact half-open test
        self.tree.query(p.y, p.y + 1.0, |_, _, i| {
            if !hit {
                let (lo, hi) = corners(&self.rects[i]);
                hit = lo.x <= p.x && p.x < hi.x && lo.y <= p.y && p.y < hi.y;
            }
        });
        hit
    }

    /// True iff the box `[min, max]` overlaps the polygon's interior.
    pub fn rect_intersection(&self, min: Vector2<f64>, max: Vector2<f64>) -> bool {
        let mut hit = false;
        self.tree.query(min.y, max.y, |_, _, i| {
            if !hit {
                let (lo, hi) = corners(&self.rects[i]);
                hit = boxes_overlap(lo, hi, min, max);
            }
        });
        hit
    }
}

/// Minimum and maximum corner of a 2D box from `VList::rectangles`.
#[inline]
pub(crate) fn corners(r: &VList) -> (Vector2<f64>, Vector2<f64>) {
    let v = r.vertices();
    let lo = &v[0].p;
    let hi = &v[v.len() - 1].p;
    (Vector2::new(lo[0], lo[1]), Vector2::new(hi[0], hi[1]))
}

/// Strict interior overlap of two axis-aligned boxes.
#[inline]
pub fn boxes_overlap(
    a_min: Vector2<f64>,
    a_max: Vector2<f64>,
    b_min: Vector2<f64>,
    b_max: Vector2<f64>,
) -> bool {
    a_max.x.min(b_max.x) > a_min.x.max(b_min.x) && a_max.y.min(b_max.y) > a_min.y.max(b_min.y)
}
