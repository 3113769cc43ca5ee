//! Morphological operators on 2D orthogonal regions.
//!
//! - `dilate`: Minkowski sum with the square `[-d, d]^2`, computed box by box on
//!   `VList::rectangles` and re-thresholded.
//! - `erode`: dilation of the complement inside a padded bounding box; the hole
//!   of the result, negated, is the eroded region.
//! - `close` / `open`: the usual compositions, clamped to contain (resp. lie
//!   inside) the input so snapping never crosses the input boundary.
//!
//! Coordinates produced here are snapped to the `1 / cfg::SNAP_SCALE` grid.

use nalgebra::vector;

use crate::cfg::snap;
use crate::vertex::Vertex;
use crate::vlist::VList;

/// Padding added around the bounding box by `erode` (on top of `d`).
pub const ERODE_MARGIN: f64 = 10.0;

/// Per-corner offsets for the four vertices of a box from `rectangles()`,
/// in scanline order: min corner, (max x, min y), (min x, max y), max corner.
const CORNER_SIGNS: [[f64; 2]; 4] = [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]];

/// Grow the region by `d >= 0` in the chessboard metric.
pub fn dilate(region: &VList, d: f64) -> VList {
    assert!(d >= 0.0, "dilation radius must be non-negative");
    if region.is_empty() {
        return VList::new();
    }
    assert_eq!(region.dim(), Some(2), "morphology works on 2D regions");
    let mut out = Vec::new();
    for r in region.rectangles() {
        for (v, s) in r.iter().zip(CORNER_SIGNS) {
            let p = vec![snap(v.p[0] + s[0] * d), snap(v.p[1] + s[1] * d)];
            out.push(Vertex::new(v.w, p));
        }
    }
    VList::from_vertices(out).threshold()
}

/// Shrink the region by `d >= 0`.
pub fn erode(region: &VList, d: f64) -> VList {
    assert!(d >= 0.0, "erosion radius must be non-negative");
    if region.len() < 4 {
        return VList::new();
    }
    let Some((min, max)) = region.bounding_box() else {
        return VList::new();
    };
    let m = ERODE_MARGIN + d;
    let frame = VList::rectangle(
        vector![min[0] - m, min[1] - m],
        vector![max[0] - min[0] + 2.0 * m, max[1] - min[1] + 2.0 * m],
    )
    .add(&region.neg());
    let grown = dilate(&frame, d);
    // the outer box keeps exactly its 4 corners: two first, two last
    let v = grown.vertices();
    if v.len() <= 4 {
        return VList::new();
    }
    VList::from_vertices(v[2..v.len() - 2].iter().map(|x| x.scale(-1.0)).collect())
}

/// Dilate for `d > 0`, erode for `d < 0`, copy for `d == 0`.
pub fn topo(region: &VList, d: f64) -> VList {
    if d < 0.0 {
        erode(region, -d)
    } else if d > 0.0 {
        dilate(region, d)
    } else {
        region.clone()
    }
}

/// Dilate then erode by `amount >= 0`: fills gaps and notches narrower than
/// `2 * amount`. The result always contains `region`; grid snapping cannot
/// shave its boundary.
pub fn close(region: &VList, amount: f64) -> VList {
    assert!(amount >= 0.0, "closing radius must be non-negative");
    erode(&dilate(region, amount), amount).union(region)
}

/// Erode then dilate by `amount >= 0`: removes parts thinner than
/// `2 * amount`. The result always lies inside `region`.
pub fn open(region: &VList, amount: f64) -> VList {
    assert!(amount >= 0.0, "opening radius must be non-negative");
    dilate(&erode(region, amount), amount).intersection(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen::random_region;
    use nalgebra::Vector2;
    use rand::{rngs::StdRng, SeedableRng};

    fn centered_square(side: f64) -> VList {
        let h = side / 2.0;
        VList::rectangle(vector![-h, -h], vector![side, side])
    }

    fn assert_same_region(a: &VList, b: &VList, tol: f64) {
        assert_eq!(a.len(), b.len(), "{a:?} vs {b:?}");
        for (x, y) in a.iter().zip(b) {
            assert!((x.w - y.w).abs() < tol);
            for (p, q) in x.p.iter().zip(&y.p) {
                assert!((p - q).abs() < tol, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn dilate_square_grows_each_side() {
        let s = centered_square(10.0);
        let d = dilate(&s, 2.0);
        assert_eq!(d, centered_square(14.0));
        assert!((d.measure() - 196.0).abs() < 1e-9);
    }

    #[test]
    fn erode_square_shrinks_each_side() {
        let s = centered_square(10.0);
        assert_eq!(erode(&s, 2.0), centered_square(6.0));
        assert!(erode(&s, 5.0).is_empty());
        assert!(erode(&s, 7.0).is_empty());
    }

    #[test]
    fn erode_then_dilate_square_recovers_it() {
        let s = centered_square(10.0);
        assert_same_region(&dilate(&erode(&s, 2.0), 2.0), &s, 1e-9);
        assert_same_region(&open(&s, 2.0), &s, 1e-9);
    }

    #[test]
    fn close_with_irrational_radius_keeps_rectangle() {
        let r = VList::rectangle(vector![-5.0, -5.0], vector![10.0, 10.0]);
        let amount = 50f64.sqrt() * 0.5;
        assert_eq!(close(&r, amount), r);
    }

    #[test]
    fn close_contains_off_grid_rectangle() {
        let h = 2f64.sqrt() / 2.0;
        let r = VList::rectangle(vector![-h, -h], vector![2.0 * h, 2.0 * h]);
        let c = close(&r, 0.3);
        assert_eq!(c.intersection(&r), r);
        assert_eq!(r.difference(&c), VList::new());
        assert!(c.contains(&[-h, -h]));
        assert!(c.contains(&[h - 1e-12, h - 1e-12]));
        assert!((c.measure() - r.measure()).abs() < 1e-8);
        let o = open(&r, 0.3);
        assert_eq!(o.difference(&r), VList::new());
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn close_rejects_negative_radius() {
        let _ = close(&centered_square(2.0), -1.0);
    }

    #[test]
    fn close_fills_narrow_gap() {
        let a = VList::rectangle(vector![0.0, 0.0], vector![4.0, 4.0]);
        let b = VList::rectangle(vector![5.0, 0.0], vector![4.0, 4.0]);
        let u = a.union(&b);
        let c = close(&u, 1.0);
        assert_eq!(c, VList::rectangle(vector![0.0, 0.0], vector![9.0, 4.0]));
        // a wide gap stays open
        let far = a.union(&VList::rectangle(vector![10.0, 0.0], vector![4.0, 4.0]));
        assert_eq!(close(&far, 1.0), far);
    }

    #[test]
    fn opening_removes_thin_spur() {
        let body = VList::rectangle(vector![0.0, 0.0], vector![10.0, 10.0]);
        let spur = VList::rectangle(vector![10.0, 4.0], vector![6.0, 1.0]);
        let opened = open(&body.union(&spur), 1.0);
        assert_eq!(opened, body);
    }

    #[test]
    fn topo_dispatches_on_sign() {
        let s = centered_square(4.0);
        assert_eq!(topo(&s, 0.0), s);
        assert_eq!(topo(&s, 1.0), dilate(&s, 1.0));
        assert_eq!(topo(&s, -1.0), erode(&s, 1.0));
    }

    #[test]
    fn closing_never_loses_area() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            let region = random_region(&mut rng, 8, 12);
            let closed = close(&region, 0.75);
            assert!(closed.measure() >= region.measure() - 1e-9);
            // closing is extensive: every input box is still covered
            for r in region.rectangles() {
                let lo = &r.vertices()[0].p;
                let hi = &r.vertices()[3].p;
                let mid = Vector2::new((lo[0] + hi[0]) / 2.0, (lo[1] + hi[1]) / 2.0);
                assert!(closed.contains(&[mid.x, mid.y]));
            }
        }
    }

    #[test]
    fn dilation_contains_offset_points() {
        let mut rng = StdRng::seed_from_u64(4);
        let region = random_region(&mut rng, 6, 10);
        let grown = dilate(&region, 0.5);
        for r in region.rectangles() {
            let lo = &r.vertices()[0].p;
            assert!(grown.contains(&[lo[0] - 0.25, lo[1] - 0.25]));
        }
    }
}
