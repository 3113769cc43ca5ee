use super::*;
use crate::gen::random_boxes;
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn square(x: f64, y: f64, side: f64) -> VList {
    VList::rectangle(vector![x, y], vector![side, side])
}

fn union_all(boxes: &[VList]) -> VList {
    boxes.iter().fold(VList::new(), |acc, b| acc.union(b))
}

fn sum_all(boxes: &[VList]) -> VList {
    boxes.iter().fold(VList::new(), |acc, b| acc.add(b))
}

/// Half-open membership in a 2D box produced by `rectangles()`.
fn box_contains(r: &VList, q: &[f64]) -> bool {
    let lo = &r.vertices()[0].p;
    let hi = &r.vertices()[r.len() - 1].p;
    lo.iter().zip(hi).zip(q).all(|((a, b), c)| a <= c && c < b)
}

fn grid_centers(n: i32) -> impl Iterator<Item = [f64; 2]> {
    (-1..=n).flat_map(move |i| (-1..=n).map(move |j| [i as f64 + 0.5, j as f64 + 0.5]))
}

#[test]
fn rectangle_is_sorted_with_alternating_weights() {
    let r = square(0.0, 0.0, 2.0);
    let w: Vec<f64> = r.iter().map(|v| v.w).collect();
    assert_eq!(w, vec![1.0, -1.0, -1.0, 1.0]);
    assert_eq!(r.vertices()[0].p, vec![0.0, 0.0]);
    assert_eq!(r.vertices()[3].p, vec![2.0, 2.0]);
    assert_eq!(r, VList::boxed(&[0.0, 0.0], &[2.0, 2.0]));
}

#[test]
fn from_vertices_merges_and_drops_zero() {
    let l = VList::from_vertices(vec![
        Vertex::new(1.0, vec![1.0, 0.0]),
        Vertex::new(2.0, vec![0.0, 0.0]),
        Vertex::new(-1.0, vec![1.0, 0.0]),
        Vertex::new(0.5, vec![0.0, 0.0]),
    ]);
    assert_eq!(l.len(), 1);
    assert_eq!(l.vertices()[0], Vertex::new(2.5, vec![0.0, 0.0]));
}

#[test]
fn split_peels_one_slab() {
    let r = square(0.0, 0.0, 1.0).add(&square(3.0, 5.0, 1.0));
    let (pre, rem) = r.split();
    assert_eq!(pre.len(), 2);
    assert_eq!(rem.len(), 6);
    assert!(pre.iter().all(|v| v.last_coord() == 0.0));
    assert_eq!(pre, r.prefix());
    assert_eq!(rem, r.remainder());
    assert_eq!(r.prefix_len(), 2);
    assert_eq!(VList::new().prefix_len(), 0);
}

#[test]
#[should_panic(expected = "no scanline coordinate")]
fn split_of_zero_dimensional_list_panics() {
    let scalar = VList::from_vertices(vec![Vertex::new(1.0, Vec::new())]);
    assert_eq!(scalar.dim(), Some(0));
    let _ = scalar.split();
}

#[test]
fn touching_squares_union_to_one_box() {
    let a = square(-5.0, -5.0, 10.0);
    let b = square(-15.0, -5.0, 10.0);
    let u = a.union(&b);
    assert_eq!(u.len(), 4);
    assert_eq!(u, VList::rectangle(vector![-15.0, -5.0], vector![20.0, 10.0]));
    assert_eq!(u.rectangles().len(), 1);
    assert!((u.measure() - 200.0).abs() < 1e-12);
}

#[test]
fn overlapping_union_intersection_difference() {
    let a = square(0.0, 0.0, 4.0);
    let b = square(2.0, 2.0, 4.0);
    let u = a.union(&b);
    let i = a.intersection(&b);
    let d = a.difference(&b);
    assert!((u.measure() - 28.0).abs() < 1e-12);
    assert_eq!(i, square(2.0, 2.0, 2.0));
    assert!((d.measure() - 12.0).abs() < 1e-12);
    for q in grid_centers(6) {
        let (ia, ib) = (a.contains(&q), b.contains(&q));
        assert_eq!(u.contains(&q), ia || ib);
        assert_eq!(i.contains(&q), ia && ib);
        assert_eq!(d.contains(&q), ia && !ib);
    }
}

#[test]
fn value_counts_overlaps_before_thresholding() {
    let a = square(0.0, 0.0, 4.0);
    let raw = a.add(&a);
    assert_eq!(raw.value(&[1.0, 1.0]), 2.0);
    assert_eq!(raw.threshold(), a);
    assert_eq!(a.value(&[4.0, 1.0]), 0.0);
    assert_eq!(a.value(&[0.0, 0.0]), 1.0);
}

#[test]
fn transform_scales_field() {
    let a = square(0.0, 0.0, 1.0);
    assert_eq!(a.transform(|w| 3.0 * w), a.scale(3.0));
}

#[test]
fn project_unproject_single_slab() {
    let r = square(0.0, 0.0, 2.0);
    let pre = r.prefix();
    let p = pre.project();
    assert_eq!(p.dim(), Some(1));
    assert_eq!(p.unproject(0.0), pre);
}

#[test]
fn rotation_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let region = union_all(&random_boxes(&mut rng, 6, 8));
    assert_eq!(region.rot_axes_forward().rot_axes_backward(), region);
    // rotated region has the same area
    assert!((region.rot_axes_forward().measure() - region.measure()).abs() < 1e-9);
}

#[test]
fn faces_of_a_box() {
    let r = square(0.0, 0.0, 2.0);
    let f = r.faces();
    assert_eq!(f.len(), 2);
    assert_eq!(f[0].vertices()[0].p, vec![0.0, 0.0]);
    assert_eq!(f[1].vertices()[0].w, -1.0);
}

#[test]
fn three_dimensional_box() {
    let b = VList::boxed(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]);
    assert_eq!(b.len(), 8);
    assert!((b.measure() - 6.0).abs() < 1e-12);
    assert!(b.contains(&[0.5, 1.5, 2.5]));
    assert!(!b.contains(&[0.5, 2.5, 2.5]));
    let rects = b.rectangles();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0], b);
    let c = VList::boxed(&[0.5, 0.5, 0.5], &[2.0, 1.0, 1.0]);
    let u = b.union(&c);
    assert!((u.measure() - (6.0 + 1.5 * 0.5 * 0.5 - 0.5 * 0.5 * 0.5)).abs() < 1e-12);
}

#[test]
fn bounding_box_covers_vertices() {
    let r = square(1.0, -2.0, 3.0).add(&square(-4.0, 0.0, 1.0));
    let (min, max) = r.bounding_box().unwrap();
    assert_eq!(min, vec![-4.0, -2.0]);
    assert_eq!(max, vec![4.0, 1.0]);
    assert!(VList::new().bounding_box().is_none());
}

#[test]
fn translate_keeps_order() {
    let mut r = square(0.0, 0.0, 1.0).add(&square(2.0, 0.0, 1.0));
    let before = r.clone();
    r.translate(&[1.0, 2.0]);
    assert_eq!(r.len(), before.len());
    assert_eq!(r.vertices()[0].p, vec![1.0, 2.0]);
    assert!(r.contains(&[3.5, 2.5]));
}

fn arb_region() -> impl Strategy<Value = Vec<VList>> {
    prop::collection::vec((0i32..8, 0i32..8, 1i32..4, 1i32..4), 1..6).prop_map(|v| {
        v.into_iter()
            .map(|(x, y, w, h)| VList::rectangle(vector![x as f64, y as f64], vector![w as f64, h as f64]))
            .collect()
    })
}

proptest! {
    #[test]
    fn add_is_commutative_and_associative(a in arb_region(), b in arb_region(), c in arb_region()) {
        let (a, b, c) = (sum_all(&a), sum_all(&b), sum_all(&c));
        prop_assert_eq!(a.add(&b), b.add(&a));
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        prop_assert!(a.add(&a.scale(-1.0)).is_empty());
    }

    #[test]
    fn value_agrees_with_box_decomposition(boxes in arb_region()) {
        let region = union_all(&boxes);
        let rects = region.rectangles();
        for q in grid_centers(12) {
            let by_value = region.contains(&q);
            let by_rects = rects.iter().any(|r| box_contains(r, &q));
            let by_input = boxes.iter().any(|r| box_contains(r, &q));
            prop_assert_eq!(by_value, by_rects);
            prop_assert_eq!(by_value, by_input);
        }
    }

    #[test]
    fn rectangles_reassemble_region(boxes in arb_region()) {
        let region = union_all(&boxes);
        prop_assert_eq!(sum_all(&region.rectangles()), region.clone());
        let raw = sum_all(&boxes);
        prop_assert_eq!(sum_all(&raw.rectangles()), raw);
    }
}
