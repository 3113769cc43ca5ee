//! Pack a seeded stream of rectangles and print a short summary.
//!
//! Usage: cargo run -p orthopack --example arrangement -- [count] [seed]

use std::time::Instant;

use nalgebra::Vector2;
use orthopack::gen::{draw_sizes, SizeCfg};
use orthopack::pack::{Heuristic, PackCfg, RectArrangement};

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(50);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let sizes = draw_sizes(SizeCfg::default(), seed, count).expect("default size cfg is valid");

    for heuristic in [Heuristic::First, Heuristic::Best] {
        let cfg = PackCfg {
            heuristic,
            ..PackCfg::default()
        };
        let mut arr = RectArrangement::new(Vector2::zeros(), cfg).expect("valid cfg");
        let start = Instant::now();
        for &(area, aspect) in &sizes {
            arr.add_rect(area, aspect).expect("placement");
        }
        let ms = start.elapsed().as_secs_f64() * 1e3;

        let placed: f64 = arr.rects().iter().map(|r| r.area()).sum();
        let region = arr.polygon();
        let (lo, hi) = region.bounding_box().unwrap_or_default();
        let extent: Vec<f64> = hi.iter().zip(&lo).map(|(h, l)| h - l).collect();
        println!(
            "heuristic={heuristic} rects={} placed_area={placed:.1} region_area={:.1} vertices={} extent={:?} time_ms={ms:.2}",
            arr.len(),
            region.measure(),
            region.len(),
            extent,
        );
    }
}
