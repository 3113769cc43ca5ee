//! `RectArrangement`: greedy placement of rectangles around a center.

use nalgebra::{vector, Vector2};
use tracing::{debug, trace, warn};

use super::types::{Heuristic, PackCfg, PackError, PlacedRect};
use crate::cfg::snap;
use crate::index::RectList;
use crate::morph;
use crate::vlist::VList;

/// Smallest accepted side length. Placed corners and morphology both work on
/// the `1 / cfg::SNAP_SCALE` grid, so much smaller rectangles would be
/// distorted or erased by snapping.
pub const MIN_SIDE: f64 = 1e-6;

/// Growth directions of a candidate from its anchor vertex, paired with the
/// vertex weight sign that admits them.
const DIRECTIONS: [([f64; 2], f64); 4] = [
    ([1.0, 1.0], -1.0),
    ([-1.0, 1.0], 1.0),
    ([1.0, -1.0], 1.0),
    ([-1.0, -1.0], -1.0),
];

/// Rectangles placed so far, their union region and the packing settings.
///
/// Rectangles are only ever appended. A failed `add_rect` leaves the
/// arrangement untouched. The region always contains every placed rectangle.
#[derive(Clone, Debug)]
pub struct RectArrangement {
    center: Vector2<f64>,
    cfg: PackCfg,
    rects: Vec<PlacedRect>,
    polygon: VList,
}

/// Outcome of one candidate scan.
struct Search {
    best: Option<(PlacedRect, f64)>,
    examined: usize,
}

/// Interval of length `len` starting at `a` (`dir > 0`) or ending at `a`.
/// The anchor stays exact; the free end is snapped to the grid.
#[inline]
fn span(a: f64, len: f64, dir: f64) -> (f64, f64) {
    if dir > 0.0 {
        (a, snap(a + len))
    } else {
        (snap(a - len), a)
    }
}

/// Candidate with one corner on `p`, extending along `dir`.
fn anchored(p: Vector2<f64>, sides: Vector2<f64>, dir: [f64; 2]) -> PlacedRect {
    let (x0, x1) = span(p.x, sides.x, dir[0]);
    let (y0, y1) = span(p.y, sides.y, dir[1]);
    PlacedRect::new(vector![x0, y0], vector![x1, y1])
}

impl RectArrangement {
    pub fn new(center: Vector2<f64>, cfg: PackCfg) -> Result<Self, PackError> {
        cfg.validate()?;
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(PackError::invalid_config("center must be finite"));
        }
        Ok(Self {
            center,
            cfg,
            rects: Vec::new(),
            polygon: VList::new(),
        })
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }

    #[inline]
    pub fn cfg(&self) -> &PackCfg {
        &self.cfg
    }

    /// Placed rectangles in insertion order.
    #[inline]
    pub fn rects(&self) -> &[PlacedRect] {
        &self.rects
    }

    /// Current union region (closed according to the configuration).
    #[inline]
    pub fn polygon(&self) -> &VList {
        &self.polygon
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Close the union region by `amount` (dilate, then erode).
    pub fn close_polygon(&mut self, amount: f64) {
        self.polygon = morph::close(&self.polygon, amount);
        trace!(amount, vertices = self.polygon.len(), "closed polygon");
    }

    /// Place a rectangle of the given area and aspect ratio (width / height)
    /// as close to the center as the heuristic finds.
    ///
    /// Sides are `sqrt(area * aspect)` and `area / side_x`; both must be at
    /// least `MIN_SIDE`, otherwise the call fails with `InvalidSize`. The
    /// placed corners lie on the `1 / cfg::SNAP_SCALE` grid (except where a
    /// corner touches an existing region vertex), so the reported sides may
    /// differ from the requested ones by about one grid step.
    pub fn add_rect(&mut self, area: f64, aspect: f64) -> Result<PlacedRect, PackError> {
        if !(area.is_finite() && aspect.is_finite() && area > 0.0 && aspect > 0.0) {
            return Err(PackError::InvalidSize { area, aspect });
        }
        let side_x = (area * aspect).sqrt();
        let side_y = area / side_x;
        if side_x < MIN_SIDE || side_y < MIN_SIDE {
            return Err(PackError::InvalidSize { area, aspect });
        }
        let sides = vector![side_x, side_y];
        let half = sides * 0.5;
        let d = half.norm();

        let (placed, examined) = if self.rects.is_empty() {
            let min = (self.center - half).map(snap);
            let max = (self.center + half).map(snap);
            (PlacedRect::new(min, max), 0)
        } else {
            let search = self.search(sides, d);
            match search.best {
                Some((rect, _)) => (rect, search.examined),
                None => {
                    warn!(area, aspect, examined = search.examined, "no placement found");
                    return Err(PackError::NoPlacement { area, aspect });
                }
            }
        };

        self.rects.push(placed);
        self.polygon = self.polygon.union(&placed.as_vlist());
        if self.rects.len() % self.cfg.close_frequency == 0 {
            self.close_polygon(d * self.cfg.close_factor);
        }
        debug!(
            index = self.rects.len() - 1,
            x = placed.min.x,
            y = placed.min.y,
            width = placed.width(),
            height = placed.height(),
            examined,
            "placed rect"
        );
        Ok(placed)
    }

    /// Scan boundary vertices by distance from the center. Each vertex offers
    /// up to four corner-touching placements; the vertex weight's sign selects
    /// the ones that face away from the region.
    fn search(&self, sides: Vector2<f64>, d: f64) -> Search {
        let metric = self.cfg.metric;
        let mut vtx: Vec<(f64, Vector2<f64>, f64)> = self
            .polygon
            .iter()
            .map(|v| {
                let p = vector![v.p[0], v.p[1]];
                (metric.distance(p, self.center), p, v.w)
            })
            .collect();
        vtx.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let index = RectList::new(&self.polygon);

        let mut out = Search {
            best: None,
            examined: 0,
        };
        for (dist, p, w) in vtx {
            if let Some((_, best)) = out.best {
                // sorted: no later vertex can do better
                if dist > best + d {
                    break;
                }
            }
            for (dir, sign) in DIRECTIONS {
                if w.signum() != sign {
                    continue;
                }
                out.examined += 1;
                let cand = anchored(p, sides, dir);
                let c = cand.center();
                if index.point_intersection(c) || index.rect_intersection(cand.min, cand.max) {
                    continue;
                }
                if self.rects.iter().any(|r| r.overlaps(&cand)) {
                    continue;
                }
                let dc = metric.distance(c, self.center);
                if out.best.map_or(true, |(_, best)| dc < best) {
                    out.best = Some((cand, dc));
                }
            }
            if self.cfg.heuristic == Heuristic::First && out.best.is_some() {
                break;
            }
        }
        out
    }
}
