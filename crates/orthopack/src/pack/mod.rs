//! Greedy rectangle packing around a center point.
//!
//! Purpose
//! - Place rectangles of given area and aspect one at a time, each touching the
//!   current union region at a boundary vertex, as close to the center as the
//!   chosen heuristic finds, without overlapping earlier rectangles.
//!
//! Search
//! - Boundary vertices of the union region are sorted by distance from the
//!   center. Each yields up to four candidates (a rectangle corner on the
//!   vertex); candidates whose center lies in the region or whose body overlaps
//!   it are rejected (`index::RectList`).
//! - `Heuristic::First` stops at the first vertex with a valid candidate;
//!   `Heuristic::Best` keeps the closest candidate until the distance bound
//!   `vertex_dist > best + half_diagonal` ends the scan.
//! - After every `close_frequency`-th placement the region is closed
//!   (`morph::close`) to drop thin gaps and keep the vertex count small.
//!
//! Not globally optimal; placement is deterministic for a given input sequence.

mod arrangement;
mod types;

pub use arrangement::{RectArrangement, MIN_SIDE};
pub use types::{Heuristic, Metric, PackCfg, PackError, ParseOptionError, PlacedRect};
