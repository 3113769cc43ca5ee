//! Curated internal API (UNSTABLE).
//!
//! A flat surface for the CLI and experiments. Breaking changes are allowed.

// regions
pub use crate::cfg::{SNAP_SCALE, WEIGHT_EPS};
pub use crate::index::{boxes_overlap, IntervalTree, RectList};
pub use crate::vertex::Vertex;
pub use crate::vlist::VList;
// morphology
pub use crate::morph::{close, dilate, erode, open, topo, ERODE_MARGIN};
// packing
pub use crate::pack::{
    Heuristic, Metric, PackCfg, PackError, ParseOptionError, PlacedRect, RectArrangement,
    MIN_SIDE,
};
// inputs
pub use crate::gen::{draw_sizes, GeneratorError, SizeCfg};
