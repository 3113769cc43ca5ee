//! Orthogonal regions as vertex lists, and greedy rectangle packing on top.
//!
//! Layout
//! - `vertex`, `vlist`: signed weighted cones and the vertex-list field
//!   (Boolean operations, projections, rectangle decomposition).
//! - `index`: y-interval tree over the rectangle decomposition of a 2D region.
//! - `morph`: dilation, erosion, closing and opening of 2D regions.
//! - `pack`: `RectArrangement`, the greedy packing engine.
//! - `gen`: seeded random inputs for tests, benches and the CLI.
//! - `cfg`: numeric tolerances shared by the modules above.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   clearer designs over compatibility.

pub mod api;
pub mod cfg;
pub mod gen;
pub mod index;
pub mod morph;
pub mod pack;
pub mod vertex;
pub mod vlist;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use pack::{PackCfg, RectArrangement};
pub use vlist::VList;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gen::{draw_sizes, random_boxes, random_region, GeneratorError, SizeCfg};
    pub use crate::index::{IntervalTree, RectList};
    pub use crate::morph::{close, dilate, erode, open, topo};
    pub use crate::pack::{Heuristic, Metric, PackCfg, PackError, PlacedRect, RectArrangement};
    pub use crate::vertex::Vertex;
    pub use crate::vlist::VList;
    pub use nalgebra::Vector2 as Vec2;
}
