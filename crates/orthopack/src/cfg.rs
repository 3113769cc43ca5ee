//! Tolerance defaults for vertex-list arithmetic.
//!
//! Policy
//! - Weights are compared against zero with `WEIGHT_EPS`; positions are compared
//!   exactly so that scanline order stays a total order.
//! - Morphology snaps the coordinates it produces onto a fixed grid so
//!   that `x - d + d` returns to `x` and coincident vertices merge. The grid
//!   is `1 / SNAP_SCALE`; the scale is an exact integer so grid points that
//!   are integers snap to themselves.

/// A weight `w` counts as zero iff `|w| <= WEIGHT_EPS`.
pub const WEIGHT_EPS: f64 = 1e-9;
/// Inverse grid spacing used when snapping coordinates emitted by dilation.
pub const SNAP_SCALE: f64 = 1e9;

#[inline]
pub(crate) fn is_zero_weight(w: f64) -> bool {
    w.abs() <= WEIGHT_EPS
}

/// Round `x` to the nearest multiple of `1 / SNAP_SCALE`.
#[inline]
pub(crate) fn snap(x: f64) -> f64 {
    let r = (x * SNAP_SCALE).round() / SNAP_SCALE;
    // keep -0.0 out of the lists
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
