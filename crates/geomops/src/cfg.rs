//! Tolerance defaults and search knobs.
//!
//! Policy
//! - Tolerances are fixed constants so call sites don't juggle epsilons.
//!   Predicates that callers commonly tune also have an explicit `tol` variant.

/// Cross-product magnitude below which two vectors count as collinear.
pub const COLLINEAR_EPS: f64 = 1e-10;
/// Distance from an edge below which a point counts as on the polygon boundary.
pub const BOUNDARY_EPS: f64 = 1e-8;
/// Threshold on `sin(theta)` (frames) or half-angle magnitudes (quaternions)
/// below which Euler angles are treated as gimbal-locked.
pub const GIMBAL_EPS: f64 = 1e-12;
/// Below this `sin(angle/2)` the rotation axis of a quaternion is undefined.
pub const AXIS_EPS: f64 = 1e-12;
/// Areas below this are reported as exactly zero.
pub const AREA_EPS: f64 = 1e-12;

/// Knobs for [`crate::polygon::find_largest_inscribed_rectangle_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectSearchCfg {
    /// Number of sampled rectangle orientations in `[0, π/2)`.
    pub angle_divisions: usize,
    /// Uniform grid lines added per axis on top of the polygon's own vertex
    /// coordinates.
    pub grid_divisions: usize,
}

impl Default for RectSearchCfg {
    fn default() -> Self {
        Self {
            angle_divisions: 16,
            grid_divisions: 32,
        }
    }
}
