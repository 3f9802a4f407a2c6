//! Stateless 3D geometry and rigid-body orientation routines.
//!
//! Scope
//! - `vector`: point/vector algebra and angle-unit helpers.
//! - `polygon`: segment predicates, point-in-polygon, winding, inscribed rectangle.
//! - `rotation`: frames, ZXZ/ZYZ Euler angles, axis-angle and quaternions.
//! - `units`: dimensioned-value parsing into SI base units.
//!
//! Every function is a pure computation over its arguments; the only global
//! state is the immutable unit table. Tolerances live in [`cfg`].

pub mod cfg;
pub mod error;
pub mod polygon;
pub mod rotation;
pub mod sample;
pub mod units;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeometryError, UnitError};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::RectSearchCfg;
    pub use crate::error::{GeometryError, UnitError};
    pub use crate::polygon::{
        find_largest_inscribed_rectangle, orient_polygon, point_in_polygon, segments_intersect,
        Containment, Polygon, Rectangle, Winding,
    };
    pub use crate::rotation::{
        angle_sign_3d, euler_to_quaternion, frame_from_two_vectors, frame_to_euler,
        quaternion_to_axis_angle, quaternion_to_frame, rotate_vector_by_quaternion, AxisAngle,
        EulerAngles, EulerConvention, Frame, Quat,
    };
    pub use crate::units::parse_dimensioned_value;
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
