//! 2D line, segment and polygon geometry.
//!
//! Purpose
//! - Predicates on segments and lines (collinearity, perpendicularity,
//!   projection, intersection) that work on 2D or 3D points where that makes
//!   sense and on 2D points where orientation signs are needed.
//! - Polygon queries over an implicitly closed vertex ring: containment with a
//!   boundary state, winding, centroid, and the largest inscribed rectangle.
//!
//! Conventions
//! - Polygons are closed implicitly: the last vertex connects to the first.
//! - Winding is read from the shoelace signed area (positive = counter-clockwise).
//! - Boundary tests use `cfg::BOUNDARY_EPS` as an absolute distance.

mod contain;
mod orient;
mod rect;
mod segment;
mod types;

pub use contain::{
    is_point_in_polygon, point_in_polygon, point_in_polygon_tol, segment_intersects_polygon,
};
pub use orient::{orient_polygon, polygon_centroid, polygon_orientation, signed_area};
pub use rect::{find_largest_inscribed_rectangle, find_largest_inscribed_rectangle_with};
pub use segment::{
    are_collinear, are_collinear_tol, distance_vector, is_between_points, is_parallel,
    is_perpendicular, is_point_projection_in_segment, point_segment_distance, segments_intersect,
};
pub use types::{Containment, Polygon, Rectangle, Winding};
