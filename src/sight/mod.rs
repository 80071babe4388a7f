//! Visibility engine
//!
//! Which cells an observer with a position and heading can see, limited by
//! a view cone and blocked by walls.

pub mod fov;
pub mod los;
pub mod pose;
pub mod visibility;

pub use fov::{angle_difference, bearing, heading_glyph, in_field_of_view, normalize_degrees};
pub use los::has_line_of_sight;
pub use pose::Pose;
pub use visibility::VisibilityGrid;
