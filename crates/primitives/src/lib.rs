//! Core types shared by the masking crates: screen rectangles and the
//! identities of views, windows, images, and scene objects.

/// Screen-space rectangles.
pub mod geometry;
/// Identifier types for live editor entities.
pub mod ids;

pub use geometry::Rect;
pub use ids::{ImageId, ObjectRef, TypeName, ViewId, WindowId};
