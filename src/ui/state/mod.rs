// SPDX-License-Identifier: MPL-2.0
//! Pure state types for the slider core: position math, geometry capture,
//! drag tracking, animation timing, and seek deduplication.

pub mod animation;
pub mod dedup;
pub mod drag;
pub mod geometry;
pub mod position;

// Re-export commonly used types for convenience
pub use animation::AnimationRun;
pub use dedup::RecentTokens;
pub use drag::{DragGrip, PointerId};
pub use geometry::GeometrySnapshot;
pub use position::Fraction;
