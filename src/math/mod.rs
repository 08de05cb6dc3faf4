//! Math utilities module
//!
//! Angle wrapping helpers, the 2D `Pose` frame, and convenient re-exports
//! from glam.

mod angle;
mod pose;

pub use angle::{wrap, wrap_around};
pub use pose::Pose;

// Re-export commonly used glam types
pub use glam::Vec2;
