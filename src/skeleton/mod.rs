//! Segment tree module
//!
//! The articulated bone tree: individual [`Segment`] bones and the
//! arena-backed [`Skeleton`] that owns them.

mod segment;
mod tree;

pub use segment::{Parent, Segment, SegmentId};
pub use tree::Skeleton;
