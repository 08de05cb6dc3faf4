//! Creature module
//!
//! The root driver tying a [`Skeleton`](crate::skeleton::Skeleton), its
//! limb systems, and body locomotion together, plus its builder.

mod builder;
#[allow(clippy::module_inception)]
mod creature;
mod locomotion;

pub use builder::CreatureBuilder;
pub use creature::Creature;
pub use locomotion::DriveParams;
