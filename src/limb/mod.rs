//! Limb module
//!
//! Chain IK over segments of a [`Skeleton`](crate::skeleton::Skeleton):
//! the [`LimbSystem`] solver and the [`GaitState`] stepping machine that
//! specializes a limb into a leg.

mod gait;
mod system;

pub use gait::{GaitState, StepPhase};
pub use system::LimbSystem;
