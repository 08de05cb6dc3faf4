//! # gait-ik
//!
//! A procedural creature animation library: articulated segment chains
//! with angle-constrained relaxation, single-pass chain IK, and a
//! leg-stepping gait state machine, all driven frame by frame toward an
//! external target point.
//!
//! ## Features
//! - Arena-owned segment tree with per-bone angular constraints
//! - Lagged-target chain IK (one backward/forward pass per frame)
//! - Two-phase plant/swing gait with jittered stride goals
//! - Body locomotion integrator (forward and turn drives)
//! - Renderer-agnostic wireframe output
//!
//! ## Example
//! ```rust,ignore
//! use gait_ik::creature::{Creature, DriveParams};
//! use gait_ik::skeleton::Parent;
//! use glam::Vec2;
//! use std::f32::consts::TAU;
//!
//! // A body segment with a two-bone leg hanging off it.
//! let mut creature = Creature::builder()
//!     .position(Vec2::new(400.0, 300.0))
//!     .forward_drive(DriveParams::new(2.0, 1.0, 0.5, 16.0))
//!     .build();
//! let hip = creature.attach(Parent::Body, 8.0, 0.0, 0.0, 1.0);
//! let upper = creature.attach(Parent::Segment(hip), 12.0, 1.2, TAU, 2.0);
//! let foot = creature.attach(Parent::Segment(upper), 12.0, -0.6, TAU, 2.0);
//! creature.add_leg(foot, 2, 4.0);
//!
//! // Once per frame: chase the pointer.
//! creature.follow(Vec2::new(520.0, 310.0));
//! ```

pub mod creature;
pub mod limb;
pub mod math;
pub mod render;
pub mod skeleton;

pub use creature::{Creature, CreatureBuilder, DriveParams};
pub use limb::{GaitState, LimbSystem, StepPhase};
pub use math::{wrap, wrap_around, Pose};
pub use render::{Primitive, PrimitiveRecorder, Renderer};
pub use skeleton::{Parent, Segment, SegmentId, Skeleton};
