use super::builder::CreatureBuilder;
use super::locomotion::Locomotion;
use crate::limb::{GaitState, LimbSystem, StepPhase};
use crate::math::{wrap, Pose, Vec2};
use crate::render::Renderer;
use crate::skeleton::{Parent, SegmentId, Skeleton};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::f32::consts::{FRAC_PI_4, PI, SQRT_2};

/// Radius of the head glyph.
const HEAD_RADIUS: f32 = 4.0;

/// The root driver: owns the segment tree, the limb systems referencing
/// into it, the body motion state, and the stride RNG.
///
/// One call to [`follow`](Creature::follow) per animation frame advances
/// the whole model: body pose first, then every limb.
pub struct Creature {
    skeleton: Skeleton,
    systems: Vec<LimbSystem>,
    motion: Locomotion,
    rng: Xoshiro256PlusPlus,
}

impl Creature {
    pub fn builder() -> CreatureBuilder {
        CreatureBuilder::new()
    }

    pub(crate) fn from_parts(
        skeleton: Skeleton,
        motion: Locomotion,
        rng: Xoshiro256PlusPlus,
    ) -> Self {
        Self {
            skeleton,
            systems: Vec::new(),
            motion,
            rng,
        }
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn systems(&self) -> &[LimbSystem] {
        &self.systems
    }

    pub fn position(&self) -> Vec2 {
        self.skeleton.body().position
    }

    pub fn heading(&self) -> f32 {
        self.skeleton.body().angle
    }

    pub fn forward_speed(&self) -> f32 {
        self.motion.forward_speed()
    }

    pub fn turn_speed(&self) -> f32 {
        self.motion.turn_speed()
    }

    /// Grows a segment under `parent` (the body root or any existing
    /// segment). Construction-script surface.
    pub fn attach(
        &mut self,
        parent: Parent,
        size: f32,
        angle: f32,
        range: f32,
        stiffness: f32,
    ) -> SegmentId {
        self.skeleton.attach(parent, size, angle, range, stiffness)
    }

    /// Registers a plain limb: a chain of `length` segments ending at
    /// `end` that chases the external target every frame.
    pub fn add_limb(&mut self, end: SegmentId, length: usize, speed: f32) {
        self.systems
            .push(LimbSystem::new(&self.skeleton, end, length, speed));
    }

    /// Registers a leg: the same chain plus a stepping state machine whose
    /// stance is fixed from the leg's initial geometry.
    pub fn add_leg(&mut self, end: SegmentId, length: usize, speed: f32) {
        let limb = LimbSystem::new(&self.skeleton, end, length, speed);
        let hip = self.skeleton.frame_of(limb.hip());
        let foot = self.skeleton.position(end);
        let gait = GaitState::new(self.skeleton.body().angle, hip, foot);
        self.systems.push(limb.with_gait(gait));
    }

    /// One simulation tick toward an external target point.
    ///
    /// Integrates body speed and heading, then propagates the new pose to
    /// body segments and limb systems. While propagating, the body heading
    /// is temporarily flipped by `PI`: body segments and leg stance math
    /// treat "front" as opposite the travel marker, and the whole pose
    /// language of the model is built on that convention.
    pub fn follow(&mut self, target: Vec2) {
        let body = self.skeleton.body();
        let offset = target - body.position;
        let dist = offset.length();
        let bearing = offset.to_angle();

        // Forward drive only engages in proportion to grounded legs.
        // Plain limbs are never planted but still count in the total.
        let mut accel = self.motion.forward.accel;
        if !self.systems.is_empty() {
            let planted = self
                .systems
                .iter()
                .filter(|sys| sys.phase() == Some(StepPhase::Planted))
                .count();
            accel *= planted as f32 / self.systems.len() as f32;
        }

        let speed = self.motion.advance_forward(dist, accel);
        let dif = wrap(body.angle - bearing);
        let r_speed = self.motion.advance_turn(dif, dist);

        let heading = wrap(body.angle + r_speed);
        let position = body.position + speed * Vec2::from_angle(heading);
        log::trace!(
            "tick: pos ({:.1}, {:.1}) heading {:.2} speed {:.2}",
            position.x,
            position.y,
            heading,
            speed
        );

        self.skeleton.set_body(Pose::new(position, heading + PI));
        for i in 0..self.skeleton.body_children().len() {
            let child = self.skeleton.body_children()[i];
            self.skeleton.follow(child, true);
        }
        for sys in &mut self.systems {
            sys.update(&mut self.skeleton, target, &mut self.rng);
        }
        self.skeleton.set_body_angle(heading);
    }

    /// Emits the head glyph and every bone in root-to-leaf order.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        let body = self.skeleton.body();
        let a = body.angle;
        renderer.arc(
            body.position,
            HEAD_RADIUS,
            FRAC_PI_4 + a,
            7.0 * FRAC_PI_4 + a,
        );
        let jaw = body.position + HEAD_RADIUS * Vec2::from_angle(7.0 * FRAC_PI_4 + a);
        let snout = body.position + HEAD_RADIUS * SQRT_2 * Vec2::from_angle(a);
        let brow = body.position + HEAD_RADIUS * Vec2::from_angle(FRAC_PI_4 + a);
        renderer.line(jaw, snout);
        renderer.line(snout, brow);
        for &child in self.skeleton.body_children() {
            self.skeleton.draw(child, renderer, true);
        }
    }
}
