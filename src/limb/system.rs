use super::gait::{GaitState, StepPhase};
use crate::math::Vec2;
use crate::skeleton::{Parent, SegmentId, Skeleton};
use rand::Rng;

/// A kinematic chain from a hip attachment down to an end effector.
///
/// Holds handles into the creature's [`Skeleton`]; it owns no segments.
/// A plain limb chases whatever target it is handed each frame. A limb
/// carrying a [`GaitState`] ignores the target and steps after its own
/// foot-plant goals instead.
#[derive(Debug, Clone)]
pub struct LimbSystem {
    end: SegmentId,
    nodes: Vec<SegmentId>,
    hip: Parent,
    speed: f32,
    gait: Option<GaitState>,
}

impl LimbSystem {
    /// Builds a chain by walking `length` parents up from `end`,
    /// truncating silently if the body root is reached first.
    pub fn new(skeleton: &Skeleton, end: SegmentId, length: usize, speed: f32) -> Self {
        let mut nodes = Vec::with_capacity(length.max(1));
        let mut cursor = end;
        for _ in 0..length.max(1) {
            nodes.push(cursor);
            match skeleton.parent_of(cursor) {
                Parent::Segment(id) => cursor = id,
                Parent::Body => break,
            }
        }
        nodes.reverse();
        let hip = skeleton.parent_of(nodes[0]);
        Self {
            end,
            nodes,
            hip,
            speed,
            gait: None,
        }
    }

    pub(crate) fn with_gait(mut self, gait: GaitState) -> Self {
        self.gait = Some(gait);
        self
    }

    pub fn end(&self) -> SegmentId {
        self.end
    }

    pub fn nodes(&self) -> &[SegmentId] {
        &self.nodes
    }

    pub fn hip(&self) -> Parent {
        self.hip
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// `None` for a plain limb, the current step phase for a leg.
    pub fn phase(&self) -> Option<StepPhase> {
        self.gait.as_ref().map(|g| g.phase())
    }

    pub fn gait(&self) -> Option<&GaitState> {
        self.gait.as_ref()
    }

    /// One IK pass toward `target`. Convergence is amortized over frames:
    /// the effector advances at most `speed` per call, which is what makes
    /// limbs trail smoothly instead of snapping.
    pub fn move_to(&self, skeleton: &mut Skeleton, target: Vec2) {
        let Some(&root) = self.nodes.first() else {
            return;
        };

        // Start from an up-to-date rest pose at the hip.
        skeleton.update_relative(root, true, true);

        let dist = target.distance(skeleton.position(self.end));
        let mut len = (dist - self.speed).max(0.0);

        // Backward pass, tip to root: place each node `len` away from the
        // previous target point, toward its current position. Bone sizes
        // take over after the lagged first step.
        let mut anchor = target;
        for &id in self.nodes.iter().rev() {
            let heading = (skeleton.position(id) - anchor).to_angle();
            let placed = anchor + len * Vec2::from_angle(heading);
            skeleton.set_position(id, placed);
            anchor = placed;
            len = skeleton.segment(id).size();
        }

        // Forward pass, root to tip: re-derive angles from the placed
        // positions and carry any off-chain children along without
        // re-relaxing them, so branches don't fight the solve.
        for &id in &self.nodes {
            skeleton.derive_angles(id);
            for i in 0..skeleton.segment(id).children().len() {
                let child = skeleton.segment(id).children()[i];
                if !self.nodes.contains(&child) {
                    skeleton.update_relative(child, true, false);
                }
            }
        }
    }

    /// Per-frame update. Plain limbs track `target`; legs run their
    /// stepping state machine against their own goal.
    pub fn update<R: Rng>(&mut self, skeleton: &mut Skeleton, target: Vec2, rng: &mut R) {
        let Some(goal) = self.gait.as_ref().map(|g| g.goal()) else {
            self.move_to(skeleton, target);
            return;
        };
        self.move_to(skeleton, goal);
        let hip = skeleton.frame_of(self.hip);
        let foot = skeleton.position(self.end);
        if let Some(gait) = self.gait.as_mut() {
            gait.advance(hip, foot, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Pose;
    use approx::assert_relative_eq;
    use std::f32::consts::TAU;

    fn straight_chain(bones: usize) -> (Skeleton, Vec<SegmentId>) {
        let mut sk = Skeleton::new(Pose::IDENTITY);
        let mut ids = Vec::new();
        let mut parent = Parent::Body;
        for _ in 0..bones {
            let id = sk.attach(parent, 10.0, 0.0, TAU, 1.0);
            ids.push(id);
            parent = Parent::Segment(id);
        }
        (sk, ids)
    }

    #[test]
    fn chain_walk_collects_root_first() {
        let (sk, ids) = straight_chain(4);
        let limb = LimbSystem::new(&sk, ids[3], 3, 1.0);
        assert_eq!(limb.nodes(), &ids[1..4]);
        assert_eq!(limb.hip(), Parent::Segment(ids[0]));
    }

    #[test]
    fn chain_truncates_at_body_root() {
        let (sk, ids) = straight_chain(3);
        let limb = LimbSystem::new(&sk, ids[2], 10, 1.0);
        assert_eq!(limb.nodes().len(), 3);
        assert_eq!(limb.hip(), Parent::Body);
    }

    #[test]
    fn effector_advances_by_exactly_speed() {
        let (mut sk, ids) = straight_chain(3);
        let limb = LimbSystem::new(&sk, ids[2], 3, 2.0);
        // End effector rests at (30, 0); aim inside the reachable disk.
        let target = Vec2::new(15.0, 10.0);
        let before = target.distance(sk.position(ids[2]));
        limb.move_to(&mut sk, target);
        let after = target.distance(sk.position(ids[2]));
        assert_relative_eq!(before - after, 2.0, epsilon = 1e-3);
    }

    #[test]
    fn effector_closes_fully_when_within_speed() {
        let (mut sk, ids) = straight_chain(3);
        let limb = LimbSystem::new(&sk, ids[2], 3, 5.0);
        let target = Vec2::new(29.0, 3.0);
        assert!(target.distance(sk.position(ids[2])) < 5.0);
        limb.move_to(&mut sk, target);
        assert_relative_eq!(target.distance(sk.position(ids[2])), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn bone_lengths_survive_the_solve() {
        let (mut sk, ids) = straight_chain(3);
        let limb = LimbSystem::new(&sk, ids[2], 3, 2.0);
        limb.move_to(&mut sk, Vec2::new(12.0, 14.0));
        // Every bone except the lagged tip step keeps its length; the tip
        // segment is re-measured from its parent.
        for pair in ids.windows(2) {
            let d = sk.position(pair[1]).distance(sk.position(pair[0]));
            assert_relative_eq!(d, 10.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn off_chain_children_stay_attached() {
        let (mut sk, ids) = straight_chain(3);
        let rib = sk.attach(Parent::Segment(ids[1]), 4.0, 1.2, TAU, 1.0);
        let limb = LimbSystem::new(&sk, ids[2], 3, 2.0);
        limb.move_to(&mut sk, Vec2::new(14.0, -9.0));
        let d = sk.position(rib).distance(sk.position(ids[1]));
        assert_relative_eq!(d, 4.0, epsilon = 1e-3);
    }

    #[test]
    fn repeated_passes_converge_on_target() {
        let (mut sk, ids) = straight_chain(3);
        let limb = LimbSystem::new(&sk, ids[2], 3, 2.0);
        let target = Vec2::new(12.0, 14.0);
        for _ in 0..40 {
            limb.move_to(&mut sk, target);
        }
        assert!(target.distance(sk.position(ids[2])) < 0.5);
    }
}
