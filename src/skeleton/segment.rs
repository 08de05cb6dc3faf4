use crate::math::{wrap_around, Pose, Vec2};

/// Handle to a segment inside a [`Skeleton`](super::Skeleton) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentId(pub(crate) usize);

impl SegmentId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a segment hangs off: either the creature body root or another
/// segment. Both expose a [`Pose`], which is all a child ever reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    Body,
    Segment(SegmentId),
}

/// A single rigid bone.
///
/// `rel_angle` is the live angle relative to the parent heading,
/// constrained to `def_angle ± range / 2` whenever a relaxed update runs.
/// `abs_angle` and `position` are derived state, recomputed from the
/// parent frame on every update.
#[derive(Debug, Clone)]
pub struct Segment {
    pub(crate) parent: Parent,
    pub(crate) children: Vec<SegmentId>,
    pub(crate) size: f32,
    pub(crate) rel_angle: f32,
    pub(crate) def_angle: f32,
    pub(crate) range: f32,
    pub(crate) stiffness: f32,
    pub(crate) abs_angle: f32,
    pub(crate) position: Vec2,
}

impl Segment {
    pub(crate) fn new(parent: Parent, size: f32, angle: f32, range: f32, stiffness: f32) -> Self {
        Self {
            parent,
            children: Vec::new(),
            size,
            rel_angle: angle,
            def_angle: angle,
            range,
            stiffness,
            abs_angle: 0.0,
            position: Vec2::ZERO,
        }
    }

    pub fn parent(&self) -> Parent {
        self.parent
    }

    pub fn children(&self) -> &[SegmentId] {
        &self.children
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn rel_angle(&self) -> f32 {
        self.rel_angle
    }

    pub fn def_angle(&self) -> f32 {
        self.def_angle
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn abs_angle(&self) -> f32 {
        self.abs_angle
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// The frame this segment presents to its own children.
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.abs_angle)
    }

    /// Re-derives the absolute pose from the parent frame.
    ///
    /// Wraps `rel_angle` onto the branch centered at `def_angle`, then, if
    /// `relax` is set, eases it toward the rest angle by `1 / stiffness`
    /// and clamps it into the allowed range.
    pub(crate) fn reframe(&mut self, parent: Pose, relax: bool) {
        self.rel_angle = wrap_around(self.rel_angle, self.def_angle);
        if relax {
            let eased = self.def_angle + (self.rel_angle - self.def_angle) / self.stiffness;
            let half = self.range / 2.0;
            self.rel_angle = eased.clamp(self.def_angle - half, self.def_angle + half);
        }
        self.abs_angle = parent.angle + self.rel_angle;
        self.position = parent.position + self.size * Vec2::from_angle(self.abs_angle);
    }

    /// Projects the current position onto the circle of radius `size`
    /// around the parent, preserving direction, and re-derives angles.
    ///
    /// If the segment sits exactly on its parent the direction is
    /// degenerate; the prior heading is kept rather than letting a NaN in.
    pub(crate) fn project_from(&mut self, parent: Pose) {
        let offset = self.position - parent.position;
        let dist = offset.length();
        if dist > f32::EPSILON {
            self.position = parent.position + offset * (self.size / dist);
            self.abs_angle = offset.to_angle();
            self.rel_angle = self.abs_angle - parent.angle;
        }
    }
}
