use super::segment::{Parent, Segment, SegmentId};
use crate::math::{Pose, Vec2};
use crate::render::Renderer;

/// Index-based arena owning every segment of one creature, plus the body
/// root frame they all ultimately hang off.
///
/// Segments are owned here and never removed; limb systems and callers
/// hold [`SegmentId`] handles into the arena. Parent links run child to
/// parent as plain handles, so the tree stays free of shared ownership.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    body: Pose,
    segments: Vec<Segment>,
    body_children: Vec<SegmentId>,
}

impl Skeleton {
    pub fn new(body: Pose) -> Self {
        Self {
            body,
            segments: Vec::new(),
            body_children: Vec::new(),
        }
    }

    /// Creates a segment under `parent` and places it at its rest pose.
    pub fn attach(
        &mut self,
        parent: Parent,
        size: f32,
        angle: f32,
        range: f32,
        stiffness: f32,
    ) -> SegmentId {
        let id = SegmentId(self.segments.len());
        self.segments
            .push(Segment::new(parent, size, angle, range, stiffness));
        match parent {
            Parent::Body => self.body_children.push(id),
            Parent::Segment(p) => self.segments[p.0].children.push(id),
        }
        self.update_relative(id, false, true);
        id
    }

    pub fn body(&self) -> Pose {
        self.body
    }

    pub(crate) fn set_body(&mut self, body: Pose) {
        self.body = body;
    }

    pub(crate) fn set_body_angle(&mut self, angle: f32) {
        self.body.angle = angle;
    }

    /// Segments attached directly to the body root.
    pub fn body_children(&self) -> &[SegmentId] {
        &self.body_children
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.0]
    }

    pub fn position(&self, id: SegmentId) -> Vec2 {
        self.segments[id.0].position
    }

    pub fn parent_of(&self, id: SegmentId) -> Parent {
        self.segments[id.0].parent
    }

    /// The frame a parent link resolves to: the body pose or the pose of
    /// the referenced segment.
    pub fn frame_of(&self, parent: Parent) -> Pose {
        match parent {
            Parent::Body => self.body,
            Parent::Segment(id) => self.segments[id.0].pose(),
        }
    }

    /// Re-derives a segment's pose from its parent, optionally relaxing
    /// the relative angle toward rest, optionally recursing through the
    /// whole subtree in child order.
    pub fn update_relative(&mut self, id: SegmentId, recurse: bool, relax: bool) {
        let parent = self.frame_of(self.segments[id.0].parent);
        self.segments[id.0].reframe(parent, relax);
        if recurse {
            for i in 0..self.segments[id.0].children.len() {
                let child = self.segments[id.0].children[i];
                self.update_relative(child, recurse, relax);
            }
        }
    }

    /// Constraint-projection step: keeps the segment exactly `size` from
    /// its parent along its current direction, then re-applies the angular
    /// constraint. The per-node step of the chain IK.
    pub fn follow(&mut self, id: SegmentId, recurse: bool) {
        let parent = self.frame_of(self.segments[id.0].parent);
        self.segments[id.0].project_from(parent);
        self.segments[id.0].reframe(parent, true);
        if recurse {
            for i in 0..self.segments[id.0].children.len() {
                let child = self.segments[id.0].children[i];
                self.follow(child, recurse);
            }
        }
    }

    /// Overwrites a segment's position directly. Only the limb solver does
    /// this; it re-derives angles afterward.
    pub(crate) fn set_position(&mut self, id: SegmentId, position: Vec2) {
        self.segments[id.0].position = position;
    }

    /// Recomputes `abs_angle`/`rel_angle` from the current position and
    /// parent frame without moving anything.
    pub(crate) fn derive_angles(&mut self, id: SegmentId) {
        let parent = self.frame_of(self.segments[id.0].parent);
        let seg = &mut self.segments[id.0];
        let offset = seg.position - parent.position;
        seg.abs_angle = offset.to_angle();
        seg.rel_angle = seg.abs_angle - parent.angle;
    }

    /// Emits one bone line per segment in root-to-leaf order, recursing if
    /// asked, starting from `id`.
    pub fn draw(&self, id: SegmentId, renderer: &mut dyn Renderer, recurse: bool) {
        let seg = &self.segments[id.0];
        let parent = self.frame_of(seg.parent);
        renderer.line(parent.position, seg.position);
        if recurse {
            for &child in &seg.children {
                self.draw(child, renderer, true);
            }
        }
    }
}
