use glam::Vec2;

/// A 2D reference frame: a position plus an absolute heading in radians.
///
/// Both segments and the creature body expose one of these, which is what
/// lets a segment hang off either without caring which it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub angle: f32,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        angle: 0.0,
    };

    pub fn new(position: Vec2, angle: f32) -> Self {
        Self { position, angle }
    }

    /// Unit vector along the heading.
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// Point at `distance` along the heading.
    pub fn project(&self, distance: f32) -> Vec2 {
        self.position + distance * self.forward()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
