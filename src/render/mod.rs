//! Render sink module
//!
//! The model never draws anything itself; it emits line and arc primitives
//! in root-to-leaf order into whatever implements [`Renderer`]. A real
//! frontend hands these to a canvas or GPU pipeline; headless callers and
//! tests use [`PrimitiveRecorder`].

use crate::math::Vec2;

/// Sink for the wireframe a creature produces each frame.
pub trait Renderer {
    /// One bone, parent end first.
    fn line(&mut self, from: Vec2, to: Vec2);

    /// Circular arc around `center`, counterclockwise from `start` to
    /// `end` (radians). Used for the head glyph.
    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32);
}

/// A recorded draw primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Line {
        from: Vec2,
        to: Vec2,
    },
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
    },
}

/// [`Renderer`] that just collects primitives in draw order.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveRecorder {
    primitives: Vec<Primitive>,
}

impl PrimitiveRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.primitives.iter().filter_map(|p| match *p {
            Primitive::Line { from, to } => Some((from, to)),
            Primitive::Arc { .. } => None,
        })
    }
}

impl Renderer for PrimitiveRecorder {
    fn line(&mut self, from: Vec2, to: Vec2) {
        self.primitives.push(Primitive::Line { from, to });
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        self.primitives.push(Primitive::Arc {
            center,
            radius,
            start,
            end,
        });
    }
}
