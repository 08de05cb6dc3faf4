use crate::math::{wrap, Pose, Vec2};
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

/// Where a leg is in its step cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    /// Foot is down; the body drags it away from its plant point.
    Planted,
    /// Foot is easing toward a new stride goal.
    Swinging,
}

/// Stepping state bolted onto a [`LimbSystem`](super::LimbSystem) to turn
/// it into a leg.
///
/// A planted foot lifts once the body has dragged it more than one unit
/// from its plant point, picks a jittered stride goal at `reach` from the
/// hip, and swings until its forward progress stalls, at which point it
/// plants wherever it landed.
#[derive(Debug, Clone)]
pub struct GaitState {
    goal: Vec2,
    phase: StepPhase,
    forwardness: f32,
    reach: f32,
    swing: f32,
    swing_offset: f32,
}

/// Foot drag past this distance from the plant point lifts the foot.
const LIFT_DISTANCE: f32 = 1.0;

/// Squared per-frame forwardness change below this plants the foot.
const STALL_THRESHOLD: f32 = 1.0;

impl GaitState {
    /// Fixes the leg's stance from its initial geometry: stride radius is
    /// 90% of the hip-to-foot distance, and `swing`/`swing_offset` encode
    /// the foot's natural bearing relative to the body heading, mirrored
    /// to the leg's side.
    pub fn new(body_angle: f32, hip: Pose, foot: Vec2) -> Self {
        let reach = 0.9 * foot.distance(hip.position);
        let rel = wrap(body_angle - (foot - hip.position).to_angle());
        let side = if rel < 0.0 { 1.0 } else { -1.0 };
        Self {
            goal: foot,
            phase: StepPhase::Planted,
            forwardness: 0.0,
            reach,
            swing: -rel + side * FRAC_PI_2,
            swing_offset: body_angle - hip.angle,
        }
    }

    pub fn goal(&self) -> Vec2 {
        self.goal
    }

    pub fn phase(&self) -> StepPhase {
        self.phase
    }

    pub fn reach(&self) -> f32 {
        self.reach
    }

    /// Runs one tick of the plant/swing machine from the current hip frame
    /// and foot position.
    pub fn advance<R: Rng>(&mut self, hip: Pose, foot: Vec2, rng: &mut R) {
        match self.phase {
            StepPhase::Planted => {
                if foot.distance(self.goal) > LIFT_DISTANCE {
                    self.phase = StepPhase::Swinging;
                    let bearing = self.swing + hip.angle + self.swing_offset;
                    let jitter = Vec2::new(
                        rng.random_range(-1.0..1.0),
                        rng.random_range(-1.0..1.0),
                    ) * (self.reach / 2.0);
                    self.goal = hip.position + self.reach * Vec2::from_angle(bearing) + jitter;
                    log::trace!(
                        "foot lifted, stride goal ({:.1}, {:.1})",
                        self.goal.x,
                        self.goal.y
                    );
                }
            }
            StepPhase::Swinging => {
                let offset = foot - hip.position;
                let theta = offset.to_angle() - hip.angle;
                let forwardness = offset.length() * theta.cos();
                let step = self.forwardness - forwardness;
                self.forwardness = forwardness;
                if step * step < STALL_THRESHOLD {
                    self.phase = StepPhase::Planted;
                    self.goal = foot;
                    log::trace!("foot planted at ({:.1}, {:.1})", foot.x, foot.y);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn rng() -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(7)
    }

    #[test]
    fn starts_planted_on_the_foot() {
        let hip = Pose::new(Vec2::ZERO, 0.0);
        let foot = Vec2::new(10.0, 0.0);
        let gait = GaitState::new(0.0, hip, foot);
        assert_eq!(gait.phase(), StepPhase::Planted);
        assert_relative_eq!(gait.goal().x, 10.0);
        assert_relative_eq!(gait.reach(), 9.0);
    }

    #[test]
    fn lag_past_threshold_lifts_the_foot() {
        let hip = Pose::new(Vec2::ZERO, 0.0);
        let foot = Vec2::new(10.0, 0.0);
        let mut gait = GaitState::new(0.0, hip, foot);
        let mut rng = rng();

        // Within a unit of the plant point: stays down.
        gait.advance(hip, Vec2::new(10.5, 0.0), &mut rng);
        assert_eq!(gait.phase(), StepPhase::Planted);

        // Dragged further: lifts, and the new goal is a stride target
        // within reach * 1.5 of the hip (reach plus maximal jitter).
        gait.advance(hip, Vec2::new(12.0, 0.0), &mut rng);
        assert_eq!(gait.phase(), StepPhase::Swinging);
        assert!(gait.goal().distance(hip.position) <= gait.reach() * 2.0);
    }

    #[test]
    fn stalled_swing_plants_where_it_landed() {
        let hip = Pose::new(Vec2::ZERO, 0.0);
        let foot = Vec2::new(10.0, 0.0);
        let mut gait = GaitState::new(0.0, hip, foot);
        let mut rng = rng();
        gait.advance(hip, Vec2::new(20.0, 0.0), &mut rng);
        assert_eq!(gait.phase(), StepPhase::Swinging);

        // First swing sample establishes forwardness; a second sample with
        // barely any forward progress stalls the swing.
        gait.advance(hip, Vec2::new(8.0, 3.0), &mut rng);
        let landing = Vec2::new(8.2, 3.0);
        gait.advance(hip, landing, &mut rng);
        assert_eq!(gait.phase(), StepPhase::Planted);
        assert_relative_eq!(gait.goal().x, landing.x);
        assert_relative_eq!(gait.goal().y, landing.y);
    }

    #[test]
    fn swing_cannot_outlive_a_stationary_foot() {
        let hip = Pose::new(Vec2::ZERO, 0.0);
        let foot = Vec2::new(10.0, 0.0);
        let mut gait = GaitState::new(0.0, hip, foot);
        let mut rng = rng();
        gait.advance(hip, Vec2::new(13.0, 0.0), &mut rng);
        assert_eq!(gait.phase(), StepPhase::Swinging);

        let frozen = Vec2::new(6.0, -2.0);
        let mut ticks = 0;
        while gait.phase() == StepPhase::Swinging {
            gait.advance(hip, frozen, &mut rng);
            ticks += 1;
            assert!(ticks < 4, "swing never stalled");
        }
        assert_eq!(gait.goal(), frozen);
    }
}
