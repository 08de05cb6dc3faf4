/// Tuning for one drive axis (forward travel or turning).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveParams {
    /// Speed gained per tick while the drive is engaged.
    pub accel: f32,
    /// Forward: floor subtracted from the integrated speed each tick
    /// without draining it. Turn: decay toward zero that snaps once the
    /// speed falls inside it.
    pub friction: f32,
    /// Fraction of the integrated speed lost per tick.
    pub resistance: f32,
    /// Forward: target distance below which the drive disengages.
    /// Turn: heading error below which no correction is applied.
    pub threshold: f32,
}

impl DriveParams {
    pub fn new(accel: f32, friction: f32, resistance: f32, threshold: f32) -> Self {
        Self {
            accel,
            friction,
            resistance,
            threshold,
        }
    }
}

/// Integrated body motion state: forward and angular speed plus their
/// drive tunings.
#[derive(Debug, Clone)]
pub(crate) struct Locomotion {
    pub(crate) forward: DriveParams,
    pub(crate) turn: DriveParams,
    f_speed: f32,
    r_speed: f32,
}

impl Locomotion {
    pub(crate) fn new(forward: DriveParams, turn: DriveParams) -> Self {
        Self {
            forward,
            turn,
            f_speed: 0.0,
            r_speed: 0.0,
        }
    }

    pub(crate) fn forward_speed(&self) -> f32 {
        self.f_speed
    }

    pub(crate) fn turn_speed(&self) -> f32 {
        self.r_speed
    }

    /// Integrates forward speed for one tick and returns the effective
    /// travel distance. Friction is a floor on the output, not a drain on
    /// the integrated speed.
    pub(crate) fn advance_forward(&mut self, dist: f32, accel: f32) -> f32 {
        if dist > self.forward.threshold {
            self.f_speed += accel;
        }
        self.f_speed *= 1.0 - self.forward.resistance;
        (self.f_speed - self.forward.friction).max(0.0)
    }

    /// Integrates angular speed for one tick given the signed heading
    /// error `dif` and the target distance, and returns the new angular
    /// speed. Friction here is sign-preserving and snaps to exactly zero
    /// once the speed falls within it.
    pub(crate) fn advance_turn(&mut self, dif: f32, dist: f32) -> f32 {
        if dif.abs() > self.turn.threshold && dist > self.forward.threshold {
            let side = if dif > 0.0 { 1.0 } else { -1.0 };
            self.r_speed -= self.turn.accel * side;
        }
        self.r_speed *= 1.0 - self.turn.resistance;
        if self.r_speed.abs() > self.turn.friction {
            let side = if self.r_speed > 0.0 { 1.0 } else { -1.0 };
            self.r_speed -= self.turn.friction * side;
        } else {
            self.r_speed = 0.0;
        }
        self.r_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forward_friction_floors_without_draining() {
        let mut motion = Locomotion::new(
            DriveParams::new(1.0, 0.5, 0.0, 0.0),
            DriveParams::new(0.0, 0.0, 0.0, 10.0),
        );
        assert_relative_eq!(motion.advance_forward(100.0, 1.0), 0.5);
        assert_relative_eq!(motion.forward_speed(), 1.0);
        assert_relative_eq!(motion.advance_forward(100.0, 1.0), 1.5);
    }

    #[test]
    fn forward_disengages_below_threshold() {
        let mut motion = Locomotion::new(
            DriveParams::new(1.0, 0.0, 0.0, 16.0),
            DriveParams::new(0.0, 0.0, 0.0, 10.0),
        );
        assert_relative_eq!(motion.advance_forward(5.0, 1.0), 0.0);
        assert_relative_eq!(motion.advance_forward(20.0, 1.0), 1.0);
    }

    #[test]
    fn forward_resistance_decays_speed() {
        let mut motion = Locomotion::new(
            DriveParams::new(1.0, 0.0, 0.5, 0.0),
            DriveParams::new(0.0, 0.0, 0.0, 10.0),
        );
        assert_relative_eq!(motion.advance_forward(100.0, 1.0), 0.5);
        assert_relative_eq!(motion.advance_forward(100.0, 0.0), 0.25);
    }

    #[test]
    fn turn_pushes_against_heading_error() {
        let mut motion = Locomotion::new(
            DriveParams::new(0.0, 0.0, 0.0, 0.0),
            DriveParams::new(0.5, 0.0, 0.0, 0.3),
        );
        // Positive error: angular speed goes negative.
        assert!(motion.advance_turn(1.0, 100.0) < 0.0);
        // And the other way.
        let mut motion = Locomotion::new(
            DriveParams::new(0.0, 0.0, 0.0, 0.0),
            DriveParams::new(0.5, 0.0, 0.0, 0.3),
        );
        assert!(motion.advance_turn(-1.0, 100.0) > 0.0);
    }

    #[test]
    fn turn_friction_snaps_to_exact_zero() {
        let mut motion = Locomotion::new(
            DriveParams::new(0.0, 0.0, 0.0, 0.0),
            DriveParams::new(0.5, 0.4, 0.0, 0.3),
        );
        let spun = motion.advance_turn(1.0, 100.0);
        assert_relative_eq!(spun, -0.1);
        // Error gone: residual speed is inside the friction band and
        // snaps to zero rather than oscillating.
        assert_eq!(motion.advance_turn(0.0, 100.0), 0.0);
        assert_eq!(motion.turn_speed(), 0.0);
    }
}
