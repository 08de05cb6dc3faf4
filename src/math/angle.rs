use std::f32::consts::TAU;

/// Wraps `angle` to within `PI` of `center` by subtracting the nearest
/// multiple of `TAU`.
///
/// Works for arbitrarily large accumulated angles, so callers can keep
/// integrating headings without trigonometric drift.
pub fn wrap_around(angle: f32, center: f32) -> f32 {
    angle - TAU * ((angle - center) / TAU + 0.5).floor()
}

/// Wraps `angle` to within `PI` of zero.
pub fn wrap(angle: f32) -> f32 {
    wrap_around(angle, 0.0)
}
