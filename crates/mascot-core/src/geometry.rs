//! Chase geometry: per-frame easing toward the pointer, viewport clamping and
//! the easing curves used by the transition.
//!
//! Positions are the top-left corner of the mascot's square box in CSS
//! pixels; distances are always measured from the box center.

use crate::config::ChaseConfig;
use crate::constants::{
    WAVE_AMP_X, WAVE_AMP_Y, WAVE_FREQ_X, WAVE_FREQ_Y, WAVE_TIME_DIVISOR_MS,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChaseStep {
    pub position: Vec2,
    /// Center within the stop distance of the target; position untouched.
    pub settled: bool,
    pub distance: f32,
}

#[inline]
pub fn center_of(origin: Vec2, size: f32) -> Vec2 {
    origin + Vec2::splat(size * 0.5)
}

/// Clamp a box origin so the whole box stays on screen. A viewport smaller
/// than the box collapses to the origin rather than inverting the range.
#[inline]
pub fn clamp_to_viewport(origin: Vec2, viewport: Viewport, size: f32) -> Vec2 {
    Vec2::new(
        origin.x.min(viewport.width - size).max(0.0),
        origin.y.min(viewport.height - size).max(0.0),
    )
}

/// Origin that puts the box center on the viewport center.
#[inline]
pub fn centered_origin(viewport: Viewport, size: f32) -> Vec2 {
    Vec2::new(
        viewport.width * 0.5 - size * 0.5,
        viewport.height * 0.5 - size * 0.5,
    )
}

/// Initial resting spot near the bottom-right corner.
#[inline]
pub fn resting_origin(viewport: Viewport, size: f32, margin: f32) -> Vec2 {
    clamp_to_viewport(
        Vec2::new(
            viewport.width - size - margin,
            viewport.height - size - margin,
        ),
        viewport,
        size,
    )
}

/// Small floating offset, two independent sinusoids.
#[inline]
pub fn wave_offset(now_ms: f64) -> Vec2 {
    let t = now_ms / WAVE_TIME_DIVISOR_MS;
    Vec2::new(
        (t * WAVE_FREQ_X).sin() as f32 * WAVE_AMP_X,
        (t * WAVE_FREQ_Y).cos() as f32 * WAVE_AMP_Y,
    )
}

pub fn chase_step(
    position: Vec2,
    target: Vec2,
    viewport: Viewport,
    size: f32,
    params: &ChaseConfig,
    now_ms: f64,
) -> ChaseStep {
    let delta = target - center_of(position, size);
    let distance = delta.length();
    if distance < params.stop_distance {
        return ChaseStep {
            position,
            settled: true,
            distance,
        };
    }
    let mut next = position + delta * params.speed;
    if params.wave {
        next += wave_offset(now_ms);
    }
    ChaseStep {
        position: clamp_to_viewport(next, viewport, size),
        settled: false,
        distance,
    }
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_viewport_collapses_to_origin() {
        let p = clamp_to_viewport(Vec2::new(30.0, -5.0), Viewport::default(), 50.0);
        assert_eq!(p, Vec2::ZERO);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn wave_is_small() {
        for i in 0..100 {
            let w = wave_offset(i as f64 * 37.0);
            assert!(w.x.abs() <= WAVE_AMP_X + 1e-6);
            assert!(w.y.abs() <= WAVE_AMP_Y + 1e-6);
        }
    }
}
