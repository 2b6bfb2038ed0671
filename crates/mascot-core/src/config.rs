//! Runtime configuration for the mascot.
//!
//! Every field has a default taken from `constants.rs`, so hosts only pass
//! the keys they want to change. Deserialization uses camelCase keys to match
//! the JavaScript options object handed to `mount`.

use crate::constants::*;
use crate::error::ConfigError;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MascotConfig {
    pub size: f32,
    pub resting_margin: f32,
    pub chase: ChaseConfig,
    pub particles: ParticleConfig,
    pub timing: TransitionTiming,
    pub sprites: SpriteSet,
    /// Opt-in: skip the transition choreography when the user asks for
    /// reduced motion.
    pub honor_reduced_motion: bool,
}

impl Default for MascotConfig {
    fn default() -> Self {
        Self {
            size: MASCOT_SIZE,
            resting_margin: RESTING_MARGIN,
            chase: ChaseConfig::default(),
            particles: ParticleConfig::default(),
            timing: TransitionTiming::default(),
            sprites: SpriteSet::default(),
            honor_reduced_motion: false,
        }
    }
}

impl MascotConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("size", self.size)?;
        if !(self.size > 0.0) {
            return Err(ConfigError::NonPositiveSize(self.size));
        }
        finite("resting margin", self.resting_margin)?;
        self.chase.validate()?;
        self.particles.validate()?;
        self.timing.validate()
    }
}

#[inline]
fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChaseConfig {
    pub stop_distance: f32,
    pub speed: f32,
    pub wave: bool,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            stop_distance: STOP_DISTANCE,
            speed: CHASE_SPEED,
            wave: true,
        }
    }
}

impl ChaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed > 0.0 && self.speed <= 1.0) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        finite("stop distance", self.stop_distance)?;
        if !(self.stop_distance >= 0.0) {
            return Err(ConfigError::NegativeStopDistance(self.stop_distance));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    pub cap: usize,
    pub chase_probability: f32,
    pub transition_probability: f32,
    pub jitter: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub fade_step: f32,
    pub decay_interval_ms: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            cap: PARTICLE_CAP,
            chase_probability: PARTICLE_CHASE_PROBABILITY,
            transition_probability: PARTICLE_TRANSITION_PROBABILITY,
            jitter: PARTICLE_JITTER,
            size_min: PARTICLE_SIZE_MIN,
            size_max: PARTICLE_SIZE_MAX,
            fade_step: PARTICLE_FADE_STEP,
            decay_interval_ms: PARTICLE_DECAY_INTERVAL_MS,
        }
    }
}

impl ParticleConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("chase", self.chase_probability),
            ("transition", self.transition_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        finite("particle jitter", self.jitter)?;
        finite("particle size min", self.size_min)?;
        finite("particle size max", self.size_max)?;
        finite("particle fade step", self.fade_step)?;
        if !(self.size_min < self.size_max) {
            return Err(ConfigError::EmptySizeRange {
                min: self.size_min,
                max: self.size_max,
            });
        }
        if !(self.fade_step > 0.0) {
            return Err(ConfigError::NonPositiveFadeStep(self.fade_step));
        }
        if self.cap > PARTICLE_CAP_MAX {
            return Err(ConfigError::CapTooLarge {
                value: self.cap,
                max: PARTICLE_CAP_MAX,
            });
        }
        if !(1..=PARTICLE_DECAY_INTERVAL_MAX_MS).contains(&self.decay_interval_ms) {
            return Err(ConfigError::InvalidDecayInterval {
                value: self.decay_interval_ms,
                max: PARTICLE_DECAY_INTERVAL_MAX_MS,
            });
        }
        Ok(())
    }
}

/// Per-phase durations in milliseconds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransitionTiming {
    pub move_to_center_min_ms: f64,
    pub move_to_center_max_ms: f64,
    pub move_px_per_ms: f64,
    pub star_close_ms: f64,
    pub navigation_hold_ms: f64,
    pub arrival_pulse_ms: f64,
    pub star_open_ms: f64,
    pub navigation_timeout_ms: f64,
    pub mount_frames: u32,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            move_to_center_min_ms: MOVE_TO_CENTER_MIN_MS,
            move_to_center_max_ms: MOVE_TO_CENTER_MAX_MS,
            move_px_per_ms: MOVE_PX_PER_MS,
            star_close_ms: STAR_CLOSE_MS,
            navigation_hold_ms: NAVIGATION_HOLD_MS,
            arrival_pulse_ms: ARRIVAL_PULSE_MS,
            star_open_ms: STAR_OPEN_MS,
            navigation_timeout_ms: NAVIGATION_TIMEOUT_MS,
            mount_frames: MOUNT_FRAMES,
        }
    }
}

impl TransitionTiming {
    /// Duration of the walk to the center for a given travel distance.
    pub fn move_duration_ms(&self, distance: f32) -> f64 {
        let raw = distance as f64 / self.move_px_per_ms;
        raw.min(self.move_to_center_max_ms)
            .max(self.move_to_center_min_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("move-to-center min", self.move_to_center_min_ms),
            ("move-to-center max", self.move_to_center_max_ms),
            ("star close", self.star_close_ms),
            ("navigation hold", self.navigation_hold_ms),
            ("arrival pulse", self.arrival_pulse_ms),
            ("star open", self.star_open_ms),
            ("navigation timeout", self.navigation_timeout_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDuration { name, value });
            }
        }
        if self.move_to_center_min_ms > self.move_to_center_max_ms {
            return Err(ConfigError::InvertedMoveBounds {
                min: self.move_to_center_min_ms,
                max: self.move_to_center_max_ms,
            });
        }
        if !(self.move_px_per_ms > 0.0) {
            return Err(ConfigError::NonPositiveMoveSpeed(self.move_px_per_ms));
        }
        Ok(())
    }
}

/// Asset paths for the mascot poses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpriteSet {
    pub default: String,
    pub notice: String,
    pub back: String,
    pub side: String,
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self {
            default: "/assets/images/mascot/starmy-poffu-default.svg".into(),
            notice: "/assets/images/mascot/starmy-poffu-notice.svg".into(),
            back: "/assets/images/mascot/starmy-poffu-back.svg".into(),
            side: "/assets/images/mascot/starmy-poffu-side.svg".into(),
        }
    }
}
