//! Dust motes trailing the mascot.
//!
//! Emission happens on animation frames while the mascot is relocating;
//! fading runs on its own fixed-rate timer so the fade speed does not depend
//! on the display refresh rate.

use crate::config::ParticleConfig;
use crate::constants::PARTICLE_CAP;
use glam::Vec2;
use rand::prelude::*;
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub size: f32,
}

pub struct ParticleEmitter {
    params: ParticleConfig,
    particles: VecDeque<Particle>,
    next_id: u64,
    rng: StdRng,
}

impl ParticleEmitter {
    pub fn new(params: ParticleConfig, seed: u64) -> Self {
        Self {
            particles: VecDeque::with_capacity(params.cap.min(PARTICLE_CAP)),
            params,
            next_id: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> impl ExactSizeIterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn chase_probability(&self) -> f32 {
        self.params.chase_probability
    }

    pub fn transition_probability(&self) -> f32 {
        self.params.transition_probability
    }

    /// Roll once; on success spawn a mote near `center`. Returns whether one
    /// was spawned.
    pub fn maybe_emit(&mut self, center: Vec2, probability: f32) -> bool {
        if self.rng.gen::<f32>() >= probability {
            return false;
        }
        self.emit(center);
        true
    }

    pub fn emit(&mut self, center: Vec2) {
        let j = self.params.jitter;
        let scatter = if j > 0.0 {
            Vec2::new(self.rng.gen_range(-j..=j), self.rng.gen_range(-j..=j))
        } else {
            Vec2::ZERO
        };
        let size = self
            .rng
            .gen_range(self.params.size_min..self.params.size_max);
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.particles.push_back(Particle {
            id,
            x: center.x + scatter.x,
            y: center.y + scatter.y,
            opacity: 1.0,
            size,
        });
        while self.particles.len() > self.params.cap {
            self.particles.pop_front();
        }
    }

    /// One fade tick: lower every opacity by the fade step and drop the
    /// motes that reached zero.
    pub fn decay(&mut self) {
        let step = self.params.fade_step;
        for p in &mut self.particles {
            p.opacity -= step;
        }
        self.particles.retain(|p| p.opacity > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_zero_never_emits() {
        let mut e = ParticleEmitter::new(ParticleConfig::default(), 7);
        for _ in 0..500 {
            assert!(!e.maybe_emit(Vec2::ZERO, 0.0));
        }
        assert!(e.is_empty());
    }

    #[test]
    fn ids_are_monotonic() {
        let mut e = ParticleEmitter::new(ParticleConfig::default(), 7);
        for _ in 0..5 {
            e.emit(Vec2::new(10.0, 10.0));
        }
        let ids: Vec<u64> = e.particles().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }
}
