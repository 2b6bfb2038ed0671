//! The mascot's single state container.
//!
//! `Mascot` owns position, pointer target, heading, particles and the
//! transition machine. Pointer-driven chase and heading updates run only
//! while the machine is idle; `is_transitioning` is derived from the phase
//! so the two can never disagree.

use crate::config::MascotConfig;
use crate::direction::Direction;
use crate::error::{ConfigError, NavigationError, TransitionError};
use crate::geometry::{
    center_of, centered_origin, chase_step, clamp_to_viewport, resting_origin, Viewport,
};
use crate::interceptor::{classify_click, IgnoreReason, Interception, LinkClick};
use crate::overlay::{overlay_for, OverlayState};
use crate::particles::ParticleEmitter;
use crate::sprite::{pose_for, Pose};
use crate::transition::{Commands, NavigationTicket, Phase, TransitionMachine};
use glam::Vec2;
use url::Url;

/// Live geometry of the rendered mascot element.
pub trait GeometryProbe {
    /// Top-left corner of the mascot as currently laid out, if measurable.
    fn mascot_origin(&self) -> Option<Vec2>;
}

/// Probe that never measures anything; the tracked position is used instead.
pub struct NoProbe;

impl GeometryProbe for NoProbe {
    fn mascot_origin(&self) -> Option<Vec2> {
        None
    }
}

pub struct Mascot {
    config: MascotConfig,
    viewport: Viewport,
    position: Vec2,
    target: Vec2,
    direction: Direction,
    hovered: bool,
    reduced_motion: bool,
    transition: TransitionMachine,
    particles: ParticleEmitter,
}

impl Mascot {
    pub fn new(config: MascotConfig, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let position = resting_origin(viewport, config.size, config.resting_margin);
        log::info!(
            "[mascot] viewport={}x{} start=({:.0},{:.0})",
            viewport.width,
            viewport.height,
            position.x,
            position.y
        );
        Ok(Self {
            transition: TransitionMachine::new(config.timing.clone()),
            particles: ParticleEmitter::new(config.particles.clone(), seed),
            config,
            viewport,
            position,
            target: position,
            direction: Direction::South,
            hovered: false,
            reduced_motion: false,
        })
    }

    pub fn config(&self) -> &MascotConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn center(&self) -> Vec2 {
        center_of(self.position, self.config.size)
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn phase(&self) -> Phase {
        self.transition.phase()
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_transitioning()
    }

    pub fn transition(&self) -> &TransitionMachine {
        &self.transition
    }

    pub fn particles(&self) -> &ParticleEmitter {
        &self.particles
    }

    /// Test and debugging hook: place the mascot directly.
    pub fn set_position(&mut self, origin: Vec2) {
        self.position = clamp_to_viewport(origin, self.viewport, self.config.size);
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.is_transitioning() {
            // the walk lands on the center of whatever viewport is current
            self.transition.retarget(self.walk_destination());
        } else {
            self.position = clamp_to_viewport(self.position, viewport, self.config.size);
        }
    }

    fn walk_destination(&self) -> Vec2 {
        clamp_to_viewport(
            centered_origin(self.viewport, self.config.size),
            self.viewport,
            self.config.size,
        )
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered && !self.is_transitioning();
    }

    pub fn pointer_moved(&mut self, pointer: Vec2) {
        if self.is_transitioning() {
            return;
        }
        self.target = pointer;
        self.direction = Direction::toward(self.center(), pointer);
    }

    /// Classify an anchor click and start the transition when it qualifies.
    ///
    /// A qualifying click while a transition is already running is still
    /// reported as `Transition` (the caller suppresses the default action)
    /// but leaves the running transition untouched.
    pub fn intercept_click(
        &mut self,
        click: &LinkClick,
        current: &Url,
        probe: &dyn GeometryProbe,
        now_ms: f64,
    ) -> Interception {
        if self.reduced_motion && self.config.honor_reduced_motion {
            return Interception::Ignore(IgnoreReason::ReducedMotion);
        }
        let decision = classify_click(click, current);
        if let Interception::Transition(path) = &decision {
            if let Err(e) = self.begin_transition(path, probe, now_ms) {
                log::debug!("[mascot] click on {} swallowed: {}", path, e);
            }
        }
        decision
    }

    pub fn begin_transition(
        &mut self,
        path: &str,
        probe: &dyn GeometryProbe,
        now_ms: f64,
    ) -> Result<(), TransitionError> {
        if self.is_transitioning() {
            return Err(TransitionError::Busy);
        }
        let from = probe
            .mascot_origin()
            .filter(|p| p.is_finite())
            .unwrap_or(self.position);
        let to = self.walk_destination();
        self.transition.start(path, from, to, now_ms)?;
        self.position = from;
        self.hovered = false;
        Ok(())
    }

    /// One animation frame. Returns the commands the host must carry out.
    pub fn frame(&mut self, now_ms: f64) -> Commands {
        if !self.is_transitioning() {
            self.chase(now_ms);
            return Commands::new();
        }
        let commands = self.transition.tick(now_ms);
        if let Some(p) = self.transition.walk_position(now_ms) {
            self.position = clamp_to_viewport(p, self.viewport, self.config.size);
            let center = self.center();
            let chance = self.particles.transition_probability();
            self.particles.maybe_emit(center, chance);
        } else if let Some(walk) = self.transition.walk() {
            self.position = walk.to;
        }
        commands
    }

    fn chase(&mut self, now_ms: f64) {
        let step = chase_step(
            self.position,
            self.target,
            self.viewport,
            self.config.size,
            &self.config.chase,
            now_ms,
        );
        if step.settled {
            self.direction = Direction::South;
            self.position = clamp_to_viewport(self.position, self.viewport, self.config.size);
            return;
        }
        let center = self.center();
        let chance = self.particles.chase_probability();
        self.particles.maybe_emit(center, chance);
        self.position = step.position;
    }

    pub fn decay_particles(&mut self) {
        self.particles.decay();
    }

    pub fn navigation_settled(
        &mut self,
        ticket: NavigationTicket,
        result: Result<(), NavigationError>,
    ) -> bool {
        self.transition.navigation_settled(ticket, result)
    }

    pub fn pose(&self) -> Pose {
        pose_for(self.phase(), self.hovered, self.direction)
    }

    pub fn overlay(&self, now_ms: f64) -> OverlayState {
        overlay_for(self.phase(), self.transition.progress(now_ms))
    }
}
