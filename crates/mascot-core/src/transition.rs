//! Page-transition choreography as an explicit state machine.
//!
//! The machine never sleeps or schedules anything itself. The host calls
//! [`TransitionMachine::tick`] once per rendered frame with the current time
//! and executes the [`Command`]s it returns; the result of the navigation
//! call comes back through [`TransitionMachine::navigation_settled`].

use crate::config::TransitionTiming;
use crate::error::{NavigationError, TransitionError};
use crate::geometry::ease_out_cubic;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Idle,
    /// Walking to the viewport center with the alert pose.
    Moving,
    /// Star cutout shrinking over the page.
    Closing,
    /// Fully covered; the route change happens here.
    Holding,
    /// Arrival pulse on the new page, still covered.
    PoffuEffect,
    /// Star cutout growing to reveal the new page.
    Opening,
}

impl Phase {
    pub const SEQUENCE: [Phase; 6] = [
        Phase::Idle,
        Phase::Moving,
        Phase::Closing,
        Phase::Holding,
        Phase::PoffuEffect,
        Phase::Opening,
    ];

    #[inline]
    pub fn next(self) -> Phase {
        match self {
            Phase::Idle => Phase::Moving,
            Phase::Moving => Phase::Closing,
            Phase::Closing => Phase::Holding,
            Phase::Holding => Phase::PoffuEffect,
            Phase::PoffuEffect => Phase::Opening,
            Phase::Opening => Phase::Idle,
        }
    }

    #[inline]
    pub fn is_idle(self) -> bool {
        self == Phase::Idle
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Moving => "moving",
            Phase::Closing => "closing",
            Phase::Holding => "holding",
            Phase::PoffuEffect => "poffuEffect",
            Phase::Opening => "opening",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one navigation call so late results can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NavigationTicket(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    PhaseChanged(Phase),
    /// Perform the route change and report back with the same ticket.
    Navigate {
        ticket: NavigationTicket,
        path: String,
    },
    /// Full document navigation; used when the router failed or hung.
    HardRedirect(String),
    Finished,
}

pub type Commands = SmallVec<[Command; 4]>;

/// Eased straight-line walk used during [`Phase::Moving`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Walk {
    pub from: Vec2,
    pub to: Vec2,
    pub duration_ms: f64,
}

impl Walk {
    pub fn position_at(&self, elapsed_ms: f64) -> Vec2 {
        let t = if self.duration_ms > 0.0 {
            (elapsed_ms / self.duration_ms) as f32
        } else {
            1.0
        };
        self.from.lerp(self.to, ease_out_cubic(t))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum NavState {
    NotStarted,
    Pending { ticket: NavigationTicket, since_ms: f64 },
    Settled { frames: u32 },
}

pub struct TransitionMachine {
    timing: TransitionTiming,
    phase: Phase,
    phase_started_ms: f64,
    target: Option<String>,
    walk: Option<Walk>,
    nav: NavState,
    next_ticket: u64,
    outbox: Commands,
}

impl TransitionMachine {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            phase: Phase::Idle,
            phase_started_ms: 0.0,
            target: None,
            walk: None,
            nav: NavState::NotStarted,
            next_ticket: 0,
            outbox: Commands::new(),
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        !self.phase.is_idle()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    pub fn walk(&self) -> Option<&Walk> {
        self.walk.as_ref()
    }

    /// Start a transition toward `path`, walking the mascot from `from` to
    /// `to`. Only allowed from [`Phase::Idle`].
    pub fn start(
        &mut self,
        path: &str,
        from: Vec2,
        to: Vec2,
        now_ms: f64,
    ) -> Result<(), TransitionError> {
        if self.is_transitioning() {
            return Err(TransitionError::Busy);
        }
        if path.is_empty() {
            return Err(TransitionError::EmptyTarget);
        }
        let duration_ms = self.timing.move_duration_ms(from.distance(to));
        log::info!(
            "[transition] start -> {} from=({:.1},{:.1}) walk={:.0}ms",
            path,
            from.x,
            from.y,
            duration_ms
        );
        self.target = Some(path.to_owned());
        self.walk = Some(Walk {
            from,
            to,
            duration_ms,
        });
        self.nav = NavState::NotStarted;
        self.enter(Phase::Moving, now_ms);
        Ok(())
    }

    /// Duration of the current phase, where it is time-bound.
    pub fn phase_duration_ms(&self) -> f64 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Moving => self.walk.map(|w| w.duration_ms).unwrap_or(0.0),
            Phase::Closing => self.timing.star_close_ms,
            Phase::Holding => self.timing.navigation_hold_ms,
            Phase::PoffuEffect => self.timing.arrival_pulse_ms,
            Phase::Opening => self.timing.star_open_ms,
        }
    }

    /// Fraction of the current phase's duration that has elapsed, in [0, 1].
    pub fn progress(&self, now_ms: f64) -> f32 {
        let duration = self.phase_duration_ms();
        if duration <= 0.0 {
            return 1.0;
        }
        (((now_ms - self.phase_started_ms) / duration) as f32).clamp(0.0, 1.0)
    }

    /// Point the walk at a new destination, keeping its origin and timing.
    pub fn retarget(&mut self, to: Vec2) {
        if let Some(walk) = self.walk.as_mut() {
            walk.to = to;
        }
    }

    /// Interpolated mascot origin while walking to the center.
    pub fn walk_position(&self, now_ms: f64) -> Option<Vec2> {
        match (self.phase, self.walk) {
            (Phase::Moving, Some(w)) => Some(w.position_at(now_ms - self.phase_started_ms)),
            _ => None,
        }
    }

    /// Advance by one rendered frame.
    pub fn tick(&mut self, now_ms: f64) -> Commands {
        if self.phase == Phase::Holding {
            match self.nav {
                NavState::Settled { frames } => {
                    self.nav = NavState::Settled {
                        frames: frames.saturating_add(1),
                    }
                }
                NavState::Pending { ticket, since_ms }
                    if now_ms - since_ms >= self.timing.navigation_timeout_ms =>
                {
                    let err = NavigationError::TimedOut(self.timing.navigation_timeout_ms as u64);
                    log::warn!("[nav] ticket {} {}; forcing full navigation", ticket.0, err);
                    self.fall_back_to_hard_redirect();
                }
                _ => {}
            }
        }
        while self.try_advance(now_ms) {}
        std::mem::take(&mut self.outbox)
    }

    /// Report the outcome of the navigation issued with `ticket`. Returns
    /// `false` when the ticket is not the one being waited on.
    pub fn navigation_settled(
        &mut self,
        ticket: NavigationTicket,
        result: Result<(), NavigationError>,
    ) -> bool {
        match self.nav {
            NavState::Pending { ticket: waiting, .. } if waiting == ticket => {}
            _ => {
                log::debug!("[nav] ignoring stale result for ticket {}", ticket.0);
                return false;
            }
        }
        match result {
            Ok(()) => {
                log::info!("[nav] ticket {} settled", ticket.0);
                self.nav = NavState::Settled { frames: 0 };
            }
            Err(e) => {
                log::warn!("[nav] ticket {} failed: {}; forcing full navigation", ticket.0, e);
                self.fall_back_to_hard_redirect();
            }
        }
        true
    }

    fn fall_back_to_hard_redirect(&mut self) {
        if let Some(path) = self.target.clone() {
            self.outbox.push(Command::HardRedirect(path));
        }
        self.nav = NavState::Settled { frames: 0 };
    }

    fn try_advance(&mut self, now_ms: f64) -> bool {
        let elapsed = now_ms - self.phase_started_ms;
        let ready = match self.phase {
            Phase::Idle => false,
            Phase::Holding => {
                elapsed >= self.timing.navigation_hold_ms
                    && matches!(self.nav, NavState::Settled { frames } if frames >= self.timing.mount_frames)
            }
            _ => elapsed >= self.phase_duration_ms(),
        };
        if ready {
            self.enter(self.phase.next(), now_ms);
        }
        ready
    }

    fn enter(&mut self, phase: Phase, now_ms: f64) {
        log::debug!("[transition] {} -> {}", self.phase, phase);
        self.phase = phase;
        self.phase_started_ms = now_ms;
        self.outbox.push(Command::PhaseChanged(phase));
        match phase {
            Phase::Holding => {
                let ticket = NavigationTicket(self.next_ticket);
                self.next_ticket += 1;
                self.nav = NavState::Pending {
                    ticket,
                    since_ms: now_ms,
                };
                if let Some(path) = self.target.clone() {
                    self.outbox.push(Command::Navigate { ticket, path });
                }
            }
            Phase::Idle => {
                self.target = None;
                self.walk = None;
                self.nav = NavState::NotStarted;
                self.outbox.push(Command::Finished);
                log::info!("[transition] finished");
            }
            _ => {}
        }
    }
}
