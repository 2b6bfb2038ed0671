use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("mascot size must be positive, got {0}")]
    NonPositiveSize(f32),
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f32 },
    #[error("particle cap must be at most {max}, got {value}")]
    CapTooLarge { value: usize, max: usize },
    #[error("particle decay interval must be within 1..={max}ms, got {value}")]
    InvalidDecayInterval { value: u32, max: u32 },
    #[error("chase speed must be in (0, 1], got {0}")]
    InvalidSpeed(f32),
    #[error("stop distance must not be negative, got {0}")]
    NegativeStopDistance(f32),
    #[error("{name} probability must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f32 },
    #[error("particle size range is empty: {min}..{max}")]
    EmptySizeRange { min: f32, max: f32 },
    #[error("particle fade step must be positive, got {0}")]
    NonPositiveFadeStep(f32),
    #[error("{name} duration must be finite and not negative, got {value}")]
    InvalidDuration { name: &'static str, value: f64 },
    #[error("move-to-center bounds are inverted: min {min}ms > max {max}ms")]
    InvertedMoveBounds { min: f64, max: f64 },
    #[error("move speed must be positive, got {0} px/ms")]
    NonPositiveMoveSpeed(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("a transition is already running")]
    Busy,
    #[error("transition target is empty")]
    EmptyTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation rejected: {0}")]
    Rejected(String),
    #[error("navigation did not settle within {0}ms")]
    TimedOut(u64),
}
