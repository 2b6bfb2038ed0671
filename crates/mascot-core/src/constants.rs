// Shared tuning constants for the mascot. Web rendering constants live in the
// web crate's own `constants.rs`.

// Mascot body
pub const MASCOT_SIZE: f32 = 50.0; // side of the square bounding box, px
pub const RESTING_MARGIN: f32 = 80.0; // initial inset from the bottom-right corner

// Chase
pub const STOP_DISTANCE: f32 = 50.0; // deadband around the pointer, px
pub const CHASE_SPEED: f32 = 0.01; // fraction of the remaining vector per frame

// Decorative float ("wave") added while chasing
pub const WAVE_TIME_DIVISOR_MS: f64 = 500.0;
pub const WAVE_FREQ_X: f64 = 4.0;
pub const WAVE_FREQ_Y: f64 = 3.0;
pub const WAVE_AMP_X: f32 = 0.2;
pub const WAVE_AMP_Y: f32 = 0.3;

// Particles
pub const PARTICLE_CAP: usize = 100;
pub const PARTICLE_CAP_MAX: usize = 10_000;
pub const PARTICLE_CHASE_PROBABILITY: f32 = 0.3;
pub const PARTICLE_TRANSITION_PROBABILITY: f32 = 0.5;
pub const PARTICLE_JITTER: f32 = 10.0; // half-width of the scatter square
pub const PARTICLE_SIZE_MIN: f32 = 4.0;
pub const PARTICLE_SIZE_MAX: f32 = 8.0;
pub const PARTICLE_FADE_STEP: f32 = 0.05; // opacity removed per decay tick
pub const PARTICLE_DECAY_INTERVAL_MS: u32 = 50;
/// Upper bound accepted by `setInterval` (a signed 32-bit delay).
pub const PARTICLE_DECAY_INTERVAL_MAX_MS: u32 = i32::MAX as u32;

// Transition timing (ms)
pub const MOVE_TO_CENTER_MIN_MS: f64 = 400.0;
pub const MOVE_TO_CENTER_MAX_MS: f64 = 800.0;
pub const MOVE_PX_PER_MS: f64 = 1.0;
pub const STAR_CLOSE_MS: f64 = 500.0;
pub const NAVIGATION_HOLD_MS: f64 = 300.0;
pub const ARRIVAL_PULSE_MS: f64 = 300.0;
pub const STAR_OPEN_MS: f64 = 500.0;
pub const NAVIGATION_TIMEOUT_MS: f64 = 8000.0;
pub const MOUNT_FRAMES: u32 = 2; // frames rendered after navigation before the pulse

// Star mask cutout scale
pub const MASK_SCALE_OPEN: f32 = 5.0;
pub const MASK_SCALE_CLOSED: f32 = 0.0;

// Arrival pulse
pub const PULSE_SCALE: f32 = 2.0;
