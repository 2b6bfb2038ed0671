// DOM ids, stacking order and paint constants for the web frontend.

// Element ids
pub const MASCOT_ID: &str = "mascot";
pub const PARTICLE_LAYER_ID: &str = "mascot-dust";
pub const COVER_ID: &str = "mascot-cover";
pub const STAR_OVERLAY_ID: &str = "mascot-star-overlay";
pub const STAR_MASK_ID: &str = "mascot-star-mask";
pub const STAR_GROUP_ID: &str = "mascot-star-group";

// Stacking: page < cover < star mask < dust < mascot
pub const Z_COVER: i32 = 9998;
pub const Z_STAR_OVERLAY: i32 = 9999;
pub const Z_PARTICLES: i32 = 10000;
pub const Z_MASCOT: i32 = 10001;

// Paint
pub const PARTICLE_COLOR: &str = "#8D76D1";
pub const PARTICLE_GLOW_FACTOR: f32 = 1.5; // box-shadow blur relative to particle size
pub const GLOW_FILTER: &str = "drop-shadow(0 0 8px rgba(141, 118, 209, 0.8))";
pub const PULSE_TRANSITION_MS: u32 = 100;

// Star cutout, centered on (0,0) inside a 100x100 view box
pub const STAR_POINTS: &str = "0,-40 11,-12 40,-12 16,6 25,36 0,18 -25,36 -16,6 -40,-12 -11,-12";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
