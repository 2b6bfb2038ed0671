//! What the full-screen layers look like in each phase.
//!
//! Two layers exist: the star mask (opaque overlay with a star-shaped hole
//! whose scale animates) and the plain cover shown while the route changes.
//! The mascot itself always renders above both.

use crate::constants::{MASK_SCALE_CLOSED, MASK_SCALE_OPEN};
use crate::geometry::ease_in_out_cubic;
use crate::transition::Phase;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayState {
    pub mask_visible: bool,
    /// Scale of the star cutout; `MASK_SCALE_OPEN` shows the whole page,
    /// `MASK_SCALE_CLOSED` hides it.
    pub mask_scale: f32,
    pub cover_visible: bool,
}

impl OverlayState {
    pub const HIDDEN: OverlayState = OverlayState {
        mask_visible: false,
        mask_scale: MASK_SCALE_OPEN,
        cover_visible: false,
    };
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn overlay_for(phase: Phase, progress: f32) -> OverlayState {
    match phase {
        Phase::Idle | Phase::Moving => OverlayState::HIDDEN,
        Phase::Closing => OverlayState {
            mask_visible: true,
            mask_scale: lerp(MASK_SCALE_OPEN, MASK_SCALE_CLOSED, ease_in_out_cubic(progress)),
            cover_visible: false,
        },
        Phase::Holding => OverlayState {
            mask_visible: true,
            mask_scale: MASK_SCALE_CLOSED,
            cover_visible: true,
        },
        Phase::PoffuEffect => OverlayState {
            mask_visible: false,
            mask_scale: MASK_SCALE_CLOSED,
            cover_visible: true,
        },
        Phase::Opening => OverlayState {
            mask_visible: true,
            mask_scale: lerp(MASK_SCALE_CLOSED, MASK_SCALE_OPEN, ease_in_out_cubic(progress)),
            cover_visible: false,
        },
    }
}
