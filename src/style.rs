// Inline style strings for the mascot, its dust and the transition layers.
// Kept free of web-sys so the host tests can include it directly.

use crate::constants::{
    GLOW_FILTER, PARTICLE_COLOR, PARTICLE_GLOW_FACTOR, PULSE_TRANSITION_MS, STAR_GROUP_ID,
    STAR_MASK_ID, STAR_POINTS, Z_COVER, Z_MASCOT, Z_PARTICLES, Z_STAR_OVERLAY,
};

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.2}px", v)
}

pub fn mascot_style(x: f32, y: f32, size: f32, scale: f32, glow: bool) -> String {
    let (filter, transition) = if glow {
        (
            GLOW_FILTER.to_string(),
            format!(
                "transform {ms}ms ease-out, filter {ms}ms ease-out",
                ms = PULSE_TRANSITION_MS
            ),
        )
    } else {
        ("none".to_string(), "none".to_string())
    };
    format!(
        "position:fixed;left:{};top:{};width:{};height:{};z-index:{};\
         pointer-events:auto;cursor:pointer;transform:scale({});filter:{};transition:{}",
        px(x),
        px(y),
        px(size),
        px(size),
        Z_MASCOT,
        scale,
        filter,
        transition
    )
}

#[inline]
pub fn sprite_style(size: f32, flip_x: bool) -> String {
    format!(
        "width:{};height:{};user-select:none;transform:scaleX({})",
        px(size),
        px(size),
        if flip_x { -1 } else { 1 }
    )
}

pub fn particle_style(x: f32, y: f32, size: f32, opacity: f32) -> String {
    format!(
        "position:fixed;left:{};top:{};width:{};height:{};border-radius:50%;\
         background-color:{};opacity:{:.2};transform:translate(-50%,-50%);\
         box-shadow:0 0 {} {};pointer-events:none;transition:opacity 0.3s ease-out",
        px(x),
        px(y),
        px(size),
        px(size),
        PARTICLE_COLOR,
        opacity.max(0.0),
        px(size * PARTICLE_GLOW_FACTOR),
        PARTICLE_COLOR
    )
}

#[inline]
pub fn particle_layer_style() -> String {
    format!(
        "position:fixed;inset:0;pointer-events:none;z-index:{}",
        Z_PARTICLES
    )
}

#[inline]
pub fn cover_style(visible: bool) -> String {
    format!(
        "position:fixed;inset:0;background:#000;pointer-events:none;z-index:{};display:{}",
        Z_COVER,
        if visible { "block" } else { "none" }
    )
}

#[inline]
pub fn star_overlay_style(visible: bool) -> String {
    format!(
        "position:fixed;inset:0;width:100vw;height:100vh;overflow:hidden;\
         pointer-events:none;z-index:{};display:{}",
        Z_STAR_OVERLAY,
        if visible { "block" } else { "none" }
    )
}

/// SVG `transform` for the star group: centered in the 100x100 box.
#[inline]
pub fn star_transform(scale: f32) -> String {
    format!("translate(50 50) scale({:.4})", scale.max(0.0))
}

/// Black overlay with a star-shaped hole cut through a mask.
pub fn star_overlay_markup(scale: f32) -> String {
    format!(
        r#"<svg width="100%" height="100%" viewBox="0 0 100 100" preserveAspectRatio="xMidYMid slice" xmlns="http://www.w3.org/2000/svg" style="display:block" aria-hidden="true"><defs><mask id="{mask}"><rect x="0" y="0" width="100" height="100" fill="white"/><g id="{group}" transform="{transform}"><polygon points="{points}" fill="black"/></g></mask></defs><rect x="0" y="0" width="100%" height="100%" fill="black" mask="url(#{mask})"/></svg>"#,
        mask = STAR_MASK_ID,
        group = STAR_GROUP_ID,
        transform = star_transform(scale),
        points = STAR_POINTS,
    )
}
