// Host-side tests for the inline style builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use constants::*;
use style::*;

#[test]
fn px_formats_two_decimals() {
    assert_eq!(px(4.0), "4.00px");
    assert_eq!(px(7.5), "7.50px");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mascot_sits_above_every_layer() {
    let css = mascot_style(10.0, 20.0, 50.0, 1.0, false);
    assert!(css.contains("left:10.00px"));
    assert!(css.contains("top:20.00px"));
    assert!(css.contains(&format!("z-index:{}", Z_MASCOT)));
    assert!(css.contains("filter:none"));
    assert!(Z_MASCOT > Z_PARTICLES && Z_PARTICLES > Z_STAR_OVERLAY && Z_STAR_OVERLAY > Z_COVER);
}

#[test]
fn pulse_scales_and_glows() {
    let css = mascot_style(0.0, 0.0, 50.0, 2.0, true);
    assert!(css.contains("transform:scale(2)"));
    assert!(css.contains(GLOW_FILTER));
    assert!(css.contains("transform 100ms ease-out"));
}

#[test]
fn sprite_flips_only_when_asked() {
    assert!(sprite_style(50.0, true).ends_with("scaleX(-1)"));
    assert!(sprite_style(50.0, false).ends_with("scaleX(1)"));
}

#[test]
fn particle_style_clamps_opacity() {
    let css = particle_style(5.0, 6.0, 4.0, -0.01);
    assert!(css.contains("opacity:0.00"));
    assert!(css.contains(PARTICLE_COLOR));
    assert!(css.contains("box-shadow:0 0 6.00px"));
}

#[test]
fn layers_toggle_display() {
    assert!(cover_style(true).contains("display:block"));
    assert!(cover_style(false).contains("display:none"));
    assert!(star_overlay_style(false).contains("display:none"));
}

#[test]
fn star_markup_references_its_mask() {
    let svg = star_overlay_markup(5.0);
    assert!(svg.contains(&format!(r#"<mask id="{}">"#, STAR_MASK_ID)));
    assert!(svg.contains(&format!("url(#{})", STAR_MASK_ID)));
    assert!(svg.contains(&format!(r#"id="{}""#, STAR_GROUP_ID)));
    assert!(svg.contains("translate(50 50) scale(5.0000)"));
    assert!(svg.contains(STAR_POINTS));
}

#[test]
fn star_transform_never_goes_negative() {
    assert_eq!(star_transform(-0.5), "translate(50 50) scale(0.0000)");
}
