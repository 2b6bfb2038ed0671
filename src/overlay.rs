use crate::constants::{COVER_ID, STAR_GROUP_ID, STAR_OVERLAY_ID};
use crate::{dom, style};
use anyhow::anyhow;
use mascot_core::constants::MASK_SCALE_OPEN;
use mascot_core::OverlayState;
use web_sys as web;

/// The two full-screen transition layers: the star mask and the plain cover.
pub struct Overlay {
    star_root: web::HtmlElement,
    star_group: web::Element,
    cover: web::HtmlElement,
    last: Option<OverlayState>,
}

impl Overlay {
    pub fn build(document: &web::Document, body: &web::HtmlElement) -> anyhow::Result<Self> {
        let cover = dom::create_div(document, COVER_ID, &style::cover_style(false))?;
        let star_root =
            dom::create_div(document, STAR_OVERLAY_ID, &style::star_overlay_style(false))?;
        star_root.set_inner_html(&style::star_overlay_markup(MASK_SCALE_OPEN));
        let star_group = star_root
            .query_selector(&format!("#{}", STAR_GROUP_ID))
            .map_err(|e| anyhow!("query star group: {:?}", e))?
            .ok_or_else(|| anyhow!("missing #{}", STAR_GROUP_ID))?;
        body.append_child(&cover)
            .map_err(|e| anyhow!("append cover: {:?}", e))?;
        body.append_child(&star_root)
            .map_err(|e| anyhow!("append star overlay: {:?}", e))?;
        Ok(Self {
            star_root,
            star_group,
            cover,
            last: None,
        })
    }

    pub fn apply(&mut self, state: OverlayState) {
        let prev = self.last.replace(state);
        if prev.map(|p| p.cover_visible) != Some(state.cover_visible) {
            dom::set_style(&self.cover, &style::cover_style(state.cover_visible));
        }
        if prev.map(|p| p.mask_visible) != Some(state.mask_visible) {
            dom::set_style(&self.star_root, &style::star_overlay_style(state.mask_visible));
        }
        if prev.map(|p| p.mask_scale) != Some(state.mask_scale) {
            _ = self
                .star_group
                .set_attribute("transform", &style::star_transform(state.mask_scale));
        }
    }

    pub fn remove(&self) {
        self.cover.remove();
        self.star_root.remove();
    }
}
