use crate::constants::{MASCOT_ID, PARTICLE_LAYER_ID};
use crate::{dom, style};
use anyhow::anyhow;
use mascot_core::{Mascot, SpriteSet};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of the mascot: the sprite box and a pooled layer of dust motes.
pub struct MascotView {
    root: web::HtmlElement,
    img: web::HtmlImageElement,
    dust_layer: web::HtmlElement,
    dust: Vec<web::HtmlElement>,
    sprites: SpriteSet,
    size: f32,
    last_src: String,
    last_flip: Option<bool>,
}

impl MascotView {
    pub fn build(
        document: &web::Document,
        body: &web::HtmlElement,
        sprites: SpriteSet,
        size: f32,
    ) -> anyhow::Result<Self> {
        let dust_layer = dom::create_div(document, PARTICLE_LAYER_ID, &style::particle_layer_style())?;
        let root = dom::create_div(document, MASCOT_ID, &style::mascot_style(0.0, 0.0, size, 1.0, false))?;
        let img = document
            .create_element("img")
            .map_err(|e| anyhow!("create img: {:?}", e))?
            .dyn_into::<web::HtmlImageElement>()
            .map_err(|e| anyhow!("img element: {:?}", e))?;
        img.set_alt("Mascot");
        img.set_draggable(false);
        img.set_src(&sprites.default);
        _ = img.set_attribute("style", &style::sprite_style(size, false));
        root.append_child(&img)
            .map_err(|e| anyhow!("append sprite: {:?}", e))?;
        body.append_child(&dust_layer)
            .map_err(|e| anyhow!("append dust layer: {:?}", e))?;
        body.append_child(&root)
            .map_err(|e| anyhow!("append mascot: {:?}", e))?;
        Ok(Self {
            root,
            img,
            dust_layer,
            dust: Vec::new(),
            last_src: sprites.default.clone(),
            sprites,
            size,
            last_flip: Some(false),
        })
    }

    pub fn element(&self) -> &web::HtmlElement {
        &self.root
    }

    pub fn apply(&mut self, mascot: &Mascot) {
        let pos = mascot.position();
        let pose = mascot.pose();
        dom::set_style(
            &self.root,
            &style::mascot_style(pos.x, pos.y, self.size, pose.scale, pose.glow),
        );
        let src = pose.sprite.asset(&self.sprites);
        if src != self.last_src {
            self.img.set_src(src);
            self.last_src = src.to_owned();
        }
        if self.last_flip != Some(pose.flip_x) {
            _ = self
                .img
                .set_attribute("style", &style::sprite_style(self.size, pose.flip_x));
            self.last_flip = Some(pose.flip_x);
        }
        self.sync_dust(mascot);
    }

    fn sync_dust(&mut self, mascot: &Mascot) {
        let particles = mascot.particles();
        let live = particles.len();
        while self.dust.len() < live {
            let Some(document) = self.dust_layer.owner_document() else {
                return;
            };
            match document.create_element("div").map(|el| el.dyn_into::<web::HtmlElement>()) {
                Ok(Ok(el)) => {
                    _ = self.dust_layer.append_child(&el);
                    self.dust.push(el);
                }
                _ => {
                    log::warn!("[mascot] could not grow dust pool past {}", self.dust.len());
                    break;
                }
            }
        }
        for (el, p) in self.dust.iter().zip(particles.particles()) {
            dom::set_style(el, &style::particle_style(p.x, p.y, p.size, p.opacity));
        }
        for el in self.dust.iter().skip(live) {
            dom::set_style(el, "display:none");
        }
    }

    pub fn remove(&self) {
        self.root.remove();
        self.dust_layer.remove();
    }
}
