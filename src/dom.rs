use anyhow::anyhow;
use glam::Vec2;
use mascot_core::{GeometryProbe, Url, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w as f32, h as f32)
}

#[inline]
pub fn current_url(window: &web::Window) -> Option<Url> {
    let href = window.location().href().ok()?;
    Url::parse(&href).ok()
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(crate::constants::REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn create_div(document: &web::Document, id: &str, css: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow!("create div #{}: {:?}", id, e))?;
    el.set_id(id);
    _ = el.set_attribute("style", css);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

#[inline]
pub fn set_style(el: &web::Element, css: &str) {
    _ = el.set_attribute("style", css);
}

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        capture: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback_and_bool(
                kind,
                closure.as_ref().unchecked_ref(),
                capture,
            )
            .map_err(|e| anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            capture,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback_and_bool(
            self.kind,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Reads the mascot's laid-out position straight from the DOM.
pub struct DomProbe<'a>(pub &'a web::Element);

impl GeometryProbe for DomProbe<'_> {
    fn mascot_origin(&self) -> Option<Vec2> {
        let rect = self.0.get_bounding_client_rect();
        // an element that is not laid out reports an empty rect at the origin
        if rect.width() == 0.0 && rect.height() == 0.0 {
            return None;
        }
        Some(Vec2::new(rect.left() as f32, rect.top() as f32))
    }
}
