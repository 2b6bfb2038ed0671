use crate::dom::{self, DomProbe, Listener};
use crate::frame::Clock;
use mascot_core::{Interception, LinkClick, Mascot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Capture-phase click listener on the document that turns eligible
/// same-origin link clicks into transitions.
pub fn wire_link_interceptor(
    document: &web::Document,
    element: web::HtmlElement,
    mascot: Rc<RefCell<Mascot>>,
    clock: Clock,
) -> anyhow::Result<Listener> {
    Listener::new(document.as_ref(), "click", true, move |ev| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if mouse.default_prevented() {
            return;
        }
        let Some(anchor) = anchor_for(&ev) else {
            return;
        };
        let Some(current) = web::window().and_then(|w| dom::current_url(&w)) else {
            return;
        };
        let click = link_click(&anchor, mouse);
        let decision = mascot.borrow_mut().intercept_click(
            &click,
            &current,
            &DomProbe(&element),
            clock.now_ms(),
        );
        match decision {
            Interception::Transition(path) => {
                ev.prevent_default();
                log::info!("[click] transition to {}", path);
            }
            Interception::Ignore(reason) => {
                log::debug!("[click] ignored {:?}", reason);
            }
        }
    })
}

fn anchor_for(ev: &web::Event) -> Option<web::Element> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    target.closest("a[href]").ok().flatten()
}

fn link_click(anchor: &web::Element, ev: &web::MouseEvent) -> LinkClick {
    LinkClick {
        href: anchor.get_attribute("href"),
        target: anchor.get_attribute("target"),
        download: anchor.has_attribute("download"),
        button: ev.button(),
        modified: ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key(),
    }
}
