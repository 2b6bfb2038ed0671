use crate::dom::{self, Listener};
use glam::Vec2;
use mascot_core::Mascot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub element: web::HtmlElement,
    pub mascot: Rc<RefCell<Mascot>>,
}

pub fn wire_pointer_handlers(w: &PointerWiring) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointermove(w)?,
        wire_hover(w, "pointerenter", true)?,
        wire_hover(w, "pointerleave", false)?,
        wire_resize(w)?,
    ])
}

fn wire_pointermove(w: &PointerWiring) -> anyhow::Result<Listener> {
    let mascot = w.mascot.clone();
    Listener::new(w.window.as_ref(), "pointermove", false, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        mascot.borrow_mut().pointer_moved(pointer);
    })
}

fn wire_hover(w: &PointerWiring, kind: &'static str, hovered: bool) -> anyhow::Result<Listener> {
    let mascot = w.mascot.clone();
    Listener::new(w.element.as_ref(), kind, false, move |_| {
        mascot.borrow_mut().set_hovered(hovered);
    })
}

fn wire_resize(w: &PointerWiring) -> anyhow::Result<Listener> {
    let mascot = w.mascot.clone();
    let window = w.window.clone();
    Listener::new(w.window.as_ref(), "resize", false, move |_| {
        let viewport = dom::viewport(&window);
        log::debug!("[mascot] resize {}x{}", viewport.width, viewport.height);
        mascot.borrow_mut().set_viewport(viewport);
    })
}
