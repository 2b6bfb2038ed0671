#![cfg(target_arch = "wasm32")]
use mascot_core::{Mascot, MascotConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod navigation;
mod overlay;
mod render;
mod style;

static MOUNTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mascot-web loaded");
    Ok(())
}

/// Mount the mascot on the current page.
///
/// `navigate` is the host router's `(path) => void | Promise`; when absent
/// the history API is used. `options` is a partial [`MascotConfig`] in
/// camelCase; `undefined` or `null` selects the defaults.
#[wasm_bindgen]
pub fn mount(navigate: Option<js_sys::Function>, options: JsValue) -> Result<MascotHandle, JsValue> {
    if MOUNTED.swap(true, Ordering::SeqCst) {
        return Err(JsValue::from_str("mascot is already mounted"));
    }
    match init(navigate, options) {
        Ok(mounted) => Ok(MascotHandle {
            inner: Some(mounted),
        }),
        Err(e) => {
            MOUNTED.store(false, Ordering::SeqCst);
            log::error!("init error: {:?}", e);
            Err(JsValue::from_str(&format!("{:#}", e)))
        }
    }
}

fn parse_options(options: JsValue) -> anyhow::Result<MascotConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(MascotConfig::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| anyhow::anyhow!("options: {}", e))
}

fn init(navigate: Option<js_sys::Function>, options: JsValue) -> anyhow::Result<Mounted> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;

    let config = parse_options(options)?;
    let viewport = dom::viewport(&window);
    let mut mascot = Mascot::new(config.clone(), viewport, rand::random())?;
    let reduced = dom::prefers_reduced_motion(&window);
    mascot.set_reduced_motion(reduced);
    if reduced {
        log::info!("[mascot] reduced motion preferred");
    }
    let mascot = Rc::new(RefCell::new(mascot));

    let view = render::MascotView::build(&document, &body, config.sprites.clone(), config.size)?;
    let overlay = overlay::Overlay::build(&document, &body)?;
    let element = view.element().clone();
    let clock = frame::Clock::start();

    let mut listeners = events::wire_pointer_handlers(&events::PointerWiring {
        window: window.clone(),
        element: element.clone(),
        mascot: mascot.clone(),
    })?;
    listeners.push(events::wire_link_interceptor(
        &document,
        element,
        mascot.clone(),
        clock,
    )?);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        mascot: mascot.clone(),
        view,
        overlay,
        navigator: navigation::Navigator::new(navigate),
        clock,
    }));
    let decay = frame::DecayTimer::start(mascot.clone(), config.particles.decay_interval_ms)?;
    let frame_loop = frame::start_loop(frame_ctx.clone());
    log::info!("[mascot] mounted");

    Ok(Mounted {
        mascot,
        frame_ctx,
        frame_loop,
        decay,
        listeners,
    })
}

struct Mounted {
    mascot: Rc<RefCell<Mascot>>,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    frame_loop: frame::FrameLoop,
    decay: frame::DecayTimer,
    listeners: Vec<dom::Listener>,
}

impl Mounted {
    fn teardown(self) {
        self.frame_loop.stop();
        self.decay.stop();
        drop(self.listeners);
        self.frame_ctx.borrow().teardown();
        MOUNTED.store(false, Ordering::SeqCst);
        log::info!("[mascot] unmounted");
    }
}

#[wasm_bindgen]
pub struct MascotHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl MascotHandle {
    /// Remove every node and listener the mascot added. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.inner.take() {
            mounted.teardown();
        }
    }

    /// Current transition phase name, `"unmounted"` after [`Self::unmount`].
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.inner
            .as_ref()
            .map(|m| m.mascot.borrow().phase().as_str().to_string())
            .unwrap_or_else(|| "unmounted".to_string())
    }

    #[wasm_bindgen(getter, js_name = isTransitioning)]
    pub fn is_transitioning(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|m| m.mascot.borrow().is_transitioning())
    }
}

impl Drop for MascotHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

