use crate::navigation::{self, Navigator};
use crate::overlay::Overlay;
use crate::render::MascotView;
use instant::Instant;
use mascot_core::{Command, Mascot, NavigationTicket};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Milliseconds since mount; the single time base fed to the core.
#[derive(Clone, Copy)]
pub struct Clock(Instant);

impl Clock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.0.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub mascot: Rc<RefCell<Mascot>>,
    pub view: MascotView,
    pub overlay: Overlay,
    pub navigator: Navigator,
    pub clock: Clock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        // release the borrow before commands reach back into the mascot
        let commands = self.mascot.borrow_mut().frame(now);
        for cmd in commands {
            match cmd {
                Command::PhaseChanged(phase) => log::debug!("[transition] {}", phase),
                Command::Navigate { ticket, path } => self.navigate(ticket, path),
                Command::HardRedirect(path) => navigation::hard_redirect(&path),
                Command::Finished => log::debug!("[frame] transition settled back to idle"),
            }
        }
        let mascot = self.mascot.borrow();
        self.view.apply(&mascot);
        self.overlay.apply(mascot.overlay(now));
    }

    fn navigate(&self, ticket: NavigationTicket, path: String) {
        let navigator = self.navigator.clone();
        let mascot = self.mascot.clone();
        spawn_local(async move {
            let result = navigator.navigate(&path).await;
            if let Err(e) = &result {
                log::warn!("[nav] {} failed: {}", path, e);
            }
            if !mascot.borrow_mut().navigation_settled(ticket, result) {
                log::debug!("[nav] stale result for ticket {}", ticket.0);
            }
        });
    }

    pub fn teardown(&self) {
        self.view.remove();
        self.overlay.remove();
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that can be cancelled.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<RefCell<Option<i32>>>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let handle = Rc::new(RefCell::new(None::<i32>));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        *handle_clone.borrow_mut() = request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    *handle.borrow_mut() = request_frame(&tick);
    FrameLoop { tick, handle }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl FrameLoop {
    pub fn stop(&self) {
        if let (Some(w), Some(h)) = (web::window(), self.handle.borrow_mut().take()) {
            _ = w.cancel_animation_frame(h);
        }
        // breaks the closure's self-reference
        self.tick.borrow_mut().take();
    }
}

/// Fixed-interval particle fade, independent of the frame rate.
pub struct DecayTimer {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl DecayTimer {
    pub fn start(mascot: Rc<RefCell<Mascot>>, interval_ms: u32) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let interval = i32::try_from(interval_ms)
            .map_err(|_| anyhow::anyhow!("decay interval {}ms out of range", interval_ms))?;
        let closure = Closure::wrap(Box::new(move || {
            mascot.borrow_mut().decay_particles();
        }) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval,
            )
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }

    pub fn stop(&self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}
