use mascot_core::NavigationError;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Performs the route change requested by the transition.
///
/// With a host hook (`navigate(path)`, may return a promise) the host's
/// router does the work. Without one the history API is used and a
/// `popstate` is dispatched so client routers pick the change up.
#[derive(Clone)]
pub struct Navigator {
    hook: Option<js_sys::Function>,
}

impl Navigator {
    pub fn new(hook: Option<js_sys::Function>) -> Self {
        Self { hook }
    }

    pub async fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        match &self.hook {
            Some(hook) => {
                let ret = hook
                    .call1(&JsValue::NULL, &JsValue::from_str(path))
                    .map_err(describe)?;
                JsFuture::from(js_sys::Promise::resolve(&ret))
                    .await
                    .map(|_| ())
                    .map_err(describe)
            }
            None => push_history(path),
        }
    }
}

fn push_history(path: &str) -> Result<(), NavigationError> {
    let window = web::window().ok_or_else(|| NavigationError::Rejected("no window".into()))?;
    window
        .history()
        .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)))
        .map_err(describe)?;
    let ev = web::Event::new("popstate").map_err(describe)?;
    _ = window.dispatch_event(&ev);
    Ok(())
}

/// Full page load; the fallback when the router fails or hangs.
pub fn hard_redirect(path: &str) {
    log::warn!("[nav] hard redirect to {}", path);
    if let Some(w) = web::window() {
        if let Err(e) = w.location().set_href(path) {
            log::error!("[nav] redirect failed: {:?}", e);
        }
    }
}

fn describe(e: JsValue) -> NavigationError {
    let msg = e
        .as_string()
        .or_else(|| {
            e.dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", e));
    NavigationError::Rejected(msg)
}
