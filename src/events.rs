//! Backend Event Subscriptions
//!
//! Scoped wrappers around `window.__TAURI__.event.listen`. A
//! [`Subscription`] owns the JS callback and the unlisten function the
//! shell hands back; dropping it tears the listener down, so components
//! register in `on_cleanup` and cannot leak handlers across remounts.
//! Registration is asynchronous; a subscription dropped before the
//! promise resolves still unlistens as soon as it does.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const TABS_UPDATED: &str = "tabs_updated";
pub const VALIDATION_ERROR: &str = "validation-error";
pub const VALIDATION_OK: &str = "validation-ok";
pub const UPDATE_PROGRESS: &str = "update-progress";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

/// Live event listener; unlistens on drop.
pub struct Subscription {
    unlisten: Rc<RefCell<Option<js_sys::Function>>>,
    cancelled: Rc<RefCell<bool>>,
    _handler: Rc<Closure<dyn FnMut(JsValue)>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        *self.cancelled.borrow_mut() = true;
        if let Some(unlisten) = self.unlisten.borrow_mut().take() {
            let _ = unlisten.call0(&JsValue::NULL);
        }
    }
}

/// Subscribe to a backend event, handing the raw `payload` field of each
/// delivery to `on_event`.
pub fn subscribe(event: &'static str, mut on_event: impl FnMut(JsValue) + 'static) -> Subscription {
    let handler = Rc::new(Closure::wrap(Box::new(move |raw: JsValue| {
        let payload = js_sys::Reflect::get(&raw, &JsValue::from_str("payload"))
            .unwrap_or(JsValue::UNDEFINED);
        on_event(payload);
    }) as Box<dyn FnMut(JsValue)>));

    let unlisten: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
    let cancelled = Rc::new(RefCell::new(false));

    {
        let handler = handler.clone();
        let unlisten = unlisten.clone();
        let cancelled = cancelled.clone();
        spawn_local(async move {
            match listen(event, handler.as_ref()).await {
                Ok(f) => {
                    let f: js_sys::Function = f.unchecked_into();
                    if *cancelled.borrow() {
                        let _ = f.call0(&JsValue::NULL);
                    } else {
                        *unlisten.borrow_mut() = Some(f);
                    }
                }
                Err(e) => {
                    web_sys::console::error_2(
                        &format!("failed to listen for {event}:").into(),
                        &e,
                    );
                }
            }
        });
    }

    Subscription {
        unlisten,
        cancelled,
        _handler: handler,
    }
}

/// Subscribe with a typed payload. Deliveries that fail to deserialize
/// are logged and skipped.
pub fn subscribe_to<T: DeserializeOwned + 'static>(
    event: &'static str,
    mut on_event: impl FnMut(T) + 'static,
) -> Subscription {
    subscribe(event, move |payload| {
        match serde_wasm_bindgen::from_value::<T>(payload) {
            Ok(value) => on_event(value),
            Err(e) => web_sys::console::error_1(
                &format!("bad payload on {event}: {e}").into(),
            ),
        }
    })
}
