//! DOM Listener Utilities
//!
//! Scoped document/window subscriptions for components.
//! Every subscription is a handle that detaches on drop, so a component
//! can own global listeners without leaking them past its own lifetime.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// An attached DOM event listener. Dropping the handle removes it.
pub struct EventHandle {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventHandle {
    fn attach(
        target: web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self { target, event, callback }
    }
}

impl Drop for EventHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Listen on an arbitrary event target.
pub fn listen(
    target: &web_sys::EventTarget,
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> EventHandle {
    EventHandle::attach(target.clone(), event, handler)
}

/// Listen on the document. Returns None outside a browser context.
pub fn listen_document(
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Option<EventHandle> {
    let doc = web_sys::window()?.document()?;
    Some(EventHandle::attach(doc.into(), event, handler))
}

/// Listen on the window. Returns None outside a browser context.
pub fn listen_window(
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Option<EventHandle> {
    let win = web_sys::window()?;
    Some(EventHandle::attach(win.into(), event, handler))
}

/// Coalesces bursts of work into at most one callback per animation frame.
///
/// Re-scheduling while a frame is already pending is a no-op, so rapid
/// event streams (window resize) collapse to one callback per frame.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    pending: Rc<Cell<bool>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` on the next animation frame.
    pub fn schedule(&self, work: impl FnOnce() + 'static) {
        if self.pending.replace(true) {
            return;
        }
        let Some(win) = web_sys::window() else {
            self.pending.set(false);
            return;
        };
        let pending = Rc::clone(&self.pending);
        let callback = Closure::once_into_js(move || {
            pending.set(false);
            work();
        });
        if win.request_animation_frame(callback.unchecked_ref()).is_err() {
            self.pending.set(false);
        }
    }
}

/// An active ResizeObserver subscription. Dropping disconnects it.
pub struct ResizeObserved {
    observer: web_sys::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for ResizeObserved {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe size mutations of `el`. Returns None where the runtime has
/// no ResizeObserver.
pub fn observe_resize(
    el: &web_sys::Element,
    mut on_resize: impl FnMut() + 'static,
) -> Option<ResizeObserved> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |_entries: js_sys::Array| on_resize());
    let observer = web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    observer.observe(el);
    Some(ResizeObserved { observer, _callback: callback })
}
