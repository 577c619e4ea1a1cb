//! Timers and the animation frame loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Run `f` once after `ms` milliseconds
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        ms.min(i32::MAX as u32) as i32,
    );
}

/// Resolve after `ms` milliseconds
pub async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                ms.min(i32::MAX as u32) as i32,
            );
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[derive(Default)]
struct FrameState {
    running: Cell<bool>,
    in_frame: Cell<bool>,
    pending: Cell<Option<i32>>,
}

/// A self-rescheduling `requestAnimationFrame` loop.
///
/// Runs until [`FrameLoop::stop`] is called; dropping the handle does not stop it.
pub struct FrameLoop {
    state: Rc<FrameState>,
    slot: FrameSlot,
}

impl FrameLoop {
    /// Start calling `on_frame(timestamp_ms)` every display frame
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let state = Rc::new(FrameState::default());
        state.running.set(true);
        let slot: FrameSlot = Rc::new(RefCell::new(None));

        let closure = {
            let state = state.clone();
            let slot = slot.clone();
            Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                state.pending.set(None);
                state.in_frame.set(true);
                on_frame(time);
                state.in_frame.set(false);

                if state.running.get() {
                    schedule(&slot, &state);
                } else {
                    // Stopped from inside the frame; release ourselves
                    let _ = slot.borrow_mut().take();
                }
            })
        };
        *slot.borrow_mut() = Some(closure);
        schedule(&slot, &state);

        Self { state, slot }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Cancel the pending frame and release the loop
    pub fn stop(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        if let Some(id) = self.state.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        if !self.state.in_frame.get() {
            let _ = self.slot.borrow_mut().take();
        }
        log::info!("Frame loop stopped");
    }
}

fn schedule(slot: &FrameSlot, state: &FrameState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = slot.borrow().as_ref() {
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => state.pending.set(Some(id)),
            Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
        }
    }
}
