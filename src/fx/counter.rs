//! Animation-frame count-up for stat numbers
//!
//! Not wired by the default init path; a host page calls
//! `Effects::animate_count` when it wants a number to tick up.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Window};

use crate::motion::counter;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Interpolate `el`'s text content from `start` to `end` over
/// `duration_ms`, one animation frame at a time. The callback keeps
/// itself alive until the run completes, then drops.
pub fn animate_count(
    win: &Window,
    el: HtmlElement,
    start: i64,
    end: i64,
    duration_ms: f64,
) -> Result<(), JsValue> {
    let handle: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

    let rescheduler = handle.clone();
    let frame_source = win.clone();
    let mut origin: Option<f64> = None;
    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let t0 = *origin.get_or_insert(timestamp);
        let progress = counter::progress(timestamp - t0, duration_ms);
        let value = counter::value_at(progress, start, end);
        el.set_text_content(Some(&value.to_string()));

        if progress < 1.0 {
            if let Some(cb) = rescheduler.borrow().as_ref() {
                let _ = frame_source.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        } else {
            // Finished; release the self-referential closure.
            rescheduler.borrow_mut().take();
        }
    })));

    if let Some(cb) = handle.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
