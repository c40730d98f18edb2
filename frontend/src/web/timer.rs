//! Repeating timers on top of `setInterval`.

use std::rc::Rc;
use std::time::Duration;
use tallerportal::IntervalScheduler;
use wasm_bindgen::prelude::*;

/// A live `setInterval`. Dropping it clears the interval.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn Fn()>,
}

impl Interval {
    /// `None` when there is no window or the browser refused the timer.
    pub fn new<F>(period: Duration, callback: F) -> Option<Self>
    where
        F: Fn() + 'static,
    {
        let closure = Closure::<dyn Fn()>::new(callback);
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);

        let handle = web_sys::window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .ok()?;

        Some(Self {
            handle,
            _closure: closure,
        })
    }

    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// `IntervalScheduler` backed by `Interval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl IntervalScheduler for BrowserScheduler {
    type Handle = Interval;

    fn every(&self, period: Duration, tick: Rc<dyn Fn()>) -> Option<Interval> {
        let interval = Interval::new(period, move || tick());
        if interval.is_none() {
            log_error!("[timer] could not arm a {}ms interval", period.as_millis());
        }
        interval
    }
}
