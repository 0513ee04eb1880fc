//! Browser timer backing for the search debouncer.

use gloo_timers::callback::Timeout;
use logodeck_core::{DelayScheduler, Debouncer};

/// Schedules tasks with `setTimeout`. Dropping the returned [`Timeout`]
/// clears the timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl DelayScheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce() + 'static>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Debouncer driven by browser timers.
pub type BrowserDebouncer = Debouncer<TimeoutScheduler>;

/// Debouncer with the given quiet period.
pub fn debouncer(delay_ms: u32) -> BrowserDebouncer {
    Debouncer::new(TimeoutScheduler, delay_ms)
}
