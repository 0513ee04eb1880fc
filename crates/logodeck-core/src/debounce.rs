//! Cancellable delay for coalescing rapid input.
//!
//! A [`Debouncer`] keeps at most one pending task. Every new call replaces
//! the pending one, so a burst of edits runs a single task with the last
//! value once input goes quiet.
//!
//! Timers come from a [`DelayScheduler`]. The browser build plugs in
//! `gloo_timers::callback::Timeout`; tests use a manual clock.

/// Source of one-shot timers.
///
/// Dropping the returned handle must cancel the task if it has not run yet.
pub trait DelayScheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce() + 'static>) -> Self::Handle;
}

/// Runs only the most recent of a burst of calls.
pub struct Debouncer<S: DelayScheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: DelayScheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Schedule `task`, cancelling any task from an earlier call.
    pub fn call<F>(&mut self, task: F)
    where
        F: FnOnce() + 'static,
    {
        // Drop first so the old timer is cleared before the new one starts.
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    /// Drop the pending task without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
