//! Trailing-edge debouncing for noisy UI events.

use std::sync::Mutex;

use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};

/// Collapses a burst of calls into a single execution of the last closure,
/// `wait` after the burst goes quiet.
///
/// Each call cancels the previously scheduled closure, so only the trailing
/// edge ever runs. Dropping the debouncer cancels anything still pending.
pub struct Debouncer {
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `f` to run after the quiet period, replacing any closure
    /// scheduled earlier.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let wait = self.wait;
        let mut pending = self.pending.lock().expect("debouncer state poisoned");
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            sleep(wait).await;
            f();
        }));
    }

    /// Cancels the pending closure, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().expect("debouncer state poisoned");
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
