//! Disposer handles for bound event listeners.

use tokio::task::JoinHandle;

/// Handle to a listener task created by a binder function.
///
/// Dropping the handle unbinds the listener. Call [`Subscription::detach`]
/// to keep it running for the rest of the process. `unbind` tears the
/// listener down between events and never interrupts a submission that is
/// already in flight.
pub struct Subscription {
    handle: Option<JoinHandle<()>>,
    detached: bool,
}

impl Subscription {
    pub(crate) fn new(handle: JoinHandle<()>) -> Self {
        Self {
            handle: Some(handle),
            detached: false,
        }
    }

    /// A subscription bound to nothing, returned when the binder's target is
    /// absent.
    pub fn empty() -> Self {
        Self {
            handle: None,
            detached: false,
        }
    }

    /// Wraps an already-spawned listener task.
    pub fn from_task(handle: JoinHandle<()>) -> Self {
        Self::new(handle)
    }

    /// Whether a listener is (still) attached.
    pub fn is_bound(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stops the listener. Idempotent.
    pub fn unbind(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Leaks the listener deliberately: it keeps running after the handle is
    /// dropped.
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.detached {
            return;
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
