//! Shared loading overlay, reference-counted across concurrent operations.
//!
//! The overlay becomes visible when the first in-flight operation starts and
//! hides only when the last one finishes, so overlapping submissions compose
//! instead of clobbering each other. On a page without an overlay every
//! operation is a no-op.

use std::sync::{Arc, Mutex};

use hytex_bridge::event::SurfaceEvent;

use crate::surface::Surface;

/// Cloneable handle to the loading indicator.
#[derive(Clone)]
pub struct LoadingIndicator {
    inner: Arc<LoadingInner>,
}

struct LoadingInner {
    surface: Arc<dyn Surface>,
    in_flight: Mutex<usize>,
}

impl LoadingIndicator {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self {
            inner: Arc::new(LoadingInner {
                surface,
                in_flight: Mutex::new(0),
            }),
        }
    }

    /// Registers one in-flight operation; shows the overlay on the first.
    pub fn show(&self) {
        if !self.inner.surface.has_loading_overlay() {
            return;
        }
        let mut in_flight = self.inner.in_flight.lock().expect("loading state poisoned");
        *in_flight += 1;
        if *in_flight == 1 {
            self.inner.surface.event(SurfaceEvent::LoadingVisible(true));
        }
    }

    /// Releases one in-flight operation; hides the overlay when none remain.
    /// Calling with nothing in flight is a no-op.
    pub fn hide(&self) {
        if !self.inner.surface.has_loading_overlay() {
            return;
        }
        let mut in_flight = self.inner.in_flight.lock().expect("loading state poisoned");
        if *in_flight == 0 {
            log::warn!("Loading indicator hidden with nothing in flight");
            return;
        }
        *in_flight -= 1;
        if *in_flight == 0 {
            self.inner
                .surface
                .event(SurfaceEvent::LoadingVisible(false));
        }
    }

    /// Shows the overlay for the lifetime of the returned guard. The guard
    /// hides exactly once on drop, on every exit path.
    pub fn begin(&self) -> LoadingGuard {
        self.show();
        LoadingGuard {
            indicator: self.clone(),
        }
    }

    /// Number of operations currently holding the overlay.
    pub fn in_flight(&self) -> usize {
        *self.inner.in_flight.lock().expect("loading state poisoned")
    }
}

/// RAII registration of one in-flight operation.
pub struct LoadingGuard {
    indicator: LoadingIndicator,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}
