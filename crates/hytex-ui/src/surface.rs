//! The rendering context injected into every UI service.

use std::sync::Arc;

use hytex_bridge::event::SurfaceEvent;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Whatever renders the page.
///
/// Services receive a shared handle at construction instead of locating
/// singleton elements at call time. The same service code therefore runs
/// unchanged against a real renderer or a test collector.
pub trait Surface: Send + Sync + 'static {
    /// Whether the page provides a loading overlay. When it does not, the
    /// loading indicator is a no-op end to end.
    fn has_loading_overlay(&self) -> bool {
        true
    }

    /// Apply one rendering effect. Must not block; surfaces that cross a
    /// thread or task boundary should enqueue.
    fn event(&self, event: SurfaceEvent);
}

/// A [`Surface`] that forwards every event over an unbounded channel.
///
/// The receiving half belongs to whoever renders: the binary drains it into
/// log lines, tests drain it into assertions. A dropped receiver means the
/// page is gone; events are discarded silently from then on.
pub struct ChannelSurface {
    tx: UnboundedSender<SurfaceEvent>,
    has_overlay: bool,
}

impl ChannelSurface {
    /// Creates a surface with a loading overlay present.
    pub fn new() -> (Arc<Self>, UnboundedReceiver<SurfaceEvent>) {
        Self::with_overlay(true)
    }

    /// Creates a surface for a page without a loading overlay.
    pub fn without_overlay() -> (Arc<Self>, UnboundedReceiver<SurfaceEvent>) {
        Self::with_overlay(false)
    }

    fn with_overlay(has_overlay: bool) -> (Arc<Self>, UnboundedReceiver<SurfaceEvent>) {
        let (tx, rx) = unbounded_channel();
        (Arc::new(Self { tx, has_overlay }), rx)
    }
}

impl Surface for ChannelSurface {
    fn has_loading_overlay(&self) -> bool {
        self.has_overlay
    }

    fn event(&self, event: SurfaceEvent) {
        let _ = self.tx.send(event);
    }
}
