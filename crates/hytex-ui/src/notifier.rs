//! Toast notification service.
//!
//! Owns the process-wide, insertion-ordered collection of visible toasts and
//! drives each one through its lifecycle: insert, enter after a short delay,
//! begin the exit transition when the visible window closes, remove once the
//! transition finishes. A manual close removes the toast immediately and
//! cancels the outstanding timers.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use hytex_bridge::config::ToastTimings;
use hytex_bridge::event::{SurfaceEvent, ToastId};
use hytex_bridge::notification::{Notification, Severity};
use tokio::{sync::oneshot, time::sleep};

use crate::surface::Surface;

/// Snapshot of one currently-visible toast.
#[derive(Debug, Clone)]
pub struct ToastView {
    pub id: ToastId,
    pub notification: Notification,
    /// Whether the entrance transition has completed and the exit has not
    /// yet begun.
    pub shown: bool,
}

struct ToastEntry {
    id: ToastId,
    notification: Notification,
    shown: bool,
    /// Fires the early-close path of the lifecycle task. Taken on dismissal.
    close: Option<oneshot::Sender<()>>,
}

/// Cloneable handle to the notification service.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<NotifierInner>,
}

struct NotifierInner {
    surface: Arc<dyn Surface>,
    timings: ToastTimings,
    toasts: Mutex<Vec<ToastEntry>>,
    next_id: AtomicU64,
}

impl Notifier {
    pub fn new(surface: Arc<dyn Surface>, timings: ToastTimings) -> Self {
        Self {
            inner: Arc::new(NotifierInner {
                surface,
                timings,
                toasts: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Appends a toast and schedules its lifecycle. Purely additive; never
    /// fails. Returns the assigned id, usable with [`Notifier::dismiss`].
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> ToastId {
        let id = ToastId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let notification = Notification::new(severity, message);
        let (close_tx, mut close_rx) = oneshot::channel();

        {
            let mut toasts = self.inner.toasts.lock().expect("notifier state poisoned");
            toasts.push(ToastEntry {
                id,
                notification: notification.clone(),
                shown: false,
                close: Some(close_tx),
            });
        }
        self.inner
            .surface
            .event(SurfaceEvent::ToastInserted { id, notification });

        let inner = self.inner.clone();
        tokio::spawn(async move {
            let timeline = async {
                sleep(inner.timings.enter()).await;
                inner.set_shown(id, true, SurfaceEvent::ToastShown(id));
                sleep(inner.timings.shown()).await;
                inner.set_shown(id, false, SurfaceEvent::ToastExiting(id));
                sleep(inner.timings.exit()).await;
            };
            // Either the full timeline elapses or the toast is closed early;
            // removal is idempotent, so a lost race costs nothing.
            tokio::select! {
                _ = &mut close_rx => {}
                _ = timeline => {}
            }
            inner.remove(id);
        });

        id
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Severity::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Severity::Success)
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Severity::Warning)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Severity::Error)
    }

    /// Manual close affordance: removes the toast immediately, bypassing the
    /// timers. Unknown ids are ignored.
    pub fn dismiss(&self, id: ToastId) {
        let close = {
            let mut toasts = self.inner.toasts.lock().expect("notifier state poisoned");
            let Some(position) = toasts.iter().position(|entry| entry.id == id) else {
                return;
            };
            let mut entry = toasts.remove(position);
            entry.close.take()
        };
        if let Some(close) = close {
            let _ = close.send(());
        }
        self.inner.surface.event(SurfaceEvent::ToastRemoved(id));
        log::debug!("Dismissed {id} on request");
    }

    /// Snapshot of the visible collection in insertion order.
    pub fn visible(&self) -> Vec<ToastView> {
        let toasts = self.inner.toasts.lock().expect("notifier state poisoned");
        toasts
            .iter()
            .map(|entry| ToastView {
                id: entry.id,
                notification: entry.notification.clone(),
                shown: entry.shown,
            })
            .collect()
    }

    pub fn is_visible(&self, id: ToastId) -> bool {
        let toasts = self.inner.toasts.lock().expect("notifier state poisoned");
        toasts.iter().any(|entry| entry.id == id)
    }
}

impl NotifierInner {
    /// Flips the shown flag and mirrors the change to the surface, unless
    /// the toast was already closed.
    fn set_shown(&self, id: ToastId, shown: bool, event: SurfaceEvent) {
        {
            let mut toasts = self.toasts.lock().expect("notifier state poisoned");
            let Some(entry) = toasts.iter_mut().find(|entry| entry.id == id) else {
                return;
            };
            entry.shown = shown;
        }
        self.surface.event(event);
    }

    fn remove(&self, id: ToastId) {
        let removed = {
            let mut toasts = self.toasts.lock().expect("notifier state poisoned");
            match toasts.iter().position(|entry| entry.id == id) {
                Some(position) => {
                    toasts.remove(position);
                    true
                }
                None => false,
            }
        };
        if removed {
            self.surface.event(SurfaceEvent::ToastRemoved(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ChannelSurface;
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::time::{Duration, advance};

    fn notifier() -> (Notifier, UnboundedReceiver<SurfaceEvent>) {
        let (surface, events) = ChannelSurface::new();
        (Notifier::new(surface, ToastTimings::default()), events)
    }

    #[tokio::test(start_paused = true)]
    async fn toast_lifecycle_for_every_severity() {
        for severity in [
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Error,
        ] {
            let (notifier, mut events) = notifier();
            let id = notifier.notify("hello", severity);

            match events.recv().await {
                Some(SurfaceEvent::ToastInserted {
                    id: inserted,
                    notification,
                }) => {
                    assert_eq!(inserted, id);
                    assert_eq!(notification.severity, severity);
                    assert!(!notification.severity.css_suffix().is_empty());
                    assert!(notification.severity.icon().starts_with("fas fa-"));
                }
                other => panic!("expected insertion, got {other:?}"),
            }

            // Still present just before removal, gone just after.
            advance(Duration::from_millis(6099)).await;
            assert!(notifier.is_visible(id));
            advance(Duration::from_millis(302)).await;
            assert!(!notifier.is_visible(id));
            assert!(notifier.visible().is_empty());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn entrance_and_exit_transitions_fire_in_order() {
        let (notifier, mut events) = notifier();
        let id = notifier.notify("ordered", Severity::Info);

        assert!(matches!(
            events.recv().await,
            Some(SurfaceEvent::ToastInserted { .. })
        ));
        advance(Duration::from_millis(101)).await;
        assert_eq!(events.recv().await, Some(SurfaceEvent::ToastShown(id)));
        assert!(notifier.visible()[0].shown);

        advance(Duration::from_millis(5900)).await;
        assert_eq!(events.recv().await, Some(SurfaceEvent::ToastExiting(id)));
        assert!(!notifier.visible()[0].shown);

        advance(Duration::from_millis(301)).await;
        assert_eq!(events.recv().await, Some(SurfaceEvent::ToastRemoved(id)));
    }

    #[tokio::test(start_paused = true)]
    async fn manual_close_bypasses_timers() {
        let (notifier, mut events) = notifier();
        let id = notifier.notify("closing early", Severity::Warning);
        let _ = events.recv().await;

        advance(Duration::from_millis(500)).await;
        assert_eq!(events.recv().await, Some(SurfaceEvent::ToastShown(id)));

        notifier.dismiss(id);
        assert!(!notifier.is_visible(id));
        assert_eq!(events.recv().await, Some(SurfaceEvent::ToastRemoved(id)));

        // The cancelled timeline must not emit anything else.
        advance(Duration::from_millis(10_000)).await;
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn toasts_keep_insertion_order() {
        let (notifier, _events) = notifier();
        let first = notifier.info("first");
        let second = notifier.error("second");

        let visible = notifier.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, first);
        assert_eq!(visible[1].id, second);

        notifier.dismiss(first);
        let visible = notifier.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, second);
    }

    #[tokio::test(start_paused = true)]
    async fn dismissing_unknown_id_is_a_no_op() {
        let (notifier, mut events) = notifier();
        notifier.dismiss(ToastId(42));
        assert!(events.try_recv().is_err());
    }
}
