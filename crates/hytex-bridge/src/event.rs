//! Events crossing the boundary between the UI services and the rendering
//! side.
//!
//! [`SurfaceEvent`] is the complete outbound vocabulary: everything the
//! notification, loading, and drop-zone services may ask a renderer to do.
//! [`DragEvent`] and [`SubmitEvent`] travel the other way, carrying user
//! input from the page into the bound handlers.

use crate::notification::Notification;

/// Identifier of a toast currently managed by the notification service.
///
/// Assigned monotonically per process; never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Rendering effects pushed by the UI services at the active surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// A toast was appended to the visible collection. It starts in its
    /// pre-entrance state; [`SurfaceEvent::ToastShown`] follows shortly.
    ToastInserted {
        id: ToastId,
        notification: Notification,
    },
    /// The toast finished entering and is fully shown.
    ToastShown(ToastId),
    /// The toast began its exit transition; removal follows once the
    /// transition window elapses.
    ToastExiting(ToastId),
    /// The toast left the visible collection (timer expiry or manual close).
    ToastRemoved(ToastId),
    /// Visibility of the shared loading overlay changed.
    LoadingVisible(bool),
    /// Hover highlight of a drop zone changed.
    DropZoneHover { zone: String, active: bool },
}

/// A file delivered through a drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    /// File name as reported by the drop payload.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

/// Pointer gestures observed over a bound drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// The pointer is dragging a payload over the zone.
    Over,
    /// The pointer left the zone without dropping.
    Leave,
    /// The payload was released over the zone.
    Drop(Vec<DroppedFile>),
}

/// A submit gesture on a bound form, carrying the raw field values in
/// document order. Duplicate names are legal; the orchestrator folds them
/// with last-value-wins semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    pub fields: Vec<(String, String)>,
}
