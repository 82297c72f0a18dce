//! Drag-and-drop binding for a designated interactive region.

use std::sync::Arc;

use hytex_bridge::event::{DragEvent, DroppedFile, SurfaceEvent};
use tokio::sync::mpsc::Receiver;

use crate::subscription::Subscription;
use crate::surface::Surface;

/// A drop zone on the page: its identifier plus the stream of pointer
/// gestures the renderer observes over it.
pub struct DropZoneSource {
    pub id: String,
    pub events: Receiver<DragEvent>,
}

/// Binds hover highlighting and a file-drop callback to a drop zone.
///
/// - drag-over sets the zone's hover highlight, drag-leave clears it;
/// - a drop clears the highlight and, if the payload carries at least one
///   file, invokes `on_drop` with exactly the first file. Additional files
///   are silently ignored; this is the documented policy, not an oversight.
///
/// An absent target (`None`) yields an inert subscription. The listener
/// stops when the returned [`Subscription`] is dropped or unbound, or when
/// the event source closes.
pub fn bind_drop_zone<F>(
    zone: Option<DropZoneSource>,
    surface: Arc<dyn Surface>,
    on_drop: F,
) -> Subscription
where
    F: Fn(DroppedFile) + Send + 'static,
{
    let Some(mut zone) = zone else {
        return Subscription::empty();
    };

    Subscription::new(tokio::spawn(async move {
        while let Some(event) = zone.events.recv().await {
            match event {
                DragEvent::Over => {
                    surface.event(SurfaceEvent::DropZoneHover {
                        zone: zone.id.clone(),
                        active: true,
                    });
                }
                DragEvent::Leave => {
                    surface.event(SurfaceEvent::DropZoneHover {
                        zone: zone.id.clone(),
                        active: false,
                    });
                }
                DragEvent::Drop(files) => {
                    surface.event(SurfaceEvent::DropZoneHover {
                        zone: zone.id.clone(),
                        active: false,
                    });
                    if let Some(first) = files.into_iter().next() {
                        log::debug!("Drop on zone {}: {}", zone.id, first.name);
                        on_drop(first);
                    }
                }
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ChannelSurface;
    use std::sync::Mutex;
    use tokio::sync::mpsc;

    fn file(name: &str, size: u64) -> DroppedFile {
        DroppedFile {
            name: name.to_string(),
            size,
        }
    }

    #[tokio::test]
    async fn hover_highlight_follows_drag_gestures() {
        let (surface, mut events) = ChannelSurface::new();
        let (tx, rx) = mpsc::channel(8);
        let _binding = bind_drop_zone(
            Some(DropZoneSource {
                id: "upload-zone".into(),
                events: rx,
            }),
            surface,
            |_| {},
        );

        tx.send(DragEvent::Over).await.unwrap();
        assert_eq!(
            events.recv().await,
            Some(SurfaceEvent::DropZoneHover {
                zone: "upload-zone".into(),
                active: true,
            })
        );

        tx.send(DragEvent::Leave).await.unwrap();
        assert_eq!(
            events.recv().await,
            Some(SurfaceEvent::DropZoneHover {
                zone: "upload-zone".into(),
                active: false,
            })
        );
    }

    #[tokio::test]
    async fn empty_drop_never_invokes_the_callback() {
        let (surface, mut events) = ChannelSurface::new();
        let (tx, rx) = mpsc::channel(8);
        let dropped = Arc::new(Mutex::new(Vec::new()));
        let sink = dropped.clone();
        let _binding = bind_drop_zone(
            Some(DropZoneSource {
                id: "upload-zone".into(),
                events: rx,
            }),
            surface,
            move |file| sink.lock().unwrap().push(file),
        );

        tx.send(DragEvent::Drop(Vec::new())).await.unwrap();
        // The listener handles a drop event in one synchronous block before
        // yielding, so once the hover-clear arrives the verdict is final.
        assert_eq!(
            events.recv().await,
            Some(SurfaceEvent::DropZoneHover {
                zone: "upload-zone".into(),
                active: false,
            })
        );
        assert!(dropped.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn multi_file_drop_delivers_only_the_first() {
        let (surface, mut events) = ChannelSurface::new();
        let (tx, rx) = mpsc::channel(8);
        let dropped = Arc::new(Mutex::new(Vec::new()));
        let sink = dropped.clone();
        let _binding = bind_drop_zone(
            Some(DropZoneSource {
                id: "upload-zone".into(),
                events: rx,
            }),
            surface,
            move |file| sink.lock().unwrap().push(file),
        );

        tx.send(DragEvent::Drop(vec![
            file("notes.txt", 120),
            file("extra.txt", 999),
        ]))
        .await
        .unwrap();
        let _ = events.recv().await;

        let dropped = dropped.lock().unwrap();
        assert_eq!(dropped.as_slice(), &[file("notes.txt", 120)]);
    }

    #[tokio::test]
    async fn absent_target_is_a_no_op() {
        let (surface, _events) = ChannelSurface::new();
        let subscription = bind_drop_zone(None, surface, |_| {});
        assert!(!subscription.is_bound());
    }
}
