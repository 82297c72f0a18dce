//! Page-facing UI services of the Hytex front end.
//!
//! Everything here is decoupled from any concrete renderer: the services
//! push [`hytex_bridge::event::SurfaceEvent`]s at an injected [`Surface`]
//! and consume input events over channels, so the full behavior is testable
//! without a live document. [`ChannelSurface`] is both the production
//! implementation (the binary renders its events as log lines) and the test
//! double.

pub mod debounce;
pub mod dropzone;
pub mod formatting;
pub mod loading;
pub mod notifier;
pub mod subscription;
pub mod surface;

pub use crate::loading::{LoadingGuard, LoadingIndicator};
pub use crate::notifier::Notifier;
pub use crate::subscription::Subscription;
pub use crate::surface::{ChannelSurface, Surface};
