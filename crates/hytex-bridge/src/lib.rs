//! Shared vocabulary between the page-facing UI services and the request
//! layer of the Hytex front end.
//!
//! This crate holds only plain data types, keeping both halves decoupled:
//! - The UI services (`hytex-ui`) push [`event::SurfaceEvent`]s at whatever
//!   renders the page and consume [`event::DragEvent`]s /
//!   [`event::SubmitEvent`]s coming from it.
//! - The request layer (`hytex-client`) speaks the server's JSON contract
//!   ([`api::ApiResponse`]) and reads the shared [`config::Config`].
//!
//! Nothing here performs I/O or owns a runtime.

pub mod api;
pub mod config;
pub mod event;
pub mod notification;
