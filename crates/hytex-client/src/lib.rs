//! Request layer of the Hytex front end.
//!
//! Wraps the network round trip to the compression server
//! ([`request::RequestClient`]), orchestrates form submissions around it
//! ([`form::bind_form_submission`]) with loading and toast feedback, and
//! carries the small field validators the pages share
//! ([`validate`]).

pub mod config;
pub mod error;
pub mod form;
pub mod request;
pub mod transport;
pub mod validate;

pub use crate::error::RequestError;
pub use crate::form::{Feedback, FormSource, SubmitOptions, bind_form_submission};
pub use crate::request::{RequestClient, RequestOptions};
pub use crate::transport::Transport;
