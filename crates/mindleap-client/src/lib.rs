//! Mindleap Client — graph model service client.
//!
//! [`GraphModelService`] is the facade callers use; it delegates to a
//! [`GraphModelBackend`], either the REST API ([`HttpBackend`]) or an
//! in-process catalog ([`InMemoryBackend`]), and turns every failure into a
//! response object.

pub mod backend;
pub mod http;
pub mod memory;
pub mod service;

pub use backend::{BackendError, GraphModelBackend};
pub use http::HttpBackend;
pub use memory::InMemoryBackend;
pub use service::GraphModelService;
