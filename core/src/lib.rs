//! Synchronous client core for the comments API.
//!
//! # Overview
//! Lists, adds and updates comments on a remote JSON API whose every answer
//! is wrapped in a `{status, data}` envelope. Responses are validated before
//! anything is returned; every rejection is an `ApiError` carrying the raw
//! response.
//!
//! # Design
//! - `protocol` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network (host-does-IO pattern).
//! - `ApiClient` wraps those functions around an injected `Transport`;
//!   `UreqTransport` is the default.
//! - `Comment` is immutable; `CommentFactory` maps decoded list items onto it.
//! - Types use owned `String` / `Vec` fields so they cross the FFI boundary
//!   without lifetimes.

pub mod client;
pub mod envelope;
pub mod error;
pub mod factory;
pub mod http;
pub mod protocol;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiErrorKind, ClientError, TransportError};
pub use factory::CommentFactory;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport, DEFAULT_BASE_URL};
pub use types::{Comment, RawComment};
