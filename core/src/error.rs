//! Error types for the comments API client.
//!
//! # Design
//! Every envelope violation is an `ApiError`: one of four fixed messages plus
//! the raw response that caused it. Failures of the transport itself
//! (connection refused, DNS, broken pipes) are a separate `TransportError`
//! because there is no response to attach. `ClientError` is the union the
//! `ApiClient` operations return.

use std::fmt;

use thiserror::Error;

use crate::http::HttpResponse;

/// Which envelope check rejected a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// HTTP status was anything but 200.
    UnexpectedStatus,
    /// Body is not valid JSON.
    JsonParse,
    /// Body is JSON but not a `{status: bool, data: null | [..]}` envelope,
    /// or list items are not comment-shaped.
    UnrecognizedSchema,
    /// Envelope is well formed but `status` is `false`.
    FalsyStatus,
}

impl ApiErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ApiErrorKind::UnexpectedStatus => "Api response code is not 200",
            ApiErrorKind::JsonParse => "Json parse error",
            ApiErrorKind::UnrecognizedSchema => "Api response schema is not recognized",
            ApiErrorKind::FalsyStatus => "Api response status is falsy",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A response the API client refused to accept.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ApiError {
    kind: ApiErrorKind,
    response: HttpResponse,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, response: HttpResponse) -> Self {
        Self { kind, response }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// The response exactly as the transport returned it.
    pub fn response(&self) -> &HttpResponse {
        &self.response
    }

    pub fn into_response(self) -> HttpResponse {
        self.response
    }
}

/// The transport could not complete the round-trip.
#[derive(Debug, Clone, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Errors returned by `ApiClient` operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// The envelope error, if the server answered at all.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(err) => Some(err),
            ClientError::Transport(_) => None,
        }
    }
}
