//! Stateless HTTP request builders and response parsers for the comments API.
//!
//! # Design
//! Each operation is split into a `build_*` function that produces an
//! `HttpRequest` and a `parse_*` function that consumes an `HttpResponse`.
//! Nothing here performs I/O: `ApiClient` glues the two halves together
//! around a `Transport`, and the FFI crate hands them to a C host directly.

use serde_json::Value;
use tracing::warn;

use crate::envelope;
use crate::error::{ApiError, ApiErrorKind};
use crate::factory::CommentFactory;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Comment, RawComment};

pub const LIST_PATH: &str = "/comments";
pub const ADD_PATH: &str = "/comment";

pub fn build_list() -> HttpRequest {
    HttpRequest::get(LIST_PATH)
}

pub fn build_add(name: &str, text: &str) -> HttpRequest {
    HttpRequest::form(HttpMethod::Post, ADD_PATH, &[("name", name), ("text", text)])
}

pub fn build_update(id: u64, name: &str, text: &str) -> HttpRequest {
    HttpRequest::form(
        HttpMethod::Put,
        format!("{ADD_PATH}/{id}"),
        &[("name", name), ("text", text)],
    )
}

/// Validate a list response and map its items, in server order.
///
/// A `null` payload or an item that is not `{id: u64, name: str, text: str}`
/// is an unrecognized schema.
pub fn parse_list(response: HttpResponse) -> Result<Vec<Comment>, ApiError> {
    let decoded = envelope::validate(&response).and_then(decode_comments);
    decoded
        .map(|raw| CommentFactory.from_list(raw))
        .map_err(|kind| reject(kind, response))
}

pub fn parse_add(response: HttpResponse) -> Result<(), ApiError> {
    parse_unit(response)
}

pub fn parse_update(response: HttpResponse) -> Result<(), ApiError> {
    parse_unit(response)
}

fn parse_unit(response: HttpResponse) -> Result<(), ApiError> {
    match envelope::validate(&response) {
        Ok(_) => Ok(()),
        Err(kind) => Err(reject(kind, response)),
    }
}

fn decode_comments(data: envelope::Payload) -> Result<Vec<RawComment>, ApiErrorKind> {
    let items = data.ok_or(ApiErrorKind::UnrecognizedSchema)?;
    // serde would also accept `[id, name, text]` sequences for a struct.
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => serde_json::from_value(item).map_err(|_| ApiErrorKind::UnrecognizedSchema),
            _ => Err(ApiErrorKind::UnrecognizedSchema),
        })
        .collect()
}

fn reject(kind: ApiErrorKind, response: HttpResponse) -> ApiError {
    warn!(status = response.status, error = %kind, "comments api response rejected");
    ApiError::new(kind, response)
}
