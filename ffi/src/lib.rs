//! C-ABI wrapper around `comments-core`.
//!
//! # Overview
//! Exposes the comments API's request builders and response parsers through
//! `extern "C"` functions. The C host performs the HTTP round-trip itself;
//! this library only decides what to send and whether the answer is a valid
//! envelope.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `comments_build_*` / `comments_parse_*` mirror `comments_core::protocol`
//!   1:1. The protocol is stateless, so there is no client handle.
//! - A single `FfiCommentsResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `comments_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use comments_core::{protocol, HttpResponse};

use types::*;

/// Borrow a C string as UTF-8. `None` for null or invalid UTF-8.
///
/// # Safety
/// `ptr` must be null or point at a NUL-terminated string that outlives the
/// returned reference.
unsafe fn utf8_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build the request for listing all comments.
///
/// The caller must free the returned pointer with `comments_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn comments_build_list() -> *mut FfiHttpRequest {
    catch_unwind(|| FfiHttpRequest::from_core(protocol::build_list())).unwrap_or(std::ptr::null_mut())
}

/// Build the request for adding a comment.
///
/// Returns null if `name` or `text` is null or not valid UTF-8.
#[unsafe(no_mangle)]
pub extern "C" fn comments_build_add(name: *const c_char, text: *const c_char) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        let (Some(name), Some(text)) = (unsafe { utf8_arg(name) }, unsafe { utf8_arg(text) }) else {
            return std::ptr::null_mut();
        };
        FfiHttpRequest::from_core(protocol::build_add(name, text))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build the request for updating comment `id`.
///
/// Returns null if `name` or `text` is null or not valid UTF-8.
#[unsafe(no_mangle)]
pub extern "C" fn comments_build_update(
    id: u64,
    name: *const c_char,
    text: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        let (Some(name), Some(text)) = (unsafe { utf8_arg(name) }, unsafe { utf8_arg(text) }) else {
            return std::ptr::null_mut();
        };
        FfiHttpRequest::from_core(protocol::build_update(id, name, text))
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Copy an `FfiHttpResponse` into a core `HttpResponse`.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() || resp.body_len == 0 {
        Vec::new()
    } else {
        unsafe { std::slice::from_raw_parts(resp.body, resp.body_len) }.to_vec()
    };
    HttpResponse::new(resp.status, body)
}

/// Parse the response to a list request.
///
/// Returns a result with `data_tag = CommentList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn comments_parse_list(response: *const FfiHttpResponse) -> *mut FfiCommentsResult {
    catch_unwind(|| {
        if response.is_null() {
            return FfiCommentsResult::null_arg("response");
        }
        let resp = ffi_response_to_core(unsafe { &*response });
        match protocol::parse_list(resp) {
            Ok(comments) => FfiCommentsResult::ok_comment_list(comments),
            Err(e) => FfiCommentsResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiCommentsResult::panic("panic in comments_parse_list"))
}

/// Parse the response to an add request.
///
/// Returns a result with `data_tag = None` on success.
#[unsafe(no_mangle)]
pub extern "C" fn comments_parse_add(response: *const FfiHttpResponse) -> *mut FfiCommentsResult {
    catch_unwind(|| {
        if response.is_null() {
            return FfiCommentsResult::null_arg("response");
        }
        let resp = ffi_response_to_core(unsafe { &*response });
        match protocol::parse_add(resp) {
            Ok(()) => FfiCommentsResult::ok_empty(),
            Err(e) => FfiCommentsResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiCommentsResult::panic("panic in comments_parse_add"))
}

/// Parse the response to an update request.
///
/// Returns a result with `data_tag = None` on success.
#[unsafe(no_mangle)]
pub extern "C" fn comments_parse_update(response: *const FfiHttpResponse) -> *mut FfiCommentsResult {
    catch_unwind(|| {
        if response.is_null() {
            return FfiCommentsResult::null_arg("response");
        }
        let resp = ffi_response_to_core(unsafe { &*response });
        match protocol::parse_update(resp) {
            Ok(()) => FfiCommentsResult::ok_empty(),
            Err(e) => FfiCommentsResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiCommentsResult::panic("panic in comments_parse_update"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `comments_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn comments_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.path);
        free_c_string(req.body);
        if !req.headers.is_null() {
            let headers = unsafe { from_raw_slice(req.headers, req.headers_len) };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiCommentsResult` returned by any `comments_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn comments_free_result(result: *mut FfiCommentsResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::CommentList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiCommentList) };
                if !list.items.is_null() {
                    let items = unsafe { from_raw_slice(list.items, list.len) };
                    for item in items.iter() {
                        free_c_string(item.name);
                        free_c_string(item.text);
                    }
                }
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn comments_free_string(s: *mut c_char) {
    let _ = catch_unwind(|| free_c_string(s));
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
