//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, boxed slices behind raw pointers
//! instead of `Vec`, and tagged enums with explicit discriminants.
//! Conversion functions live here to keep `lib.rs` focused on the
//! `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use comments_core::{ApiError, ApiErrorKind, Comment, HttpMethod, HttpRequest};

/// Convert to a C string, dropping interior NUL bytes C cannot represent.
pub(crate) fn c_string(s: String) -> *mut c_char {
    let bytes: Vec<u8> = s.into_bytes().into_iter().filter(|&b| b != 0).collect();
    CString::new(bytes).unwrap_or_default().into_raw()
}

/// Leak `items` as a boxed slice; null when empty.
pub(crate) fn into_raw_slice<T>(items: Vec<T>) -> (*mut T, u32) {
    if items.is_empty() {
        return (std::ptr::null_mut(), 0);
    }
    let len = items.len() as u32;
    let ptr = Box::into_raw(items.into_boxed_slice()) as *mut T;
    (ptr, len)
}

/// Reclaim a slice leaked by `into_raw_slice`.
///
/// # Safety
/// `ptr`/`len` must come from `into_raw_slice` and not have been freed.
pub(crate) unsafe fn from_raw_slice<T>(ptr: *mut T, len: u32) -> Box<[T]> {
    Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len as usize))
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Put => FfiHttpMethod::Put,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// `path` is relative (`/comments`); the host prepends its base URL.
/// `body` is null for requests without one.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        let headers: Vec<FfiHeader> = req
            .headers
            .into_iter()
            .map(|(k, v)| FfiHeader {
                key: c_string(k),
                value: c_string(v),
            })
            .collect();
        let (headers, headers_len) = into_raw_slice(headers);

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path: c_string(req.path),
            headers,
            headers_len,
            body: req.body.map(c_string).unwrap_or(std::ptr::null_mut()),
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The host fills this in after executing a request. `body` points at
/// `body_len` raw bytes (no terminator needed) and may be null when
/// `body_len` is 0. The FFI layer reads but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const u8,
    pub body_len: usize,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiCommentsResult`.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    UnexpectedStatus = 1,
    JsonParse = 2,
    UnrecognizedSchema = 3,
    FalsyStatus = 4,
    Panic = 5,
    NullArg = 6,
}

impl From<ApiErrorKind> for FfiErrorCode {
    fn from(kind: ApiErrorKind) -> Self {
        match kind {
            ApiErrorKind::UnexpectedStatus => FfiErrorCode::UnexpectedStatus,
            ApiErrorKind::JsonParse => FfiErrorCode::JsonParse,
            ApiErrorKind::UnrecognizedSchema => FfiErrorCode::UnrecognizedSchema,
            ApiErrorKind::FalsyStatus => FfiErrorCode::FalsyStatus,
        }
    }
}

/// Tag that tells `comments_free_result` what `FfiCommentsResult::data`
/// points to.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiDataTag {
    None = 0,
    CommentList = 1,
}

/// A single comment exposed to C.
#[repr(C)]
pub struct FfiComment {
    pub id: u64,
    pub name: *mut c_char,
    pub text: *mut c_char,
}

/// A list of comments exposed to C.
#[repr(C)]
pub struct FfiCommentList {
    pub items: *mut FfiComment,
    pub len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` names the rejected check, `error_message` is the
/// human-readable message, `http_status` is the status the host passed in,
/// and `data` is null.
#[repr(C)]
pub struct FfiCommentsResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiCommentsResult {
    fn boxed(self) -> *mut Self {
        Box::into_raw(Box::new(self))
    }

    /// Build a success result carrying an `FfiCommentList`.
    pub(crate) fn ok_comment_list(comments: Vec<Comment>) -> *mut Self {
        let items: Vec<FfiComment> = comments
            .into_iter()
            .map(|c| FfiComment {
                id: c.id(),
                name: c_string(c.name().to_string()),
                text: c_string(c.text().to_string()),
            })
            .collect();
        let (items, len) = into_raw_slice(items);

        let list = Box::new(FfiCommentList { items, len });
        FfiCommentsResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 200,
            data_tag: FfiDataTag::CommentList,
            data: Box::into_raw(list) as *mut std::ffi::c_void,
        }
        .boxed()
    }

    /// Build a success result with no data payload (add, update).
    pub(crate) fn ok_empty() -> *mut Self {
        FfiCommentsResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 200,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }
        .boxed()
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        FfiCommentsResult {
            error_code: err.kind().into(),
            error_message: c_string(err.to_string()),
            http_status: err.response().status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }
        .boxed()
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        FfiCommentsResult {
            error_code: FfiErrorCode::NullArg,
            error_message: c_string(format!("null argument: {name}")),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }
        .boxed()
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        FfiCommentsResult {
            error_code: FfiErrorCode::Panic,
            error_message: c_string(msg.to_string()),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }
        .boxed()
    }
}
