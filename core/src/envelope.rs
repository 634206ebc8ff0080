//! Validation of the `{status, data}` envelope every endpoint answers with.
//!
//! Checks run in a fixed order and the first failure wins:
//! status code, then JSON syntax, then envelope shape, then the `status`
//! flag. A body like `{"status": false}` therefore reports an unrecognized
//! schema rather than a falsy status.

use serde_json::{Map, Value};

use crate::error::ApiErrorKind;
use crate::http::HttpResponse;

/// The validated `data` member: `None` for JSON `null`.
pub type Payload = Option<Vec<Value>>;

pub fn validate(response: &HttpResponse) -> Result<Payload, ApiErrorKind> {
    if response.status != 200 {
        return Err(ApiErrorKind::UnexpectedStatus);
    }

    let json: Value = serde_json::from_slice(&response.body).map_err(|_| ApiErrorKind::JsonParse)?;

    let Value::Object(object) = json else {
        return Err(ApiErrorKind::UnrecognizedSchema);
    };
    let (status, data) = split(object).ok_or(ApiErrorKind::UnrecognizedSchema)?;

    if !status {
        return Err(ApiErrorKind::FalsyStatus);
    }
    Ok(data)
}

fn split(mut object: Map<String, Value>) -> Option<(bool, Payload)> {
    let status = object.get("status")?.as_bool()?;
    let data = match object.remove("data")? {
        Value::Null => None,
        Value::Array(items) => Some(items),
        _ => return None,
    };
    Some((status, data))
}
