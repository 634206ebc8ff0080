//! Verify build/parse functions against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, the expected request, a simulated
//! response, and either the expected parse result or the expected error
//! message. The same files can drive a C host through the FFI crate.

use comments_core::protocol::{build_add, build_list, build_update, parse_add, parse_list, parse_update};
use comments_core::{Comment, HttpMethod, HttpRequest, HttpResponse};
use serde_json::Value;

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        other => panic!("unknown method: {other}"),
    }
}

fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, expected["path"].as_str().unwrap(), "{name}: path");

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");
    assert_eq!(req.body.as_deref(), expected["body"].as_str(), "{name}: body");
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn input_str<'a>(case: &'a Value, field: &str) -> &'a str {
    case["input"][field].as_str().unwrap()
}

/// Check a unit-returning parse result against `expected_error`, if any.
fn assert_unit_outcome(name: &str, case: &Value, result: Result<(), comments_core::ApiError>) {
    match case.get("expected_error") {
        Some(expected) => {
            let err = result.unwrap_err();
            assert_eq!(err.to_string(), expected.as_str().unwrap(), "{name}: error");
        }
        None => assert!(result.is_ok(), "{name}: expected success"),
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        // Verify build
        assert_request(name, &build_list(), &case["expected_request"]);

        // Verify parse
        let result = parse_list(simulated_response(case));
        match case.get("expected_error") {
            Some(expected) => {
                let err = result.unwrap_err();
                assert_eq!(err.to_string(), expected.as_str().unwrap(), "{name}: error");
            }
            None => {
                let expected: Vec<Comment> = case["expected_result"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|c| {
                        Comment::new(
                            c["id"].as_u64().unwrap(),
                            c["name"].as_str().unwrap(),
                            c["text"].as_str().unwrap(),
                        )
                    })
                    .collect();
                assert_eq!(result.unwrap(), expected, "{name}: parsed result");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[test]
fn add_test_vectors() {
    let raw = include_str!("../../test-vectors/add.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = build_add(input_str(case, "name"), input_str(case, "text"));
        assert_request(name, &req, &case["expected_request"]);

        assert_unit_outcome(name, case, parse_add(simulated_response(case)));
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let raw = include_str!("../../test-vectors/update.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();

        let req = build_update(id, input_str(case, "name"), input_str(case, "text"));
        assert_request(name, &req, &case["expected_request"]);

        assert_unit_outcome(name, case, parse_update(simulated_response(case)));
    }
}
