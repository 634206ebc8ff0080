//! `ApiClient` against a scripted transport.
//!
//! The transport records every request it is handed and replies from a
//! queue, so each test asserts both what went over the wire and how the
//! client treated the answer.

use std::cell::RefCell;
use std::collections::VecDeque;

use comments_core::{
    ApiClient, ApiErrorKind, ClientError, Comment, CommentFactory, HttpMethod, HttpRequest, HttpResponse,
    RawComment, Transport, TransportError,
};

#[derive(Default)]
struct ScriptedTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<HttpResponse>>,
}

impl ScriptedTransport {
    fn replying(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport.responses.borrow_mut().push_back(HttpResponse::new(status, body));
        transport
    }

    fn only_request(&self) -> HttpRequest {
        let requests = self.requests.borrow();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| TransportError("no scripted response left".to_string()))
    }
}

fn form_fields(request: &HttpRequest) -> Vec<(String, String)> {
    let body = request.body.as_deref().expect("form body");
    url::form_urlencoded::parse(body.as_bytes()).into_owned().collect()
}

fn api_kind(err: ClientError) -> ApiErrorKind {
    match err {
        ClientError::Api(err) => err.kind(),
        ClientError::Transport(err) => panic!("unexpected transport error: {err}"),
    }
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_returns_comments_in_server_order() {
    let body = r#"{"status":true,"data":[
        {"id":1,"name":"name1","text":"text1"},
        {"id":2,"name":"name2","text":"text2"}
    ]}"#;
    let transport = ScriptedTransport::replying(200, body);
    let client = ApiClient::new(&transport);

    let list = client.list().unwrap();

    let raw: Vec<RawComment> = serde_json::from_value(serde_json::json!([
        {"id": 1, "name": "name1", "text": "text1"},
        {"id": 2, "name": "name2", "text": "text2"},
    ]))
    .unwrap();
    assert_eq!(list, CommentFactory.from_list(raw));
    assert_eq!(list, vec![Comment::new(1, "name1", "text1"), Comment::new(2, "name2", "text2")]);

    let req = transport.only_request();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.path, "/comments");
    assert!(req.body.is_none());
}

#[test]
fn list_empty_data() {
    let transport = ScriptedTransport::replying(200, r#"{"status":true,"data":[]}"#);
    assert!(ApiClient::new(&transport).list().unwrap().is_empty());
}

#[test]
fn list_http_500() {
    let transport = ScriptedTransport::replying(500, "");
    let err = ApiClient::new(&transport).list().unwrap_err();
    assert_eq!(api_kind(err), ApiErrorKind::UnexpectedStatus);
}

#[test]
fn list_http_500_with_valid_envelope() {
    let transport = ScriptedTransport::replying(500, r#"{"status":true,"data":[]}"#);
    let err = ApiClient::new(&transport).list().unwrap_err();
    assert_eq!(api_kind(err), ApiErrorKind::UnexpectedStatus);
}

#[test]
fn list_empty_object() {
    let transport = ScriptedTransport::replying(200, "{}");
    let err = ApiClient::new(&transport).list().unwrap_err();
    assert_eq!(api_kind(err), ApiErrorKind::UnrecognizedSchema);
}

#[test]
fn list_falsy_status_with_valid_data() {
    let transport = ScriptedTransport::replying(200, r#"{"status":false,"data":[]}"#);
    let err = ApiClient::new(&transport).list().unwrap_err();
    assert_eq!(err.to_string(), "Api response status is falsy");
}

#[test]
fn list_error_carries_raw_response() {
    let transport = ScriptedTransport::replying(200, "{broken");
    let err = ApiClient::new(&transport).list().unwrap_err();
    let api = err.as_api().expect("api error");
    assert_eq!(api.kind(), ApiErrorKind::JsonParse);
    assert_eq!(api.response().status, 200);
    assert_eq!(api.response().body_text(), "{broken");
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

#[test]
fn add_posts_form_without_query() {
    let transport = ScriptedTransport::replying(200, r#"{"status":true,"data":null}"#);
    ApiClient::new(&transport).add("some name", "some text").unwrap();

    let req = transport.only_request();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.path, "/comment");
    assert!(!req.path.contains('?'));
    assert_eq!(
        form_fields(&req),
        vec![
            ("name".to_string(), "some name".to_string()),
            ("text".to_string(), "some text".to_string()),
        ]
    );
}

#[test]
fn add_falsy_status() {
    let transport = ScriptedTransport::replying(200, r#"{"status":false,"data":null}"#);
    let err = ApiClient::new(&transport).add("z", "z").unwrap_err();
    assert_eq!(api_kind(err), ApiErrorKind::FalsyStatus);
}

#[test]
fn add_non_200() {
    let transport = ScriptedTransport::replying(422, r#"{"status":true,"data":null}"#);
    let err = ApiClient::new(&transport).add("z", "z").unwrap_err();
    assert_eq!(api_kind(err), ApiErrorKind::UnexpectedStatus);
}

#[test]
fn add_bad_json() {
    let transport = ScriptedTransport::replying(200, r#"{"status":true,"data":nul"#);
    let err = ApiClient::new(&transport).add("z", "z").unwrap_err();
    assert_eq!(api_kind(err), ApiErrorKind::JsonParse);
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

#[test]
fn update_puts_form_to_id_path() {
    let transport = ScriptedTransport::replying(200, r#"{"status":true,"data":null}"#);
    ApiClient::new(&transport).update(1, "new name", "new text").unwrap();

    let req = transport.only_request();
    assert_eq!(req.method, HttpMethod::Put);
    assert_eq!(req.path, "/comment/1");
    assert_eq!(
        form_fields(&req),
        vec![
            ("name".to_string(), "new name".to_string()),
            ("text".to_string(), "new text".to_string()),
        ]
    );
}

#[test]
fn update_falsy_status() {
    let transport = ScriptedTransport::replying(200, r#"{"status":false,"data":null}"#);
    let err = ApiClient::new(&transport).update(1, "z", "z").unwrap_err();
    assert_eq!(api_kind(err), ApiErrorKind::FalsyStatus);
}

#[test]
fn update_schema_violation() {
    let transport = ScriptedTransport::replying(200, r#"{"status":true}"#);
    let err = ApiClient::new(&transport).update(1, "z", "z").unwrap_err();
    assert_eq!(api_kind(err), ApiErrorKind::UnrecognizedSchema);
}

#[test]
fn transport_failure_propagates() {
    let transport = ScriptedTransport::default();
    let err = ApiClient::new(&transport).update(1, "z", "z").unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
