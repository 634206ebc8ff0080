//! In-memory implementation of the comments API.
//!
//! Every handler answers `200` with a `{status, data}` envelope. Updating an
//! id that does not exist answers `status: false`; malformed forms or ids are
//! left to axum's extractor rejections (4xx).

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub name: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub name: String,
    pub text: String,
}

/// Response wrapper shared by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: bool,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    fn ok(data: Option<T>) -> Json<Self> {
        Json(Envelope { status: true, data })
    }

    fn falsy() -> Json<Self> {
        Json(Envelope { status: false, data: None })
    }
}

#[derive(Debug, Default)]
pub struct Store {
    last_id: u64,
    comments: BTreeMap<u64, Comment>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/comments", get(list_comments))
        .route("/comment", post(add_comment))
        .route("/comment/{id}", put(update_comment))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_comments(State(db): State<Db>) -> Json<Envelope<Vec<Comment>>> {
    let store = db.read().await;
    debug!(count = store.comments.len(), "list comments");
    Envelope::ok(Some(store.comments.values().cloned().collect()))
}

async fn add_comment(State(db): State<Db>, Form(form): Form<CommentForm>) -> Json<Envelope<()>> {
    let mut store = db.write().await;
    store.last_id += 1;
    let id = store.last_id;
    store.comments.insert(
        id,
        Comment {
            id,
            name: form.name,
            text: form.text,
        },
    );
    debug!(id, "comment added");
    Envelope::ok(None)
}

async fn update_comment(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Form(form): Form<CommentForm>,
) -> Json<Envelope<()>> {
    let mut store = db.write().await;
    let Some(comment) = store.comments.get_mut(&id) else {
        debug!(id, "update of unknown comment");
        return Envelope::falsy();
    };
    comment.name = form.name;
    comment.text = form.text;
    debug!(id, "comment updated");
    Envelope::ok(None)
}
