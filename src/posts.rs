//! Action handlers for the post endpoints.
//!
//! Each action runs in three steps: parse the query string into a typed
//! params struct (failure is a 400 before the store is ever touched), take
//! the store lock, read or mutate. The lock is held only for the synchronous
//! body of the action — never across an await — so each request's
//! validate-mutate-respond sequence is atomic with respect to every other
//! request.
//!
//! Outcomes are classified by [`ActionError`]: malformed input is
//! `BadRequest`, a missing or ineligible post is `NotFound`, and both map to
//! bodiless responses. Everything else is a 200 with the affected post (or
//! post list) as JSON.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use http::StatusCode;

use crate::handler::Handler;
use crate::request::{Query, Request};
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;
use crate::store::{Post, PostStore};

/// The store as shared by every handler.
pub type SharedStore = Arc<Mutex<PostStore>>;

/// How an action fails. There is no server-error variant: every failure in
/// the action layer is a classification of client input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionError {
    /// Missing or malformed parameters, or an operation that contradicts the
    /// post's current state (restoring a post that is not removed).
    BadRequest,
    /// No post matches, or the matching post is not eligible for the
    /// operation (removed posts are invisible to get/edit/delete).
    NotFound,
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        };
        Response::status(status)
    }
}

// ── Typed parameters ──────────────────────────────────────────────────────────

/// `id` — must be present and parse as an unsigned integer.
struct IdParams {
    id: u64,
}

impl IdParams {
    fn from_query(query: &Query) -> Result<Self, ActionError> {
        let id = query
            .get("id")
            .and_then(|raw| raw.parse().ok())
            .ok_or(ActionError::BadRequest)?;
        Ok(Self { id })
    }
}

/// `content` — presence is the only requirement; the empty string is valid.
struct CreateParams {
    content: String,
}

impl CreateParams {
    fn from_query(query: &Query) -> Result<Self, ActionError> {
        let content = query.get("content").ok_or(ActionError::BadRequest)?.to_owned();
        Ok(Self { content })
    }
}

/// `id` and `content`, both validated as above.
struct EditParams {
    id: u64,
    content: String,
}

impl EditParams {
    fn from_query(query: &Query) -> Result<Self, ActionError> {
        let IdParams { id } = IdParams::from_query(query)?;
        let CreateParams { content } = CreateParams::from_query(query)?;
        Ok(Self { id, content })
    }
}

// ── Actions ───────────────────────────────────────────────────────────────────

async fn list(_req: Request, store: SharedStore) -> Json<Vec<Post>> {
    Json(lock(&store).list(false))
}

async fn get_by_id(req: Request, store: SharedStore) -> Result<Json<Post>, ActionError> {
    let IdParams { id } = IdParams::from_query(req.query())?;
    let store = lock(&store);
    store
        .find_by_id(id)
        .filter(|post| !post.removed)
        .cloned()
        .map(Json)
        .ok_or(ActionError::NotFound)
}

async fn create(req: Request, store: SharedStore) -> Result<Json<Post>, ActionError> {
    let CreateParams { content } = CreateParams::from_query(req.query())?;
    Ok(Json(lock(&store).create(content)))
}

async fn edit(req: Request, store: SharedStore) -> Result<Json<Post>, ActionError> {
    let EditParams { id, content } = EditParams::from_query(req.query())?;
    let mut store = lock(&store);
    if !store.find_by_id(id).is_some_and(|post| !post.removed) {
        return Err(ActionError::NotFound);
    }
    let updated = store.set_content(id, content).ok_or(ActionError::NotFound)?;
    Ok(Json(updated))
}

async fn delete(req: Request, store: SharedStore) -> Result<Json<Post>, ActionError> {
    let IdParams { id } = IdParams::from_query(req.query())?;
    let mut store = lock(&store);
    // An already-removed post is outside the eligible set, same as absent.
    if !store.find_by_id(id).is_some_and(|post| !post.removed) {
        return Err(ActionError::NotFound);
    }
    let updated = store.set_removed(id, true).ok_or(ActionError::NotFound)?;
    Ok(Json(updated))
}

async fn restore(req: Request, store: SharedStore) -> Result<Json<Post>, ActionError> {
    let IdParams { id } = IdParams::from_query(req.query())?;
    let mut store = lock(&store);
    match store.find_by_id(id).map(|post| post.removed) {
        // No post with that id was ever created.
        None => Err(ActionError::NotFound),
        // Restoring an active post is a client error, not a miss.
        Some(false) => Err(ActionError::BadRequest),
        Some(true) => {
            let updated = store.set_removed(id, false).ok_or(ActionError::NotFound)?;
            Ok(Json(updated))
        }
    }
}

// ── Wiring ────────────────────────────────────────────────────────────────────

/// Builds the service router over `store`.
pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/posts.get", with_store(&store, list))
        .route("/posts.getById", with_store(&store, get_by_id))
        .route("/posts.post", with_store(&store, create))
        .route("/posts.edit", with_store(&store, edit))
        .route("/posts.delete", with_store(&store, delete))
        .route("/posts.restore", with_store(&store, restore))
}

/// Adapts an action taking `(Request, SharedStore)` to the router's
/// single-argument handler shape by capturing a handle to the store.
fn with_store<A, Fut, R>(store: &SharedStore, action: A) -> impl Handler
where
    A: Fn(Request, SharedStore) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    let store = Arc::clone(store);
    move |req| action(req, Arc::clone(&store))
}

fn lock(store: &SharedStore) -> MutexGuard<'_, PostStore> {
    // Poisoning means another request panicked mid-mutation; nothing
    // sensible is left to serve.
    store.lock().expect("post store lock poisoned")
}
