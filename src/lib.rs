//! # postbox
//!
//! An in-memory post service with soft delete and restore.
//!
//! Every endpoint is an RPC-style action addressed by its literal path, with
//! all input in the query string:
//!
//! | Path | Params | Does |
//! |---|---|---|
//! | `/posts.get` | — | list non-removed posts, newest first |
//! | `/posts.getById` | `id` | fetch one non-removed post |
//! | `/posts.post` | `content` | create a post |
//! | `/posts.edit` | `id`, `content` | replace a post's content |
//! | `/posts.delete` | `id` | mark a post removed |
//! | `/posts.restore` | `id` | bring a removed post back |
//!
//! Routing is by path alone — no verbs, no path parameters. A request either
//! succeeds with a JSON body (`200`), is rejected as malformed input (`400`,
//! empty body), or misses (`404`, empty body). There is no persistence: the
//! store lives in process memory and dies with it.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::{Arc, Mutex};
//! use postbox::{PostStore, Server, routes};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(Mutex::new(PostStore::new()));
//!     let app = routes(store);
//!
//!     Server::bind("0.0.0.0:9999").serve(app).await.unwrap();
//! }
//! ```

mod error;
mod handler;
mod posts;
mod request;
mod response;
mod router;
mod server;
mod store;

pub use error::Error;
pub use handler::Handler;
pub use posts::{ActionError, SharedStore, routes};
pub use request::{Query, Request};
pub use response::{IntoResponse, Json, Response};
pub use router::Router;
pub use server::Server;
pub use store::{Post, PostStore};
