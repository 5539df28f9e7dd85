//! postbox entry point.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl 'http://localhost:9999/posts.post?content=hello'
//!   curl 'http://localhost:9999/posts.get'
//!   curl 'http://localhost:9999/posts.delete?id=1'
//!   curl 'http://localhost:9999/posts.restore?id=1'

use std::sync::{Arc, Mutex};

use postbox::{PostStore, Server, routes};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let store = Arc::new(Mutex::new(PostStore::new()));
    let app = routes(store);

    Server::bind("0.0.0.0:9999")
        .serve(app)
        .await
        .expect("server error");
}
