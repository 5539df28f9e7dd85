//! Radix-tree request router.
//!
//! One tree, literal paths only. Routing ignores the HTTP method — an action
//! path names exactly one handler, whatever verb the client used. You
//! register a path, you get a handler. That is all.

use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::route`] call returns `self` so registrations chain.
pub struct Router {
    routes: MatchitRouter<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: MatchitRouter::new() }
    }

    /// Register a handler for a literal path. Returns `self` for chaining.
    ///
    /// ```rust,no_run
    /// # use postbox::{Request, Response, Router};
    /// # async fn list(_: Request) -> Response { Response::text("") }
    /// # async fn create(_: Request) -> Response { Response::text("") }
    /// Router::new()
    ///     .route("/posts.get", list)
    ///     .route("/posts.post", create);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics on a duplicate or malformed path — misregistration is a startup
    /// bug, not a runtime condition.
    pub fn route(mut self, path: &str, handler: impl Handler) -> Self {
        self.routes
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(&self, path: &str) -> Option<BoxedHandler> {
        let matched = self.routes.at(path).ok()?;
        Some(Arc::clone(matched.value))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ErasedHandler;
    use crate::request::{Query, Request};
    use crate::response::Response;

    fn request(path: &str) -> Request {
        Request::new("GET".to_owned(), path.to_owned(), Query::parse(""))
    }

    async fn pong(_req: Request) -> Response {
        Response::text("pong")
    }

    #[tokio::test]
    async fn lookup_finds_registered_path() {
        let router = Router::new().route("/posts.get", pong);
        let handler = router.lookup("/posts.get").expect("route registered");
        let res = handler.call(request("/posts.get")).await;
        assert_eq!(res.body(), b"pong");
    }

    #[test]
    fn lookup_misses_unknown_path() {
        let router = Router::new().route("/posts.get", pong);
        assert!(router.lookup("/unknown").is_none());
        assert!(router.lookup("/posts.get/extra").is_none());
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn duplicate_route_panics() {
        let _ = Router::new().route("/posts.get", pong).route("/posts.get", pong);
    }
}
