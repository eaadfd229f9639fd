//! Middleware that runs the authentication filter before the handler.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};

use crate::filter::AuthenticationFilter;

/// Authentication middleware for `axum::middleware::from_fn_with_state`.
///
/// Publishes [`SecurityContext`](crate::SecurityContext) and
/// [`RequestAuthentication`](crate::RequestAuthentication) in the request
/// extensions and calls the next handler. Requests without valid credentials
/// continue as anonymous. A provider fault ends the request with a 500.
pub async fn authentication_middleware(
    State(filter): State<Arc<AuthenticationFilter>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match filter.authenticate_request(&mut req).await {
        Ok(_) => next.run(req).await,
        Err(e) => e.into_response(),
    }
}

// ---------------------------------------------------------------------------
// AuthenticationLayer
// ---------------------------------------------------------------------------

/// Tower layer that authenticates every request before the inner service.
#[derive(Clone)]
pub struct AuthenticationLayer {
    filter: Arc<AuthenticationFilter>,
}

impl AuthenticationLayer {
    /// Creates a layer sharing `filter`.
    pub fn new(filter: Arc<AuthenticationFilter>) -> Self {
        Self { filter }
    }
}

impl<S> Layer<S> for AuthenticationLayer {
    type Service = AuthenticationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthenticationService {
            inner,
            filter: Arc::clone(&self.filter),
        }
    }
}

// ---------------------------------------------------------------------------
// AuthenticationService
// ---------------------------------------------------------------------------

/// Service wrapper produced by [`AuthenticationLayer`].
#[derive(Clone)]
pub struct AuthenticationService<S> {
    inner: S,
    filter: Arc<AuthenticationFilter>,
}

impl<S> Service<Request<Body>> for AuthenticationService<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let filter = Arc::clone(&self.filter);
        // The clone is not ready; keep it and call the one poll_ready prepared.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            match filter.authenticate_request(&mut req).await {
                Ok(_) => inner.call(req).await,
                Err(e) => Ok(e.into_response()),
            }
        })
    }
}
