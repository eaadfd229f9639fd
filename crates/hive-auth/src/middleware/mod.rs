//! HTTP integration for the authentication filter.
//!
//! This module provides:
//!
//! - [`authentication_middleware`] for `axum::middleware::from_fn_with_state`
//! - [`AuthenticationLayer`], a `tower::Layer` for any `Request<Body>` service
//! - Extractors that read the published state back in handlers
//! - `IntoResponse` for [`AuthError`](crate::AuthError)
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use axum::{Router, middleware::from_fn_with_state, routing::get};
//! use hive_auth::middleware::{CurrentPrincipal, authentication_middleware};
//!
//! async fn whoami(CurrentPrincipal(principal): CurrentPrincipal) -> String {
//!     principal.to_string()
//! }
//!
//! let filter = Arc::new(filter);
//! let app = Router::new()
//!     .route("/whoami", get(whoami))
//!     .layer(from_fn_with_state(filter, authentication_middleware));
//! ```

pub mod error;
pub mod extract;
pub mod layer;

pub use extract::{CurrentClient, CurrentPrincipal};
pub use layer::{AuthenticationLayer, AuthenticationService, authentication_middleware};
