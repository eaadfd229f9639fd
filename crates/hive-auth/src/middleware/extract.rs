//! Axum extractors for the state published by the authentication filter.
//!
//! All extractors fail with `AuthError::MissingContext` (500) when the
//! filter did not run for the request. An anonymous caller is not a failure.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::context::{RequestAuthentication, SecurityContext};
use crate::error::AuthError;
use crate::principal::Principal;
use crate::types::OAuthClient;

fn published<T: Clone + Send + Sync + 'static>(
    parts: &Parts,
    what: &'static str,
) -> Result<T, AuthError> {
    parts
        .extensions
        .get::<T>()
        .cloned()
        .ok_or(AuthError::MissingContext { what })
}

impl<S> FromRequestParts<S> for SecurityContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        published(parts, "SecurityContext")
    }
}

impl<S> FromRequestParts<S> for RequestAuthentication
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        published(parts, "RequestAuthentication")
    }
}

/// The principal of the current request.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Arc<Principal>);

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let slot: RequestAuthentication = published(parts, "RequestAuthentication")?;
        Ok(Self(slot.principal_arc()))
    }
}

/// The OAuth client of the current request, if one authenticated.
#[derive(Debug, Clone)]
pub struct CurrentClient(pub Option<OAuthClient>);

impl<S> FromRequestParts<S> for CurrentClient
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let slot: RequestAuthentication = published(parts, "RequestAuthentication")?;
        Ok(Self(slot.client().cloned()))
    }
}
