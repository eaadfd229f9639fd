//! Login/password resolution from `Authorization: Basic`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderMap, header::AUTHORIZATION};

use super::{CredentialResolver, settle};
use crate::AuthResult;
use crate::credentials::{header_str, scheme_pair};
use crate::error::ProviderKind;
use crate::providers::UserAuthenticator;
use crate::types::User;

/// Resolves a [`User`] from a Basic credential.
#[derive(Clone)]
pub struct UserCredentialResolver {
    provider: Arc<dyn UserAuthenticator>,
    scheme: String,
}

impl UserCredentialResolver {
    /// Creates a resolver matching `scheme` (normally `Basic`).
    pub fn new(provider: Arc<dyn UserAuthenticator>, scheme: impl Into<String>) -> Self {
        Self {
            provider,
            scheme: scheme.into(),
        }
    }
}

#[async_trait]
impl CredentialResolver for UserCredentialResolver {
    type Identity = User;

    async fn resolve(&self, headers: &HeaderMap) -> AuthResult<Option<User>> {
        let Some(pair) = scheme_pair(header_str(headers, AUTHORIZATION), &self.scheme) else {
            return Ok(None);
        };

        let verdict = self
            .provider
            .authenticate(&pair.identifier, &pair.secret)
            .await?;
        Ok(settle(ProviderKind::User, verdict))
    }
}
