//! OAuth client resolution from `Authorization: Basic`.
//!
//! The same header is also offered to the user resolver; each provider
//! rejects pairs it does not own.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderMap, header::AUTHORIZATION};

use super::{CredentialResolver, settle};
use crate::AuthResult;
use crate::credentials::{header_str, scheme_pair};
use crate::error::ProviderKind;
use crate::providers::ClientAuthenticator;
use crate::types::OAuthClient;

/// Resolves an [`OAuthClient`] from a Basic credential.
#[derive(Clone)]
pub struct ClientCredentialResolver {
    provider: Arc<dyn ClientAuthenticator>,
    scheme: String,
}

impl ClientCredentialResolver {
    /// Creates a resolver matching `scheme` (normally `Basic`).
    pub fn new(provider: Arc<dyn ClientAuthenticator>, scheme: impl Into<String>) -> Self {
        Self {
            provider,
            scheme: scheme.into(),
        }
    }
}

#[async_trait]
impl CredentialResolver for ClientCredentialResolver {
    type Identity = OAuthClient;

    async fn resolve(&self, headers: &HeaderMap) -> AuthResult<Option<OAuthClient>> {
        let Some(pair) = scheme_pair(header_str(headers, AUTHORIZATION), &self.scheme) else {
            return Ok(None);
        };

        let verdict = self
            .provider
            .authenticate(&pair.identifier, &pair.secret)
            .await?;
        Ok(settle(ProviderKind::OAuthClient, verdict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::Rejection;
    use crate::resolvers::mock::{Answer, Recorder, basic_header};
    use axum::http::HeaderValue;

    fn client() -> OAuthClient {
        OAuthClient {
            id: 3,
            name: "Dashboard".to_string(),
            oauth_id: "dashboard".to_string(),
            domain: "example.com".to_string(),
            redirect_uri: "https://example.com/cb".to_string(),
            subnet: None,
        }
    }

    fn headers(authorization: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(authorization).unwrap());
        headers
    }

    #[tokio::test]
    async fn test_resolves_client_pair() {
        let provider = Arc::new(Recorder::new(Answer::Accept(client())));
        let resolver = ClientCredentialResolver::new(provider.clone(), "Basic");

        let resolved = resolver
            .resolve(&headers(&basic_header("dashboard:s3cr3t")))
            .await
            .unwrap();

        assert_eq!(resolved, Some(client()));
        assert_eq!(
            provider.calls(),
            vec![("dashboard".to_string(), Some("s3cr3t".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_rejected_pair_is_absent() {
        let provider = Arc::new(Recorder::<OAuthClient>::new(Answer::Reject(
            Rejection::NotFound,
        )));
        let resolver = ClientCredentialResolver::new(provider, "Basic");

        let resolved = resolver
            .resolve(&headers(&basic_header("alice:secret")))
            .await
            .unwrap();

        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_bearer_header_skips_provider() {
        let provider = Arc::new(Recorder::new(Answer::Accept(client())));
        let resolver = ClientCredentialResolver::new(provider.clone(), "Basic");

        assert!(resolver.resolve(&headers("Bearer abc123")).await.unwrap().is_none());
        assert!(provider.calls().is_empty());
    }
}
