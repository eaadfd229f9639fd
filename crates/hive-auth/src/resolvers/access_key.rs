//! Access key resolution from `Authorization: Bearer`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderMap, header::AUTHORIZATION};

use super::{CredentialResolver, settle};
use crate::AuthResult;
use crate::credentials::{header_str, scheme_token};
use crate::error::ProviderKind;
use crate::providers::AccessKeyAuthenticator;
use crate::types::AccessKey;

/// Resolves an [`AccessKey`] from a bearer credential.
///
/// The token after the scheme is passed to the provider verbatim.
#[derive(Clone)]
pub struct KeyCredentialResolver {
    provider: Arc<dyn AccessKeyAuthenticator>,
    scheme: String,
}

impl KeyCredentialResolver {
    /// Creates a resolver matching `scheme` (normally `Bearer`).
    pub fn new(provider: Arc<dyn AccessKeyAuthenticator>, scheme: impl Into<String>) -> Self {
        Self {
            provider,
            scheme: scheme.into(),
        }
    }
}

#[async_trait]
impl CredentialResolver for KeyCredentialResolver {
    type Identity = AccessKey;

    async fn resolve(&self, headers: &HeaderMap) -> AuthResult<Option<AccessKey>> {
        let Some(key) = scheme_token(header_str(headers, AUTHORIZATION), &self.scheme) else {
            return Ok(None);
        };

        let verdict = self.provider.authenticate(key).await?;
        Ok(settle(ProviderKind::AccessKey, verdict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::Rejection;
    use crate::resolvers::mock::{Answer, Recorder, basic_header};
    use axum::http::HeaderValue;

    fn access_key() -> AccessKey {
        AccessKey {
            id: 9,
            label: "ci".to_string(),
            key: "abc123".to_string(),
            user_id: 1,
            expiration: None,
        }
    }

    fn headers(authorization: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(authorization).unwrap());
        headers
    }

    #[tokio::test]
    async fn test_resolves_bearer_key() {
        let provider = Arc::new(Recorder::new(Answer::Accept(access_key())));
        let resolver = KeyCredentialResolver::new(provider.clone(), "Bearer");

        let resolved = resolver.resolve(&headers("Bearer abc123")).await.unwrap();

        assert_eq!(resolved, Some(access_key()));
        assert_eq!(provider.calls(), vec![("abc123".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_scheme_is_case_insensitive() {
        let provider = Arc::new(Recorder::new(Answer::Accept(access_key())));
        let resolver = KeyCredentialResolver::new(provider.clone(), "Bearer");

        resolver.resolve(&headers("BEARER   abc123  ")).await.unwrap();

        assert_eq!(provider.calls(), vec![("abc123".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_basic_header_skips_provider() {
        let provider = Arc::new(Recorder::new(Answer::Accept(access_key())));
        let resolver = KeyCredentialResolver::new(provider.clone(), "Bearer");

        let resolved = resolver
            .resolve(&headers(&basic_header("alice:secret")))
            .await
            .unwrap();

        assert!(resolved.is_none());
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_token_skips_provider() {
        let provider = Arc::new(Recorder::new(Answer::Accept(access_key())));
        let resolver = KeyCredentialResolver::new(provider.clone(), "Bearer");

        assert!(resolver.resolve(&headers("Bearer")).await.unwrap().is_none());
        assert!(resolver.resolve(&headers("Bear")).await.unwrap().is_none());
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_expired_key_is_absent() {
        let provider = Arc::new(Recorder::<AccessKey>::new(Answer::Reject(
            Rejection::Inactive,
        )));
        let resolver = KeyCredentialResolver::new(provider, "Bearer");

        assert!(resolver.resolve(&headers("Bearer old")).await.unwrap().is_none());
    }
}
