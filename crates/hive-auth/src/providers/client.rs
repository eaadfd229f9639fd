//! OAuth client provider trait.

use async_trait::async_trait;

use super::Verdict;
use crate::AuthResult;
use crate::types::OAuthClient;

/// Verifies OAuth client id/secret pairs.
///
/// This provider sees the same Basic credentials as [`super::UserAuthenticator`]
/// and must reject pairs that do not belong to a registered client.
#[async_trait]
pub trait ClientAuthenticator: Send + Sync {
    /// Authenticate an OAuth client.
    ///
    /// # Errors
    ///
    /// Returns an error only if the client store cannot be consulted.
    async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> AuthResult<Verdict<OAuthClient>>;
}
