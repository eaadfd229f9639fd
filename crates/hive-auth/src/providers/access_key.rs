//! Access key provider trait.

use async_trait::async_trait;

use super::Verdict;
use crate::AuthResult;
use crate::types::AccessKey;

/// Verifies opaque access keys.
#[async_trait]
pub trait AccessKeyAuthenticator: Send + Sync {
    /// Authenticate an access key.
    ///
    /// Expired keys should be rejected with `Rejection::Inactive`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the key store cannot be consulted.
    async fn authenticate(&self, key: &str) -> AuthResult<Verdict<AccessKey>>;
}
