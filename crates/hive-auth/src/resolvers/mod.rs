//! Credential resolvers.
//!
//! A resolver extracts one credential scheme from request headers and asks
//! one provider to verify it. Resolvers own the conversion of malformed and
//! rejected credentials into `None`; provider faults are returned as errors
//! untouched.
//!
//! | Resolver | Headers | Provider |
//! |---|---|---|
//! | [`DeviceCredentialResolver`] | device id + device key | [`DeviceAuthenticator`](crate::providers::DeviceAuthenticator) |
//! | [`UserCredentialResolver`] | `Authorization: Basic` | [`UserAuthenticator`](crate::providers::UserAuthenticator) |
//! | [`KeyCredentialResolver`] | `Authorization: Bearer` | [`AccessKeyAuthenticator`](crate::providers::AccessKeyAuthenticator) |
//! | [`ClientCredentialResolver`] | `Authorization: Basic` | [`ClientAuthenticator`](crate::providers::ClientAuthenticator) |

pub mod access_key;
pub mod client;
pub mod device;
pub mod user;

pub use access_key::KeyCredentialResolver;
pub use client::ClientCredentialResolver;
pub use device::DeviceCredentialResolver;
pub use user::UserCredentialResolver;

use async_trait::async_trait;
use axum::http::HeaderMap;

use crate::AuthResult;
use crate::error::ProviderKind;
use crate::providers::Verdict;

/// Resolves one credential scheme into an optional identity.
#[async_trait]
pub trait CredentialResolver: Send + Sync {
    /// The identity this resolver produces.
    type Identity: Send;

    /// Resolves the identity carried by `headers`.
    ///
    /// Returns `Ok(None)` when the credential is missing, malformed or
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the provider failed.
    async fn resolve(&self, headers: &HeaderMap) -> AuthResult<Option<Self::Identity>>;
}

/// Collapses a verdict into an optional identity.
fn settle<T>(provider: ProviderKind, verdict: Verdict<T>) -> Option<T> {
    if let Verdict::Rejected(reason) = &verdict {
        tracing::debug!(provider = %provider, reason = %reason, "Credential rejected");
    }
    verdict.accepted()
}
