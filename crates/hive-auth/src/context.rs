//! Per-request authentication state.
//!
//! Both values are stored in the extensions of the request being processed,
//! so their lifetime is exactly that of the request and concurrent requests
//! never observe each other's identity.

use std::sync::Arc;

use crate::principal::Principal;
use crate::types::OAuthClient;

/// Transport security signal provided by the hosting server.
///
/// Servers that terminate TLS insert this into request extensions. The
/// authentication filter reads it; it never enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionSecurity {
    /// Whether the connection the request arrived on is encrypted.
    pub secure: bool,
}

impl ConnectionSecurity {
    /// An encrypted connection.
    #[must_use]
    pub fn secure() -> Self {
        Self { secure: true }
    }

    /// A plaintext connection.
    #[must_use]
    pub fn insecure() -> Self {
        Self { secure: false }
    }
}

/// The resolved principal plus the transport flag, for authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityContext {
    principal: Arc<Principal>,
    secure: bool,
}

impl SecurityContext {
    /// Creates a security context.
    #[must_use]
    pub fn new(principal: Arc<Principal>, secure: bool) -> Self {
        Self { principal, secure }
    }

    /// The resolved principal.
    #[must_use]
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Returns `true` if the request arrived over a secure connection.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Returns `true` if at least one identity facet was resolved.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.principal.is_anonymous()
    }
}

/// The request-scoped slot: the principal and the optional OAuth client.
///
/// The client is deliberately kept next to the principal rather than inside
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestAuthentication {
    principal: Arc<Principal>,
    client: Option<OAuthClient>,
}

impl RequestAuthentication {
    /// Creates the request-scoped slot.
    #[must_use]
    pub fn new(principal: Arc<Principal>, client: Option<OAuthClient>) -> Self {
        Self { principal, client }
    }

    /// The resolved principal.
    #[must_use]
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Shared handle to the resolved principal.
    #[must_use]
    pub fn principal_arc(&self) -> Arc<Principal> {
        Arc::clone(&self.principal)
    }

    /// The OAuth client authenticated by a Basic credential, if any.
    #[must_use]
    pub fn client(&self) -> Option<&OAuthClient> {
        self.client.as_ref()
    }
}
