//! Authentication error types.
//!
//! Only infrastructure faults are errors at this layer. A credential that is
//! malformed or rejected by its provider is not an error: it resolves to an
//! absent identity facet (see [`crate::providers::Verdict`]).

use std::fmt;

/// Errors that abort an authentication dispatch.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// An authentication provider failed for reasons unrelated to the
    /// credential it was given (unreachable backend, misconfiguration).
    #[error("Provider error: {provider} - {message}")]
    Provider {
        /// The provider that failed.
        provider: ProviderKind,
        /// Description of the failure.
        message: String,
    },

    /// A credential store could not be read.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage error.
        message: String,
    },

    /// The authentication configuration is invalid.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
    },

    /// A handler asked for authentication state that was never published,
    /// usually because the authentication middleware is not installed.
    #[error("Authentication context missing: {what}")]
    MissingContext {
        /// Name of the missing value.
        what: &'static str,
    },

    /// An unexpected internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl AuthError {
    /// Creates a new `Provider` error.
    #[must_use]
    pub fn provider(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Provider {
            provider,
            message: message.into(),
        }
    }

    /// Creates a new `Storage` error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a new `Configuration` error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the error category for logging purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Provider { .. } => ErrorCategory::Provider,
            Self::Storage { .. } => ErrorCategory::Infrastructure,
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::MissingContext { .. } | Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

impl From<crate::config::ConfigError> for AuthError {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}

/// The four collaborators a dispatch can call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Login/password verification.
    User,
    /// Device id/key verification.
    Device,
    /// Opaque access key verification.
    AccessKey,
    /// OAuth client id/secret verification.
    OAuthClient,
}

impl ProviderKind {
    /// Returns the name used in log fields and error messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Device => "device",
            Self::AccessKey => "access_key",
            Self::OAuthClient => "oauth_client",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories of authentication errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// An authentication provider failed.
    Provider,
    /// Infrastructure/storage errors.
    Infrastructure,
    /// Configuration errors.
    Configuration,
    /// Internal server errors.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider => write!(f, "provider"),
            Self::Infrastructure => write!(f, "infrastructure"),
            Self::Configuration => write!(f, "configuration"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::provider(ProviderKind::User, "connection refused");
        assert_eq!(err.to_string(), "Provider error: user - connection refused");

        let err = AuthError::storage("database down");
        assert_eq!(err.to_string(), "Storage error: database down");

        let err = AuthError::MissingContext {
            what: "SecurityContext",
        };
        assert_eq!(
            err.to_string(),
            "Authentication context missing: SecurityContext"
        );
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            AuthError::provider(ProviderKind::Device, "x").category(),
            ErrorCategory::Provider
        );
        assert_eq!(
            AuthError::storage("x").category(),
            ErrorCategory::Infrastructure
        );
        assert_eq!(
            AuthError::configuration("x").category(),
            ErrorCategory::Configuration
        );
        assert_eq!(AuthError::internal("x").category(), ErrorCategory::Internal);
    }

    #[test]
    fn test_provider_kind_display() {
        assert_eq!(ProviderKind::OAuthClient.to_string(), "oauth_client");
        assert_eq!(ProviderKind::AccessKey.to_string(), "access_key");
        assert_eq!(ErrorCategory::Provider.to_string(), "provider");
    }
}
