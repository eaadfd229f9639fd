//! Authentication provider interfaces.
//!
//! Providers are the collaborators that own credential verification. The
//! dispatcher receives them by injection and only ever sees their verdicts:
//!
//! - `Ok(Verdict::Accepted(identity))` - the credential is valid
//! - `Ok(Verdict::Rejected(reason))` - the credential is unknown, wrong or
//!   malformed; the dispatcher treats it exactly like a missing credential
//! - `Err(AuthError)` - the provider itself failed; the request fails
//!
//! # Implementations
//!
//! Implementations live with the credential stores of the hosting service.

pub mod access_key;
pub mod client;
pub mod device;
pub mod user;

pub use access_key::AccessKeyAuthenticator;
pub use client::ClientAuthenticator;
pub use device::DeviceAuthenticator;
pub use user::UserAuthenticator;

use std::fmt;

/// Why a provider did not accept a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// No identity is registered under the presented identifier.
    NotFound,
    /// The identity exists but the secret does not match.
    InvalidCredentials,
    /// The identifier or secret is not well-formed for this provider.
    InvalidArgument,
    /// The identity exists but is locked, disabled or expired.
    Inactive,
}

impl Rejection {
    /// Returns the name used in log fields.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidCredentials => "invalid_credentials",
            Self::InvalidArgument => "invalid_argument",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of verifying a credential that a provider was able to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<T> {
    /// The credential identifies `T`.
    Accepted(T),
    /// The credential does not identify anything this provider owns.
    Rejected(Rejection),
}

impl<T> Verdict<T> {
    /// Converts into the accepted identity, discarding the rejection reason.
    #[must_use]
    pub fn accepted(self) -> Option<T> {
        match self {
            Self::Accepted(identity) => Some(identity),
            Self::Rejected(_) => None,
        }
    }

    /// Builds a verdict from a lookup result, rejecting `None` as `NotFound`.
    #[must_use]
    pub fn from_lookup(identity: Option<T>) -> Self {
        identity.map_or(Self::Rejected(Rejection::NotFound), Self::Accepted)
    }
}
