//! User provider trait.

use async_trait::async_trait;

use super::Verdict;
use crate::AuthResult;
use crate::types::User;

/// Verifies login/password pairs.
#[async_trait]
pub trait UserAuthenticator: Send + Sync {
    /// Authenticate a user by login and password.
    ///
    /// # Returns
    ///
    /// - `Ok(Verdict::Accepted(user))` if the pair is valid
    /// - `Ok(Verdict::Rejected(_))` if the login is unknown, malformed, or the
    ///   password does not match
    ///
    /// # Errors
    ///
    /// Returns an error only if the user store cannot be consulted.
    async fn authenticate(&self, login: &str, password: &str) -> AuthResult<Verdict<User>>;
}
