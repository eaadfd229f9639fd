//! OAuth client records.

use serde::{Deserialize, Serialize};

/// A registered OAuth client authenticated by its id and secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthClient {
    /// Internal identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Public OAuth client id, the identifier half of the Basic credential.
    pub oauth_id: String,

    /// Domain the client is registered for.
    pub domain: String,

    /// Registered redirect URI.
    pub redirect_uri: String,

    /// Optional subnet restriction, in CIDR notation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
}
