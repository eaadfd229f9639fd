//! Access key records.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An access key authenticated by its opaque bearer value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKey {
    /// Internal identifier.
    pub id: i64,

    /// Human-readable label.
    pub label: String,

    /// The key value presented by callers. Read from provider records,
    /// never written back out.
    #[serde(skip_serializing)]
    pub key: String,

    /// Owner of the key.
    pub user_id: i64,

    /// Expiration instant; `None` means the key never expires.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub expiration: Option<OffsetDateTime>,
}

impl std::fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessKey")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("key", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("expiration", &self.expiration)
            .finish()
    }
}
