//! Device records.

use serde::{Deserialize, Serialize};

/// A device authenticated by its identifier and key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Internal identifier.
    pub id: i64,

    /// Public identifier, the value sent in the device id header.
    pub guid: String,

    /// Human-readable name.
    pub name: String,

    /// Network the device belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<i64>,

    /// Blocked devices may authenticate but should not be allowed to act.
    #[serde(default)]
    pub blocked: bool,
}
