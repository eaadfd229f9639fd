//! Device provider trait.

use async_trait::async_trait;

use super::Verdict;
use crate::AuthResult;
use crate::types::Device;

/// Verifies device id/key pairs.
#[async_trait]
pub trait DeviceAuthenticator: Send + Sync {
    /// Authenticate a device.
    ///
    /// `key` is `None` when the request carried a device id but no key
    /// header; whether that is acceptable is the provider's decision.
    ///
    /// # Errors
    ///
    /// Returns an error only if the device store cannot be consulted.
    async fn authenticate(&self, device_id: &str, key: Option<&str>) -> AuthResult<Verdict<Device>>;
}
