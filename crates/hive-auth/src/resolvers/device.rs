//! Device resolution from the device id and key headers.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderName};

use super::{CredentialResolver, settle};
use crate::AuthResult;
use crate::credentials::header_str;
use crate::error::ProviderKind;
use crate::providers::DeviceAuthenticator;
use crate::types::Device;

/// Resolves a [`Device`] from two custom headers.
///
/// The key header is only read once the id header is known to be present.
#[derive(Clone)]
pub struct DeviceCredentialResolver {
    provider: Arc<dyn DeviceAuthenticator>,
    id_header: HeaderName,
    key_header: HeaderName,
}

impl DeviceCredentialResolver {
    /// Creates a resolver reading the given headers.
    pub fn new(
        provider: Arc<dyn DeviceAuthenticator>,
        id_header: HeaderName,
        key_header: HeaderName,
    ) -> Self {
        Self {
            provider,
            id_header,
            key_header,
        }
    }
}

#[async_trait]
impl CredentialResolver for DeviceCredentialResolver {
    type Identity = Device;

    async fn resolve(&self, headers: &HeaderMap) -> AuthResult<Option<Device>> {
        let Some(device_id) = header_str(headers, &self.id_header) else {
            return Ok(None);
        };
        let key = header_str(headers, &self.key_header);

        let verdict = self.provider.authenticate(device_id, key).await?;
        Ok(settle(ProviderKind::Device, verdict))
    }
}
