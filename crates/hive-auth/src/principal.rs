//! The resolved identity of a request.

use std::fmt;

use serde::Serialize;

use crate::types::{AccessKey, Device, User};

/// Identity facets resolved for one request.
///
/// Any subset of facets may be present. A principal with no facets is
/// anonymous. This type does not judge combinations; a request carrying both
/// device and user credentials simply yields both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    user: Option<User>,
    device: Option<Device>,
    access_key: Option<AccessKey>,
}

impl Principal {
    /// Creates a principal from resolved facets.
    #[must_use]
    pub fn new(user: Option<User>, device: Option<Device>, access_key: Option<AccessKey>) -> Self {
        Self {
            user,
            device,
            access_key,
        }
    }

    /// Creates a principal with no facets.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The user resolved from a Basic credential.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The device resolved from the device headers.
    #[must_use]
    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
    }

    /// The access key resolved from a bearer credential.
    #[must_use]
    pub fn access_key(&self) -> Option<&AccessKey> {
        self.access_key.as_ref()
    }

    /// Returns `true` if no facet was resolved.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.user.is_none() && self.device.is_none() && self.access_key.is_none()
    }
}

/// Summary for logs: identifiers only, never secrets.
impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_anonymous() {
            return f.write_str("anonymous");
        }

        let mut parts = Vec::with_capacity(3);
        if let Some(user) = &self.user {
            parts.push(format!("user={}({})", user.id, user.login));
        }
        if let Some(device) = &self.device {
            parts.push(format!("device={}", device.guid));
        }
        if let Some(key) = &self.access_key {
            parts.push(format!("access_key={}", key.id));
        }
        f.write_str(&parts.join(", "))
    }
}
