//! Authentication filter configuration.
//!
//! Header names and scheme tokens are configurable so deployments behind
//! gateways that rename headers can still be served.

use axum::http::HeaderName;
use serde::{Deserialize, Serialize};

/// Default header carrying the device identifier.
pub const DEFAULT_DEVICE_ID_HEADER: &str = "Auth-DeviceID";

/// Default header carrying the device key.
pub const DEFAULT_DEVICE_KEY_HEADER: &str = "Auth-DeviceKey";

/// Default scheme for user and OAuth client credentials.
pub const DEFAULT_BASIC_SCHEME: &str = "Basic";

/// Default scheme for access keys.
pub const DEFAULT_BEARER_SCHEME: &str = "Bearer";

/// Configuration for the authentication filter.
///
/// # Example (TOML)
///
/// ```toml
/// device_id_header = "Auth-DeviceID"
/// device_key_header = "Auth-DeviceKey"
/// basic_scheme = "Basic"
/// bearer_scheme = "Bearer"
/// trust_forwarded_proto = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthFilterConfig {
    /// Header carrying the device identifier.
    pub device_id_header: String,

    /// Header carrying the device key.
    pub device_key_header: String,

    /// Scheme token for `login:password` and `clientId:clientSecret` pairs.
    pub basic_scheme: String,

    /// Scheme token for opaque access keys.
    pub bearer_scheme: String,

    /// Honour `X-Forwarded-Proto` when deciding whether the connection is
    /// secure. Only enable behind a proxy that overwrites the header.
    pub trust_forwarded_proto: bool,

    /// Log the resolved principal at `info` level for every request.
    pub log_principal: bool,
}

impl Default for AuthFilterConfig {
    fn default() -> Self {
        Self {
            device_id_header: DEFAULT_DEVICE_ID_HEADER.to_string(),
            device_key_header: DEFAULT_DEVICE_KEY_HEADER.to_string(),
            basic_scheme: DEFAULT_BASIC_SCHEME.to_string(),
            bearer_scheme: DEFAULT_BEARER_SCHEME.to_string(),
            trust_forwarded_proto: false,
            log_principal: true,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// An invalid configuration value was provided.
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    /// The configuration could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(String),
}

impl AuthFilterConfig {
    /// Parses and validates a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if:
    /// - A header name is empty or not a valid HTTP header name
    /// - A scheme is empty or contains whitespace
    /// - The basic and bearer schemes could match the same header
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.device_header_names()?;

        if self.device_id_header.eq_ignore_ascii_case(&self.device_key_header) {
            return Err(ConfigError::InvalidValue(
                "device_id_header and device_key_header must differ".to_string(),
            ));
        }

        for (key, value) in [
            ("basic_scheme", &self.basic_scheme),
            ("bearer_scheme", &self.bearer_scheme),
        ] {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue(format!("{key} cannot be empty")));
            }
            if !value.is_ascii() || value.contains(|c: char| c.is_ascii_whitespace()) {
                return Err(ConfigError::InvalidValue(format!(
                    "{key} must be a single ASCII token: '{value}'"
                )));
            }
        }

        // Prefix matching is case-insensitive, so one scheme being a prefix
        // of the other would let a single header match both.
        let basic = self.basic_scheme.to_ascii_lowercase();
        let bearer = self.bearer_scheme.to_ascii_lowercase();
        if basic.starts_with(&bearer) || bearer.starts_with(&basic) {
            return Err(ConfigError::InvalidValue(format!(
                "basic_scheme '{}' and bearer_scheme '{}' overlap",
                self.basic_scheme, self.bearer_scheme
            )));
        }

        Ok(())
    }

    /// Parsed header names for the device identifier and key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if either name is not a valid
    /// HTTP header name.
    pub(crate) fn device_header_names(&self) -> Result<(HeaderName, HeaderName), ConfigError> {
        let parse = |key: &str, value: &str| {
            HeaderName::from_bytes(value.as_bytes()).map_err(|_| {
                ConfigError::InvalidValue(format!("{key} is not a valid header name: '{value}'"))
            })
        };
        Ok((
            parse("device_id_header", &self.device_id_header)?,
            parse("device_key_header", &self.device_key_header)?,
        ))
    }
}
