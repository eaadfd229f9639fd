//! # hive-auth
//!
//! Request-time authentication for the Hive HTTP API.
//!
//! Every request may carry any of four credentials:
//!
//! - a device id and key in `Auth-DeviceID` / `Auth-DeviceKey`
//! - a user login and password in `Authorization: Basic`
//! - an access key in `Authorization: Bearer`
//! - an OAuth client id and secret, also in `Authorization: Basic`
//!
//! The [`AuthenticationFilter`] resolves each one against an injected
//! provider and produces a [`Principal`] (user, device and access key
//! facets) plus an optional [`OAuthClient`]. Bad or unknown credentials
//! leave their facet empty; only provider faults fail the request.
//!
//! ## Modules
//!
//! - [`config`] - Filter configuration
//! - [`credentials`] - Header parsing and credential decoding
//! - [`providers`] - Interfaces of the authentication providers
//! - [`resolvers`] - One resolver per credential scheme
//! - [`filter`] - The aggregator
//! - [`context`] - Per-request security context and propagation slot
//! - [`middleware`] - Axum/tower integration

pub mod config;
pub mod context;
pub mod credentials;
pub mod error;
pub mod filter;
pub mod middleware;
pub mod principal;
pub mod providers;
pub mod resolvers;
pub mod types;

pub use config::{AuthFilterConfig, ConfigError};
pub use context::{ConnectionSecurity, RequestAuthentication, SecurityContext};
pub use error::{AuthError, ErrorCategory, ProviderKind};
pub use filter::{Authentication, AuthenticationFilter, AuthenticationFilterBuilder};
pub use middleware::{
    AuthenticationLayer, CurrentClient, CurrentPrincipal, authentication_middleware,
};
pub use principal::Principal;
pub use providers::{
    AccessKeyAuthenticator, ClientAuthenticator, DeviceAuthenticator, Rejection,
    UserAuthenticator, Verdict,
};
pub use types::{AccessKey, Device, OAuthClient, User, UserRole, UserStatus};

/// Type alias for authentication results.
pub type AuthResult<T> = Result<T, AuthError>;
