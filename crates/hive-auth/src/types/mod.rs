//! Identity records produced by the authentication providers.
//!
//! ## Domain Types
//!
//! - [`User`] - account resolved from a login/password pair
//! - [`Device`] - device resolved from its id/key headers
//! - [`AccessKey`] - key resolved from an opaque bearer token
//! - [`OAuthClient`] - registered client resolved from a client id/secret pair
//!
//! The records carry what downstream authorization typically needs. Their
//! contents are owned by the providers; the dispatcher never inspects them.

pub mod access_key;
pub mod client;
pub mod device;
pub mod user;

pub use access_key::AccessKey;
pub use client::OAuthClient;
pub use device::Device;
pub use user::{User, UserRole, UserStatus};
