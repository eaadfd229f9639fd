//! The authentication filter: runs every resolver and assembles the result.
//!
//! # Example
//!
//! ```ignore
//! use hive_auth::{AuthFilterConfig, AuthenticationFilter};
//!
//! let filter = AuthenticationFilter::builder()
//!     .config(AuthFilterConfig::from_toml_str(&config_text)?)
//!     .user_provider(users)
//!     .device_provider(devices)
//!     .access_key_provider(keys)
//!     .client_provider(clients)
//!     .build()?;
//!
//! let authentication = filter.authenticate(request.headers(), false).await?;
//! if authentication.security.is_authenticated() {
//!     // ...
//! }
//! ```

use std::sync::Arc;

use axum::http::{HeaderMap, HeaderName, Request};

use crate::AuthResult;
use crate::config::AuthFilterConfig;
use crate::context::{ConnectionSecurity, RequestAuthentication, SecurityContext};
use crate::credentials::header_str;
use crate::error::AuthError;
use crate::principal::Principal;
use crate::providers::{
    AccessKeyAuthenticator, ClientAuthenticator, DeviceAuthenticator, UserAuthenticator,
};
use crate::resolvers::{
    ClientCredentialResolver, CredentialResolver, DeviceCredentialResolver,
    KeyCredentialResolver, UserCredentialResolver,
};

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Everything a dispatch produces for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    /// Principal plus transport flag, for authorization decisions.
    pub security: SecurityContext,
    /// Principal plus OAuth client, for the rest of request processing.
    pub request: RequestAuthentication,
}

/// Resolves the identity of incoming requests.
///
/// The filter is immutable after construction and can be shared across
/// tasks behind an `Arc`. Providers are injected; nothing is looked up at
/// request time.
#[derive(Clone)]
pub struct AuthenticationFilter {
    user: UserCredentialResolver,
    device: DeviceCredentialResolver,
    access_key: KeyCredentialResolver,
    client: ClientCredentialResolver,
    trust_forwarded_proto: bool,
    log_principal: bool,
}

impl AuthenticationFilter {
    /// Creates a filter with the default configuration.
    pub fn new(
        user: Arc<dyn UserAuthenticator>,
        device: Arc<dyn DeviceAuthenticator>,
        access_key: Arc<dyn AccessKeyAuthenticator>,
        client: Arc<dyn ClientAuthenticator>,
    ) -> Self {
        let defaults = AuthFilterConfig::default();
        Self {
            user: UserCredentialResolver::new(user, defaults.basic_scheme.clone()),
            device: DeviceCredentialResolver::new(
                device,
                HeaderName::from_static("auth-deviceid"),
                HeaderName::from_static("auth-devicekey"),
            ),
            access_key: KeyCredentialResolver::new(access_key, defaults.bearer_scheme),
            client: ClientCredentialResolver::new(client, defaults.basic_scheme),
            trust_forwarded_proto: defaults.trust_forwarded_proto,
            log_principal: defaults.log_principal,
        }
    }

    /// Starts building a filter with a custom configuration.
    #[must_use]
    pub fn builder() -> AuthenticationFilterBuilder {
        AuthenticationFilterBuilder::default()
    }

    /// Resolves the principal and OAuth client carried by `headers`.
    ///
    /// The four resolvers run concurrently. Malformed and rejected
    /// credentials leave their facet empty; the result is anonymous when no
    /// credential is accepted.
    ///
    /// # Errors
    ///
    /// Returns the first provider fault. A fault is never downgraded to an
    /// absent facet, even if other resolvers succeeded.
    #[tracing::instrument(skip_all, fields(secure = secure))]
    pub async fn authenticate(
        &self,
        headers: &HeaderMap,
        secure: bool,
    ) -> AuthResult<Authentication> {
        let (user, device, access_key, client) = tokio::try_join!(
            self.user.resolve(headers),
            self.device.resolve(headers),
            self.access_key.resolve(headers),
            self.client.resolve(headers),
        )
        .inspect_err(|e| {
            tracing::error!(error = %e, category = %e.category(), "Authentication provider failed");
        })?;

        if user.is_some() && client.is_some() {
            tracing::debug!("Basic credential accepted by both user and client providers");
        }

        let principal = Arc::new(Principal::new(user, device, access_key));

        if self.log_principal {
            tracing::info!(
                principal = %principal,
                client = ?client.as_ref().map(|c| c.oauth_id.as_str()),
                "Request authenticated"
            );
        }

        Ok(Authentication {
            security: SecurityContext::new(Arc::clone(&principal), secure),
            request: RequestAuthentication::new(principal, client),
        })
    }

    /// Authenticates a request and publishes the result in its extensions.
    ///
    /// After this returns `Ok`, both [`SecurityContext`] and
    /// [`RequestAuthentication`] are available to downstream handlers.
    ///
    /// # Errors
    ///
    /// Returns the provider fault from [`Self::authenticate`]; the request
    /// extensions are left untouched in that case.
    pub async fn authenticate_request<B>(&self, req: &mut Request<B>) -> AuthResult<Authentication> {
        tracing::debug!(method = %req.method(), path = %req.uri().path(), "Authenticating request");

        let secure = self.is_secure(req);
        let authentication = self.authenticate(req.headers(), secure).await?;

        let extensions = req.extensions_mut();
        extensions.insert(authentication.security.clone());
        extensions.insert(authentication.request.clone());

        Ok(authentication)
    }

    /// Reads the transport security signal for a request.
    ///
    /// Order of precedence: a [`ConnectionSecurity`] extension set by the
    /// server, then `X-Forwarded-Proto` when proxies are trusted, then the
    /// request URI scheme.
    #[must_use]
    pub fn is_secure<B>(&self, req: &Request<B>) -> bool {
        if let Some(security) = req.extensions().get::<ConnectionSecurity>() {
            return security.secure;
        }

        if self.trust_forwarded_proto
            && let Some(proto) = header_str(req.headers(), X_FORWARDED_PROTO)
        {
            // The first entry is the one set by the outermost proxy.
            return proto
                .split(',')
                .next()
                .is_some_and(|p| p.trim().eq_ignore_ascii_case("https"));
        }

        req.uri().scheme_str() == Some("https")
    }
}

/// Builder for [`AuthenticationFilter`].
#[derive(Default)]
pub struct AuthenticationFilterBuilder {
    config: AuthFilterConfig,
    user: Option<Arc<dyn UserAuthenticator>>,
    device: Option<Arc<dyn DeviceAuthenticator>>,
    access_key: Option<Arc<dyn AccessKeyAuthenticator>>,
    client: Option<Arc<dyn ClientAuthenticator>>,
}

impl AuthenticationFilterBuilder {
    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: AuthFilterConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the user provider.
    #[must_use]
    pub fn user_provider(mut self, provider: Arc<dyn UserAuthenticator>) -> Self {
        self.user = Some(provider);
        self
    }

    /// Sets the device provider.
    #[must_use]
    pub fn device_provider(mut self, provider: Arc<dyn DeviceAuthenticator>) -> Self {
        self.device = Some(provider);
        self
    }

    /// Sets the access key provider.
    #[must_use]
    pub fn access_key_provider(mut self, provider: Arc<dyn AccessKeyAuthenticator>) -> Self {
        self.access_key = Some(provider);
        self
    }

    /// Sets the OAuth client provider.
    #[must_use]
    pub fn client_provider(mut self, provider: Arc<dyn ClientAuthenticator>) -> Self {
        self.client = Some(provider);
        self
    }

    /// Validates the configuration and builds the filter.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Configuration` if the configuration is invalid or
    /// a provider was not supplied.
    pub fn build(self) -> AuthResult<AuthenticationFilter> {
        self.config.validate()?;
        let (id_header, key_header) = self.config.device_header_names()?;

        let user = self.user.ok_or_else(|| missing("user"))?;
        let device = self.device.ok_or_else(|| missing("device"))?;
        let access_key = self.access_key.ok_or_else(|| missing("access_key"))?;
        let client = self.client.ok_or_else(|| missing("oauth_client"))?;

        let AuthFilterConfig {
            basic_scheme,
            bearer_scheme,
            trust_forwarded_proto,
            log_principal,
            ..
        } = self.config;

        Ok(AuthenticationFilter {
            user: UserCredentialResolver::new(user, basic_scheme.clone()),
            device: DeviceCredentialResolver::new(device, id_header, key_header),
            access_key: KeyCredentialResolver::new(access_key, bearer_scheme),
            client: ClientCredentialResolver::new(client, basic_scheme),
            trust_forwarded_proto,
            log_principal,
        })
    }
}

fn missing(provider: &str) -> AuthError {
    AuthError::configuration(format!("{provider} provider is required"))
}
