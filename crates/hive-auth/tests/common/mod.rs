//! In-memory providers shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use hive_auth::{
    AccessKey, AccessKeyAuthenticator, AuthError, AuthResult, AuthenticationFilter,
    ClientAuthenticator, Device, DeviceAuthenticator, OAuthClient, ProviderKind, Rejection,
    User, UserAuthenticator, UserRole, UserStatus, Verdict,
};

/// Call log shared by one provider.
#[derive(Default)]
pub struct Calls(Mutex<Vec<Vec<String>>>);

impl Calls {
    fn record(&self, args: &[Option<&str>]) {
        self.0.lock().unwrap().push(
            args.iter()
                .map(|a| a.unwrap_or("<none>").to_string())
                .collect(),
        );
    }

    pub fn all(&self) -> Vec<Vec<String>> {
        self.0.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

#[derive(Default)]
pub struct MemoryUsers {
    pub users: HashMap<String, (String, User)>,
    pub calls: Calls,
    pub failing: AtomicBool,
}

impl MemoryUsers {
    pub fn with(mut self, login: &str, password: &str, id: i64) -> Self {
        self.users.insert(
            login.to_string(),
            (
                password.to_string(),
                User {
                    id,
                    login: login.to_string(),
                    role: UserRole::Client,
                    status: UserStatus::Active,
                },
            ),
        );
        self
    }
}

#[async_trait]
impl UserAuthenticator for MemoryUsers {
    async fn authenticate(&self, login: &str, password: &str) -> AuthResult<Verdict<User>> {
        self.calls.record(&[Some(login), Some(password)]);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AuthError::provider(ProviderKind::User, "user store offline"));
        }
        if login.contains(char::is_whitespace) {
            return Ok(Verdict::Rejected(Rejection::InvalidArgument));
        }
        Ok(match self.users.get(login) {
            Some((expected, user)) if expected == password => Verdict::Accepted(user.clone()),
            Some(_) => Verdict::Rejected(Rejection::InvalidCredentials),
            None => Verdict::Rejected(Rejection::NotFound),
        })
    }
}

#[derive(Default)]
pub struct MemoryDevices {
    pub devices: HashMap<String, (String, Device)>,
    pub calls: Calls,
}

impl MemoryDevices {
    pub fn with(mut self, guid: &str, key: &str, id: i64) -> Self {
        self.devices.insert(
            guid.to_string(),
            (
                key.to_string(),
                Device {
                    id,
                    guid: guid.to_string(),
                    name: format!("device {guid}"),
                    network_id: None,
                    blocked: false,
                },
            ),
        );
        self
    }
}

#[async_trait]
impl DeviceAuthenticator for MemoryDevices {
    async fn authenticate(&self, device_id: &str, key: Option<&str>) -> AuthResult<Verdict<Device>> {
        self.calls.record(&[Some(device_id), key]);
        Ok(match self.devices.get(device_id) {
            Some((expected, device)) if Some(expected.as_str()) == key => {
                Verdict::Accepted(device.clone())
            }
            Some(_) => Verdict::Rejected(Rejection::InvalidCredentials),
            None => Verdict::Rejected(Rejection::NotFound),
        })
    }
}

#[derive(Default)]
pub struct MemoryKeys {
    pub keys: HashMap<String, AccessKey>,
    pub calls: Calls,
    pub failing: AtomicBool,
}

impl MemoryKeys {
    pub fn with(mut self, key: &str, id: i64) -> Self {
        self.keys.insert(
            key.to_string(),
            AccessKey {
                id,
                label: format!("key {id}"),
                key: key.to_string(),
                user_id: 1,
                expiration: None,
            },
        );
        self
    }
}

#[async_trait]
impl AccessKeyAuthenticator for MemoryKeys {
    async fn authenticate(&self, key: &str) -> AuthResult<Verdict<AccessKey>> {
        self.calls.record(&[Some(key)]);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AuthError::provider(ProviderKind::AccessKey, "key store offline"));
        }
        Ok(Verdict::from_lookup(self.keys.get(key).cloned()))
    }
}

#[derive(Default)]
pub struct MemoryClients {
    pub clients: HashMap<String, (String, OAuthClient)>,
    pub calls: Calls,
}

impl MemoryClients {
    pub fn with(mut self, oauth_id: &str, secret: &str, id: i64) -> Self {
        self.clients.insert(
            oauth_id.to_string(),
            (
                secret.to_string(),
                OAuthClient {
                    id,
                    name: format!("client {oauth_id}"),
                    oauth_id: oauth_id.to_string(),
                    domain: "example.com".to_string(),
                    redirect_uri: "https://example.com/callback".to_string(),
                    subnet: None,
                },
            ),
        );
        self
    }
}

#[async_trait]
impl ClientAuthenticator for MemoryClients {
    async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> AuthResult<Verdict<OAuthClient>> {
        self.calls.record(&[Some(client_id), Some(client_secret)]);
        Ok(match self.clients.get(client_id) {
            Some((expected, client)) if expected == client_secret => {
                Verdict::Accepted(client.clone())
            }
            Some(_) => Verdict::Rejected(Rejection::InvalidCredentials),
            None => Verdict::Rejected(Rejection::NotFound),
        })
    }
}

/// A full set of providers with one known identity each.
pub struct Providers {
    pub users: Arc<MemoryUsers>,
    pub devices: Arc<MemoryDevices>,
    pub keys: Arc<MemoryKeys>,
    pub clients: Arc<MemoryClients>,
}

impl Providers {
    pub fn seeded() -> Self {
        Self {
            users: Arc::new(
                MemoryUsers::default()
                    .with("alice", "secret", 1)
                    .with("bob", "hunter2", 2),
            ),
            devices: Arc::new(MemoryDevices::default().with("dev1", "k1", 10)),
            keys: Arc::new(MemoryKeys::default().with("abc123", 20)),
            clients: Arc::new(MemoryClients::default().with("dashboard", "s3cr3t", 30)),
        }
    }

    pub fn filter(&self) -> AuthenticationFilter {
        AuthenticationFilter::new(
            self.users.clone(),
            self.devices.clone(),
            self.keys.clone(),
            self.clients.clone(),
        )
    }
}

pub fn basic(raw: &str) -> String {
    format!("Basic {}", STANDARD.encode(raw))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("hive_auth=debug")
        .with_test_writer()
        .try_init();
}
