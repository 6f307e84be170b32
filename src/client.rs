use std::fmt;
#[cfg(feature = "default-client")]
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "default-client")]
use arc_swap::ArcSwap;
use log::debug;
#[cfg(feature = "default-client")]
use once_cell::sync::Lazy;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::asset::AssetApi;
use crate::{CollinsError, CollinsResult};

#[cfg(feature = "default-client")]
static COLLINS_CLIENT: Lazy<ArcSwap<CollinsClient>> = Lazy::new(|| {
    // Create a default client using the builder's default values.
    ArcSwap::new(Arc::new(CollinsClient::default()))
});

/// Initializes the static CollinsClient instance. This should be called once
/// at the beginning of your application.
#[cfg(feature = "default-client")]
pub fn initialize(client: CollinsClient) {
    COLLINS_CLIENT.store(Arc::new(client));
}

/// Returns a reference to the static CollinsClient instance.
///
/// This function provides a thread-safe way to access the Collins client
/// instance. It returns a reference to the current Collins client, which can
/// be used to make API requests. If it hasn't been previously initialized it
/// returns a default instance pointing at a local Collins with the stock
/// credentials.
#[cfg(feature = "default-client")]
pub fn instance() -> Arc<CollinsClient> {
    COLLINS_CLIENT.load_full()
}

/// Builder for Collins client.
///
/// This builder provides a fluent API for creating Collins clients
/// with validation at build time.
#[derive(Default)]
pub struct CollinsClientBuilder {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl CollinsClientBuilder {
    /// Sets the base URL of the Collins server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the username for authentication.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password for authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    ///
    /// When supplied, the builder's timeout and user-agent settings are not
    /// re-applied to it.
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Validates the configuration and constructs the client.
    ///
    /// Collins authenticates every request with HTTP Basic Auth, so there is
    /// no login round trip here; building never touches the network.
    pub fn build(self) -> CollinsResult<CollinsClient> {
        let username = self
            .username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| CollinsError::ConfigurationError("Username is required".into()))?;

        let password = self
            .password
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or_else(|| CollinsError::ConfigurationError("Password is required".into()))?;

        let base_url = self
            .base_url
            .ok_or_else(|| CollinsError::ConfigurationError("Base URL is required".into()))
            .and_then(|url_str| {
                Url::parse(&url_str)
                    .map_err(|e| CollinsError::ConfigurationError(format!("Invalid base URL: {e}")))
            })?;

        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let user_agent = self
            .user_agent
            .as_deref()
            .unwrap_or(concat!("collins-client/", env!("CARGO_PKG_VERSION")));

        let http_client = if let Some(custom_client) = self.http_client {
            custom_client
        } else {
            ReqwestClient::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .map_err(|e| {
                    CollinsError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?
        };

        Ok(CollinsClient {
            base_url,
            username,
            password: SecretString::from(password),
            timeout,
            user_agent: self.user_agent,
            http_client,
        })
    }
}

/// The main Collins client for interacting with the Collins API.
///
/// The client holds only immutable configuration (base URL, credentials), so
/// clones are cheap and a single instance can be shared by concurrent callers
/// issuing independent requests.
pub struct CollinsClient {
    base_url: Url,
    username: String,
    password: SecretString,
    timeout: Duration,
    user_agent: Option<String>,
    http_client: ReqwestClient,
}

impl Default for CollinsClient {
    fn default() -> Self {
        CollinsClient {
            base_url: Url::parse("http://localhost:9000").expect("Failed to parse default URL"),
            username: "blake".to_string(),
            password: SecretString::from("admin:first".to_string()),
            timeout: Duration::from_secs(30),
            user_agent: Some(concat!("collins-client/", env!("CARGO_PKG_VERSION")).to_string()),
            http_client: reqwest::Client::new(),
        }
    }
}

impl fmt::Debug for CollinsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollinsClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl CollinsClient {
    pub fn builder() -> CollinsClientBuilder {
        CollinsClientBuilder::default()
    }

    /// Creates a client from the base URL and credentials, with default
    /// timeout and user agent.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> CollinsResult<Self> {
        Self::builder()
            .base_url(base_url)
            .username(username)
            .password(password)
            .build()
    }

    /// Builds the full request URL for an endpoint path plus query pairs.
    fn endpoint_url(&self, path: &str, params: &[(&str, &str)]) -> CollinsResult<Url> {
        let mut url = self.base_url.join(path)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    /// Sends a request and returns the raw status code and body.
    ///
    /// Attaches Basic Auth and logs the outgoing URL. Only connection-level
    /// failures error here; status-code policy is up to the caller.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> CollinsResult<(StatusCode, String)> {
        let url = self.endpoint_url(path, params)?;

        debug!("> {url}");

        let response = self
            .http_client
            .request(method, url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok((status, body))
    }

    /// Makes a request to the Collins API, returning the raw response body.
    ///
    /// Status codes outside [200, 400) fail with the response body as
    /// context.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> CollinsResult<String> {
        let (status, body) = self.execute(method, path, params).await?;

        if status.as_u16() < 200 || status.as_u16() >= 400 {
            return Err(CollinsError::UnexpectedStatus { status, body });
        }

        Ok(body)
    }

    /// Makes a request to the Collins API and decodes the JSON response.
    pub(crate) async fn request_json<R>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> CollinsResult<R>
    where
        R: DeserializeOwned,
    {
        let body = self.request(method, path, params).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Gets the asset API interface.
    pub fn assets(&self) -> AssetApi<'_> {
        AssetApi::new(self)
    }
}

// Implement Clone for CollinsClient
impl Clone for CollinsClient {
    fn clone(&self) -> Self {
        CollinsClient {
            base_url: self.base_url.clone(),
            username: self.username.clone(),
            password: SecretString::from(self.password.expose_secret().to_string()),
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
            http_client: self.http_client.clone(),
        }
    }
}
