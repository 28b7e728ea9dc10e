//! The shared API client

pub mod auth;
pub mod chat;

use std::sync::Arc;
use std::time::Duration;

use charla_core::TokenStore;
use reqwest::{Client, ClientBuilder, header};
use tracing::debug;
use url::Url;

use crate::config;
use crate::error::ClientError;

/// Charla API client
///
/// Cheap to clone; all clones share the underlying connection pool and the
/// token store. The store is consulted on every request, so a login or
/// logout elsewhere on the page is picked up by the next dispatch without
/// rebuilding the client.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).token_store(tokens).build()
    }

    /// Create a client against the environment-resolved base URL
    pub fn from_env(tokens: Arc<dyn TokenStore>) -> Result<Self, ClientError> {
        Self::new(config::base_url_from_env(), tokens)
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL, exactly as configured
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder, attaching the bearer token if one is present
    ///
    /// The token store is read here, at request-build time. An absent or
    /// empty token means the request goes out without an `Authorization`
    /// header; that is not an error at this layer.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let request = self.client.request(method, url);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        match self.tokens.get() {
            Some(token) => {
                debug!(path, "attaching bearer token");
                request.header(header::AUTHORIZATION, format!("Bearer {token}"))
            }
            None => {
                debug!(path, "no token present, sending unauthenticated");
                request
            }
        }
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Execute a request whose response body is irrelevant
    pub async fn execute_unit(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    tokens: Option<Arc<dyn TokenStore>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the token store consulted on every request
    pub fn token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Validate, but report the configured value untouched.
        Url::parse(&base_url)
            .map_err(|err| ClientError::Configuration(format!("invalid base URL: {err}")))?;

        let tokens = self
            .tokens
            .ok_or_else(|| ClientError::Configuration("token store is required".into()))?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| "charla-client/0.1.0".to_string());

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            // Cookie forwarding stays on unconditionally, the native analog
            // of fetch's credentials-include mode.
            let mut builder = ClientBuilder::new()
                .user_agent(user_agent)
                .cookie_store(true);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout; // Timeouts not supported on WASM
            ClientBuilder::new().user_agent(user_agent).build()?
        };

        Ok(ApiClient {
            client,
            base_url,
            tokens,
        })
    }
}
