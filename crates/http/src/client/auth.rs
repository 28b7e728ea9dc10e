//! Authentication API client methods

use super::ApiClient;
use crate::error::ClientError;
use crate::types::{LoginRequest, RegisterRequest, TokenResponse};

impl ApiClient {
    /// Register a new account
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/register")
            .json(&request);
        self.execute(req).await
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/login")
            .json(&request);
        self.execute(req).await
    }

    /// Invalidate the current session server-side
    ///
    /// Clearing the stored token afterwards is the caller's business.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let req = self.request(reqwest::Method::POST, "/auth/logout");
        self.execute_unit(req).await
    }
}
