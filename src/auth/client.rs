// Auth endpoints: login, register and the refresh-token exchange
//
// These calls go out on a plain client, never through the request pipeline;
// the pipeline depends on this module to resolve 401s, so routing them back
// through it would recurse.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use reqwest::Client;

use crate::error::{ApiError, Result};

use super::store::TokenStore;
use super::types::{JwtAuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, Role};

pub struct AuthClient {
    client: Client,
    base_url: String,
    store: Arc<TokenStore>,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, store: Arc<TokenStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            store,
        })
    }

    /// Exchange credentials for a token pair and persist the session
    pub async fn login(&self, username: &str, password: &str) -> Result<JwtAuthResponse> {
        let url = format!("{}/auth/login", self.base_url);
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            if status.as_u16() == 401 {
                return Err(ApiError::AuthInvalid("invalid username or password".into()));
            }
            return Err(ApiError::from_status(status.as_u16(), &text));
        }

        let auth: JwtAuthResponse = response.json().await?;
        self.store.save_session(&auth);
        tracing::info!(username = %auth.username, role = %auth.role, "Logged in");
        Ok(auth)
    }

    /// Create an account. Does not touch the stored session.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<JwtAuthResponse> {
        let url = format!("{}/auth/register", self.base_url);
        let body = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            role,
        };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &text));
        }

        Ok(response.json().await?)
    }

    /// Refresh-token exchange. Any rejection here is terminal for the
    /// session; the caller decides when to clear the store.
    pub async fn refresh(&self, refresh_token: &str) -> Result<JwtAuthResponse> {
        let url = format!("{}/auth/refreshtoken", self.base_url);
        let body = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };

        tracing::debug!("Refreshing access token");
        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Refresh exchange rejected");
            return Err(ApiError::AuthInvalid(format!(
                "refresh rejected: {} - {}",
                status.as_u16(),
                text
            )));
        }

        let auth: JwtAuthResponse = response.json().await?;
        if auth.access_token.is_empty() {
            return Err(ApiError::AuthInvalid(
                "refresh response missing access token".into(),
            ));
        }
        Ok(auth)
    }

    /// Sign out locally: clear the stored token pair and session
    pub fn logout(&self) {
        self.store.sign_out();
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.is_logged_in()
    }

    pub fn store(&self) -> &Arc<TokenStore> {
        &self.store
    }
}
