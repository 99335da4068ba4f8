use crate::domain::model::TokenResponse;
use crate::domain::ports::AuthProvider;
use async_trait::async_trait;
use reqwest::Client;

/// Bling OAuth adapter.
///
/// The consent step happens outside this process: the operator opens the
/// Bling authorization page in a browser and passes the resulting code in via
/// flag or environment. This adapter only replays that code and exchanges it
/// for a bearer token at `/oauth/token`.
pub struct BlingAuth {
    client: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    auth_code: Option<String>,
}

impl BlingAuth {
    pub fn new(
        base_url: &str,
        client_id: &str,
        client_secret: &str,
        auth_code: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            auth_code,
        }
    }
}

#[async_trait]
impl AuthProvider for BlingAuth {
    async fn authorization_code(&self) -> Option<String> {
        if self.auth_code.is_none() {
            tracing::warn!("no authorization code configured (flag or BLING_AUTH_CODE)");
        }
        self.auth_code.clone()
    }

    async fn access_token(&self, code: &str) -> Option<TokenResponse> {
        let url = format!("{}/oauth/token", self.base_url);
        tracing::debug!("exchanging authorization code at {}", url);

        let response = match self
            .client
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("grant_type", "authorization_code"), ("code", code)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("token request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("token request returned {}", response.status());
            return None;
        }

        match response.json().await {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::warn!("token response could not be decoded: {}", e);
                None
            }
        }
    }
}
