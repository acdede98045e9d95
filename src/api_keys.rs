//! Institution API-key management calls.
//!
//! One active secret per institution; these endpoints mint, inspect,
//! rotate, or revoke it. The server restricts them to owner/admin keys.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;

use crate::error::DocWalError;
use crate::transport::Transport;
use crate::types::ApiMessage;

/// Freshly minted API key.
///
/// The plaintext key is only returned by generate/regenerate; store it
/// immediately.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedApiKey {
    pub api_key: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub warning: Option<String>,
}

/// Masked view of the institution's current key.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeyInfo {
    #[serde(default)]
    pub masked_key: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Client for API-key endpoints.
#[derive(Debug, Clone)]
pub struct ApiKeyClient {
    transport: Transport,
}

impl ApiKeyClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Mint a new API key.
    ///
    /// Calls `POST /institutions/api-keys/generate/`.
    pub async fn generate(&self) -> Result<GeneratedApiKey, DocWalError> {
        self.transport
            .send(Method::POST, "/institutions/api-keys/generate/", &[])
            .await
    }

    /// Masked information about the current key.
    ///
    /// Calls `GET /institutions/api-keys/info/`.
    pub async fn info(&self) -> Result<ApiKeyInfo, DocWalError> {
        self.transport
            .send(Method::GET, "/institutions/api-keys/info/", &[])
            .await
    }

    /// Revoke the current key and mint a replacement.
    ///
    /// Calls `POST /institutions/api-keys/regenerate/`.
    pub async fn regenerate(&self) -> Result<GeneratedApiKey, DocWalError> {
        self.transport
            .send(Method::POST, "/institutions/api-keys/regenerate/", &[])
            .await
    }

    /// Revoke the current key without replacement.
    ///
    /// Calls `POST /institutions/api-keys/revoke/`.
    pub async fn revoke(&self) -> Result<ApiMessage, DocWalError> {
        self.transport
            .send(Method::POST, "/institutions/api-keys/revoke/", &[])
            .await
    }
}
