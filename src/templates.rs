//! Credential template management calls.
//!
//! Templates define the fields and kind of credential an institution can
//! issue; their schemas are validated server-side.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DocWalError;
use crate::transport::Transport;
use crate::types::ApiMessage;

/// Template version assigned when a create request does not set one.
pub const DEFAULT_TEMPLATE_VERSION: &str = "1.0";

/// Credential template as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Kind of credential produced (certificate, diploma, transcript, ...).
    #[serde(default)]
    pub credential_type: Option<String>,
    /// Field definitions, validated server-side.
    #[serde(default)]
    pub schema: Option<Value>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Parameters for `POST /templates/`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    pub description: String,
    pub credential_type: String,
    pub schema: Value,
    /// Template version (default: "1.0").
    pub version: String,
}

impl CreateTemplateRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        credential_type: impl Into<String>,
        schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            credential_type: credential_type.into(),
            schema,
            version: DEFAULT_TEMPLATE_VERSION.to_string(),
        }
    }
}

/// Partial update for `PATCH /templates/{id}/`.
///
/// Unset fields are omitted from the request and left untouched
/// server-side. A schema change makes the server mint a new template
/// version.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Client for template endpoints.
#[derive(Debug, Clone)]
pub struct TemplateClient {
    transport: Transport,
}

impl TemplateClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List active templates.
    ///
    /// Calls `GET /templates/`.
    pub async fn list(&self) -> Result<Vec<Template>, DocWalError> {
        self.transport.send(Method::GET, "/templates/", &[]).await
    }

    /// Fetch a template by id.
    ///
    /// Calls `GET /templates/{id}/`.
    pub async fn get(&self, template_id: &str) -> Result<Template, DocWalError> {
        self.transport
            .send(Method::GET, &format!("/templates/{template_id}/"), &[])
            .await
    }

    /// Create a template.
    ///
    /// Calls `POST /templates/`.
    pub async fn create(&self, req: &CreateTemplateRequest) -> Result<Template, DocWalError> {
        self.transport.json(Method::POST, "/templates/", req).await
    }

    /// Apply a partial update.
    ///
    /// Calls `PATCH /templates/{id}/`.
    pub async fn update(
        &self,
        template_id: &str,
        req: &UpdateTemplateRequest,
    ) -> Result<Template, DocWalError> {
        self.transport
            .json(Method::PATCH, &format!("/templates/{template_id}/"), req)
            .await
    }

    /// Deactivate a template (server-side soft delete).
    ///
    /// Calls `DELETE /templates/{id}/`.
    pub async fn delete(&self, template_id: &str) -> Result<ApiMessage, DocWalError> {
        self.transport
            .send(Method::DELETE, &format!("/templates/{template_id}/"), &[])
            .await
    }
}
