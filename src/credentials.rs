//! Credential issuance and lifecycle calls.
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | POST   | `/credentials/issue/` | JSON, or multipart with a document file |
//! | POST   | `/credentials/batch/` | JSON |
//! | POST   | `/credentials/batch-upload/` | multipart (ZIP archive) |
//! | GET    | `/credentials/` | query: `limit`, `offset` |
//! | GET    | `/credentials/{doc_id}/` | — |
//! | POST   | `/credentials/{doc_id}/revoke/` | JSON `{reason}` |
//! | POST   | `/credentials/{doc_id}/resend-claim/` | JSON `{claim_token_expires_hours}` |
//! | GET    | `/credentials/{doc_id}/download/` | — (binary response) |

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DocWalError;
use crate::transport::Transport;
use crate::types::{ApiMessage, CredentialData};

/// Default claim-token validity window, in hours (30 days).
pub const DEFAULT_CLAIM_TOKEN_EXPIRES_HOURS: u32 = 720;

/// File payload attached to an issuance or batch-upload call.
///
/// A plain in-memory buffer, so the public API stays independent of the
/// HTTP library's body representation.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// File name reported to the server in the multipart part.
    pub file_name: String,
    /// Raw file contents.
    pub contents: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// PDF document payload under the default name the API expects.
    pub fn pdf(contents: impl Into<Vec<u8>>) -> Self {
        Self::new("document.pdf", contents)
    }

    /// Batch ZIP archive payload under the default name.
    pub fn zip(contents: impl Into<Vec<u8>>) -> Self {
        Self::new("batch.zip", contents)
    }
}

/// Parameters for issuing a single credential.
///
/// `template_id`, `individual_email`, and a non-empty `credential_data`
/// map are required and checked before dispatch. Everything else carries
/// the API's documented default.
#[derive(Debug, Clone)]
pub struct IssueCredentialRequest {
    /// Template to issue from.
    pub template_id: String,
    /// Recipient's email address.
    pub individual_email: String,
    /// Credential field values, keyed per the template schema.
    pub credential_data: CredentialData,
    /// Optional PDF to attach. Switches the request to multipart: file
    /// payloads and structured JSON bodies are mutually exclusive on the
    /// wire.
    pub document_file: Option<FileUpload>,
    /// Optional credential expiration timestamp.
    pub expires_at: Option<DateTime<Utc>>,
    /// Claim link validity window in hours (default: 720).
    pub claim_token_expires_hours: u32,
}

impl IssueCredentialRequest {
    pub fn new(
        template_id: impl Into<String>,
        individual_email: impl Into<String>,
        credential_data: CredentialData,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            individual_email: individual_email.into(),
            credential_data,
            document_file: None,
            expires_at: None,
            claim_token_expires_hours: DEFAULT_CLAIM_TOKEN_EXPIRES_HOURS,
        }
    }
}

/// Issuance receipt from `POST /credentials/issue/`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuedCredential {
    pub doc_id: String,
    #[serde(default)]
    pub document_hash: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub claim_token: Option<String>,
    #[serde(default)]
    pub claim_token_expires: Option<DateTime<Utc>>,
}

/// Credential record as returned by list/get.
///
/// Fields beyond `doc_id` use `#[serde(default)]` for resilience against
/// server-side schema evolution.
#[derive(Debug, Clone, Deserialize)]
pub struct Credential {
    pub doc_id: String,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub individual_email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub document_hash: Option<String>,
    #[serde(default)]
    pub credential_data: Option<Value>,
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// One recipient row in a batch issuance.
#[derive(Debug, Clone, Serialize)]
pub struct BatchCredentialEntry {
    pub individual_email: String,
    pub credential_data: CredentialData,
}

/// Parameters for `POST /credentials/batch/`.
#[derive(Debug, Clone)]
pub struct BatchIssueRequest {
    pub template_id: String,
    pub credentials: Vec<BatchCredentialEntry>,
    /// Send claim emails to recipients (default: true).
    pub send_notifications: bool,
}

impl BatchIssueRequest {
    pub fn new(template_id: impl Into<String>, credentials: Vec<BatchCredentialEntry>) -> Self {
        Self {
            template_id: template_id.into(),
            credentials,
            send_notifications: true,
        }
    }
}

/// Parameters for `POST /credentials/batch-upload/`.
#[derive(Debug, Clone)]
pub struct BatchUploadRequest {
    pub template_id: String,
    /// ZIP archive holding the recipient manifest plus document files.
    pub file: FileUpload,
    /// Send claim emails to recipients (default: true).
    pub send_notifications: bool,
}

impl BatchUploadRequest {
    pub fn new(template_id: impl Into<String>, file: FileUpload) -> Self {
        Self {
            template_id: template_id.into(),
            file,
            send_notifications: true,
        }
    }
}

/// Per-batch outcome counters from batch issue/upload.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchIssueResponse {
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub success_count: u64,
    #[serde(default)]
    pub failure_count: u64,
    /// Per-row results, shape defined server-side.
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Pagination window for `GET /credentials/`.
#[derive(Debug, Clone)]
pub struct ListCredentialsQuery {
    pub limit: u32,
    pub offset: u32,
}

impl Default for ListCredentialsQuery {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
        }
    }
}

/// Response from `POST /credentials/{doc_id}/resend-claim/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResendClaimResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub claim_token: Option<String>,
    #[serde(default)]
    pub claim_token_expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recipient_email: Option<String>,
}

/// Client for credential issuance and lifecycle endpoints.
#[derive(Debug, Clone)]
pub struct CredentialClient {
    transport: Transport,
}

impl CredentialClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Issue a single credential.
    ///
    /// Without a document file this is a JSON `POST /credentials/issue/`
    /// with `credential_data` as a nested object. With a file the same
    /// endpoint is called as multipart, `credential_data` riding as a
    /// JSON-encoded string field and the file under `document_file`.
    pub async fn issue(&self, req: &IssueCredentialRequest) -> Result<IssuedCredential, DocWalError> {
        if req.template_id.is_empty() {
            return Err(DocWalError::MissingParameter("template_id"));
        }
        if req.individual_email.is_empty() {
            return Err(DocWalError::MissingParameter("individual_email"));
        }
        if req.credential_data.is_empty() {
            return Err(DocWalError::MissingParameter("credential_data"));
        }

        if let Some(file) = &req.document_file {
            let mut form = Form::new()
                .text("template_id", req.template_id.clone())
                .text("individual_email", req.individual_email.clone())
                .text(
                    "credential_data",
                    Value::Object(req.credential_data.clone()).to_string(),
                )
                .text(
                    "claim_token_expires_hours",
                    req.claim_token_expires_hours.to_string(),
                );
            if let Some(expires_at) = &req.expires_at {
                form = form.text("expires_at", expires_at.to_rfc3339());
            }
            form = form.part(
                "document_file",
                Part::bytes(file.contents.clone()).file_name(file.file_name.clone()),
            );

            self.transport
                .multipart(Method::POST, "/credentials/issue/", form)
                .await
        } else {
            let mut body = serde_json::json!({
                "template_id": req.template_id,
                "individual_email": req.individual_email,
                "credential_data": req.credential_data,
                "claim_token_expires_hours": req.claim_token_expires_hours,
            });
            if let Some(expires_at) = &req.expires_at {
                body["expires_at"] = Value::String(expires_at.to_rfc3339());
            }

            self.transport
                .json(Method::POST, "/credentials/issue/", &body)
                .await
        }
    }

    /// Issue credentials for multiple recipients in one JSON call.
    pub async fn batch_issue(&self, req: &BatchIssueRequest) -> Result<BatchIssueResponse, DocWalError> {
        if req.template_id.is_empty() {
            return Err(DocWalError::MissingParameter("template_id"));
        }
        if req.credentials.is_empty() {
            return Err(DocWalError::MissingParameter("credentials"));
        }

        let body = serde_json::json!({
            "template_id": req.template_id,
            "credentials": req.credentials,
            "send_notifications": req.send_notifications,
        });
        self.transport
            .json(Method::POST, "/credentials/batch/", &body)
            .await
    }

    /// Upload a ZIP archive (manifest plus documents) for batch issuance.
    pub async fn batch_upload(&self, req: &BatchUploadRequest) -> Result<BatchIssueResponse, DocWalError> {
        if req.template_id.is_empty() {
            return Err(DocWalError::MissingParameter("template_id"));
        }

        let form = Form::new()
            .text("template_id", req.template_id.clone())
            .text(
                "send_notifications",
                if req.send_notifications { "true" } else { "false" },
            )
            .part(
                "file",
                Part::bytes(req.file.contents.clone()).file_name(req.file.file_name.clone()),
            );
        self.transport
            .multipart(Method::POST, "/credentials/batch-upload/", form)
            .await
    }

    /// List credentials issued by the institution, paginated.
    pub async fn list(&self, query: &ListCredentialsQuery) -> Result<Vec<Credential>, DocWalError> {
        let params = [
            ("limit", query.limit.to_string()),
            ("offset", query.offset.to_string()),
        ];
        self.transport.send(Method::GET, "/credentials/", &params).await
    }

    /// Fetch one credential by document id.
    pub async fn get(&self, doc_id: &str) -> Result<Credential, DocWalError> {
        self.transport
            .send(Method::GET, &format!("/credentials/{doc_id}/"), &[])
            .await
    }

    /// Revoke a credential, recording the reason.
    pub async fn revoke(&self, doc_id: &str, reason: &str) -> Result<ApiMessage, DocWalError> {
        let body = serde_json::json!({ "reason": reason });
        self.transport
            .json(Method::POST, &format!("/credentials/{doc_id}/revoke/"), &body)
            .await
    }

    /// Re-send the claim link email, minting a fresh claim token.
    ///
    /// `claim_token_expires_hours` falls back to the 720-hour default when
    /// `None`.
    pub async fn resend_claim_link(
        &self,
        doc_id: &str,
        claim_token_expires_hours: Option<u32>,
    ) -> Result<ResendClaimResponse, DocWalError> {
        let hours = claim_token_expires_hours.unwrap_or(DEFAULT_CLAIM_TOKEN_EXPIRES_HOURS);
        let body = serde_json::json!({ "claim_token_expires_hours": hours });
        self.transport
            .json(
                Method::POST,
                &format!("/credentials/{doc_id}/resend-claim/"),
                &body,
            )
            .await
    }

    /// Download the rendered credential document (PDF bytes).
    pub async fn download(&self, doc_id: &str) -> Result<Vec<u8>, DocWalError> {
        self.transport
            .download(&format!("/credentials/{doc_id}/download/"))
            .await
    }
}
