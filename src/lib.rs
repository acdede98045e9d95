//! # docwal-client — Typed Rust client for the DocWal credential API
//!
//! Issue and manage verifiable digital credentials (certificates,
//! diplomas, transcripts) against the DocWal REST API. Every call maps to
//! one HTTP request; failures are classified by status code into
//! [`DocWalError`] variants for the caller to match on.
//!
//! ## Endpoints
//!
//! | Method | Path | Client call |
//! |--------|------|-------------|
//! | POST   | `/credentials/issue/` | [`credentials::CredentialClient::issue`] |
//! | POST   | `/credentials/batch/` | [`credentials::CredentialClient::batch_issue`] |
//! | POST   | `/credentials/batch-upload/` | [`credentials::CredentialClient::batch_upload`] |
//! | GET    | `/credentials/` | [`credentials::CredentialClient::list`] |
//! | GET    | `/credentials/{id}/` | [`credentials::CredentialClient::get`] |
//! | POST   | `/credentials/{id}/revoke/` | [`credentials::CredentialClient::revoke`] |
//! | POST   | `/credentials/{id}/resend-claim/` | [`credentials::CredentialClient::resend_claim_link`] |
//! | GET    | `/credentials/{id}/download/` | [`credentials::CredentialClient::download`] |
//! | GET/POST | `/templates/` | [`templates::TemplateClient`] |
//! | GET/PATCH/DELETE | `/templates/{id}/` | [`templates::TemplateClient`] |
//! | GET/POST/PATCH/DELETE | `/institutions/team/...` | [`team::TeamClient`] |
//! | POST/GET | `/institutions/api-keys/...` | [`api_keys::ApiKeyClient`] |
//!
//! Every request carries the institution API key in an `X-API-Key` header
//! plus JSON content headers; multipart calls override the content type.
//!
//! ## Usage
//!
//! ```no_run
//! use docwal_client::credentials::IssueCredentialRequest;
//! use docwal_client::{CredentialData, DocWalClient, DocWalConfig};
//!
//! # async fn run() -> Result<(), docwal_client::DocWalError> {
//! let client = DocWalClient::new(DocWalConfig::new("docwal_live_xxxxx")?)?;
//!
//! let mut data = CredentialData::new();
//! data.insert("student_name".into(), "John Doe".into());
//! data.insert("degree".into(), "Bachelor of Science".into());
//!
//! let issued = client
//!     .credentials()
//!     .issue(&IssueCredentialRequest::new(
//!         "template-123",
//!         "student@example.com",
//!         data,
//!     ))
//!     .await?;
//! println!("issued {}", issued.doc_id);
//! # Ok(())
//! # }
//! ```
//!
//! The client holds no per-call state — only the connection pool and the
//! immutable configuration — so a single instance can be shared freely
//! across tasks.

pub mod api_keys;
pub mod config;
pub mod credentials;
pub mod error;
pub mod team;
pub mod templates;
pub(crate) mod transport;
pub mod types;

pub use config::DocWalConfig;
pub use error::DocWalError;
pub use types::CredentialData;

/// Top-level DocWal API client. Holds sub-clients for each resource.
#[derive(Debug, Clone)]
pub struct DocWalClient {
    credentials: credentials::CredentialClient,
    templates: templates::TemplateClient,
    api_keys: api_keys::ApiKeyClient,
    team: team::TeamClient,
}

impl DocWalClient {
    /// Create a new DocWal client from configuration.
    pub fn new(config: DocWalConfig) -> Result<Self, DocWalError> {
        let transport = transport::Transport::new(&config)?;

        Ok(Self {
            credentials: credentials::CredentialClient::new(transport.clone()),
            templates: templates::TemplateClient::new(transport.clone()),
            api_keys: api_keys::ApiKeyClient::new(transport.clone()),
            team: team::TeamClient::new(transport),
        })
    }

    /// Access the credentials client.
    pub fn credentials(&self) -> &credentials::CredentialClient {
        &self.credentials
    }

    /// Access the templates client.
    pub fn templates(&self) -> &templates::TemplateClient {
        &self.templates
    }

    /// Access the API-keys client.
    pub fn api_keys(&self) -> &api_keys::ApiKeyClient {
        &self.api_keys
    }

    /// Access the team client.
    pub fn team(&self) -> &team::TeamClient {
        &self.team
    }
}
