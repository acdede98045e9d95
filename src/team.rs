//! Institution team management calls.
//!
//! All paths live under `/institutions/team/`. Deactivation is a soft
//! delete the server can reverse via reactivate; remove is permanent.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DocWalError;
use crate::transport::Transport;
use crate::types::ApiMessage;

/// Team member role.
///
/// A closed set: `Issuer` is the least-privileged role and the default for
/// invitations. An unknown role in a response is a deserialization error
/// rather than a silent downgrade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Owner,
    Admin,
    #[default]
    Issuer,
}

/// Team member record.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMember {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<TeamRole>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

/// Invitation awaiting acceptance.
#[derive(Debug, Clone, Deserialize)]
pub struct PendingInvitation {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<TeamRole>,
    #[serde(default)]
    pub invited_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Roster returned by `GET /institutions/team/`.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRoster {
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub pending_invitations: Vec<PendingInvitation>,
    /// Aggregate counters, shape defined server-side.
    #[serde(default)]
    pub stats: Option<Value>,
}

/// Result of the pre-invitation email check.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckEmailResponse {
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Parameters for `POST /institutions/team/invite/`.
#[derive(Debug, Clone)]
pub struct InviteRequest {
    /// Address to invite; must use the institution's email domain.
    pub email: String,
    /// Granted role (default: `Issuer`).
    pub role: TeamRole,
    /// Send the invitation email (default: true).
    pub send_email: bool,
    /// Add the account directly when it already exists (default: false).
    pub add_directly: bool,
}

impl InviteRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: TeamRole::default(),
            send_email: true,
            add_directly: false,
        }
    }
}

/// Outcome of an invitation: a pending invitation, or the new member
/// record when `add_directly` applied.
#[derive(Debug, Clone, Deserialize)]
pub struct InviteResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub invitation: Option<PendingInvitation>,
    #[serde(default)]
    pub member: Option<TeamMember>,
}

/// Outcome of a role change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoleResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub member: Option<TeamMember>,
}

/// Client for institution team endpoints.
#[derive(Debug, Clone)]
pub struct TeamClient {
    transport: Transport,
}

impl TeamClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List members and pending invitations.
    ///
    /// Calls `GET /institutions/team/`.
    pub async fn list(&self) -> Result<TeamRoster, DocWalError> {
        self.transport
            .send(Method::GET, "/institutions/team/", &[])
            .await
    }

    /// Check whether an email address is valid for invitation.
    ///
    /// Calls `POST /institutions/team/check-email/`.
    pub async fn check_email(&self, email: &str) -> Result<CheckEmailResponse, DocWalError> {
        let body = serde_json::json!({ "email": email });
        self.transport
            .json(Method::POST, "/institutions/team/check-email/", &body)
            .await
    }

    /// Invite a team member.
    ///
    /// Calls `POST /institutions/team/invite/`.
    pub async fn invite(&self, req: &InviteRequest) -> Result<InviteResponse, DocWalError> {
        if req.email.is_empty() {
            return Err(DocWalError::MissingParameter("email"));
        }

        let body = serde_json::json!({
            "email": req.email,
            "role": req.role,
            "send_email": req.send_email,
            "add_directly": req.add_directly,
        });
        self.transport
            .json(Method::POST, "/institutions/team/invite/", &body)
            .await
    }

    /// Change a member's role.
    ///
    /// Calls `PATCH /institutions/team/members/{id}/role/`.
    pub async fn update_role(
        &self,
        member_id: &str,
        role: TeamRole,
    ) -> Result<UpdateRoleResponse, DocWalError> {
        let body = serde_json::json!({ "role": role });
        self.transport
            .json(
                Method::PATCH,
                &format!("/institutions/team/members/{member_id}/role/"),
                &body,
            )
            .await
    }

    /// Deactivate a member (soft delete), optionally recording a reason.
    ///
    /// Calls `POST /institutions/team/members/{id}/deactivate/`.
    pub async fn deactivate(
        &self,
        member_id: &str,
        reason: Option<&str>,
    ) -> Result<ApiMessage, DocWalError> {
        let mut body = serde_json::Map::new();
        if let Some(reason) = reason {
            body.insert("reason".into(), Value::String(reason.into()));
        }
        self.transport
            .json(
                Method::POST,
                &format!("/institutions/team/members/{member_id}/deactivate/"),
                &Value::Object(body),
            )
            .await
    }

    /// Reactivate a previously deactivated member.
    ///
    /// Calls `POST /institutions/team/members/{id}/reactivate/`.
    pub async fn reactivate(&self, member_id: &str) -> Result<ApiMessage, DocWalError> {
        self.transport
            .send(
                Method::POST,
                &format!("/institutions/team/members/{member_id}/reactivate/"),
                &[],
            )
            .await
    }

    /// Remove a member permanently.
    ///
    /// Calls `DELETE /institutions/team/members/{id}/remove/`.
    pub async fn remove(&self, member_id: &str) -> Result<ApiMessage, DocWalError> {
        self.transport
            .send(
                Method::DELETE,
                &format!("/institutions/team/members/{member_id}/remove/"),
                &[],
            )
            .await
    }
}
