//! Tests for TeamClient against a mocked DocWal API.

use docwal_client::team::{InviteRequest, TeamRole};
use docwal_client::{DocWalClient, DocWalConfig, DocWalError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a DocWalClient pointed at a wiremock server.
fn test_client(mock_server: &MockServer) -> DocWalClient {
    let config = DocWalConfig {
        base_url: mock_server.uri().parse().unwrap(),
        api_key: zeroize::Zeroizing::new("test-token".into()),
        timeout_secs: 5,
    };
    DocWalClient::new(config).unwrap()
}

// ── GET /institutions/team/ ──────────────────────────────────────────

#[tokio::test]
async fn list_returns_roster_with_members_and_invitations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/institutions/team/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "members": [
                {
                    "id": "tm-1",
                    "email": "registrar@uni.edu",
                    "role": "owner",
                    "is_active": true,
                    "joined_at": "2025-09-01T08:00:00Z"
                },
                {
                    "id": "tm-2",
                    "email": "clerk@uni.edu",
                    "role": "issuer",
                    "is_active": true
                }
            ],
            "pending_invitations": [
                {
                    "id": "inv-1",
                    "email": "newhire@uni.edu",
                    "role": "issuer",
                    "invited_at": "2026-01-10T09:00:00Z",
                    "expires_at": "2026-01-17T09:00:00Z"
                }
            ],
            "stats": {"total_members": 2, "pending": 1}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let roster = client.team().list().await.unwrap();
    assert_eq!(roster.members.len(), 2);
    assert_eq!(roster.members[0].role, Some(TeamRole::Owner));
    assert_eq!(roster.pending_invitations.len(), 1);
    assert_eq!(
        roster.pending_invitations[0].email.as_deref(),
        Some("newhire@uni.edu")
    );
    assert!(roster.stats.is_some());
}

// ── POST /institutions/team/check-email/ ─────────────────────────────

#[tokio::test]
async fn check_email_posts_address() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/institutions/team/check-email/"))
        .and(body_json(serde_json::json!({"email": "newhire@uni.edu"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "valid": true,
            "recommendation": "invite"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client.team().check_email("newhire@uni.edu").await.unwrap();
    assert_eq!(resp.valid, Some(true));
    assert_eq!(resp.recommendation.as_deref(), Some("invite"));
}

// ── POST /institutions/team/invite/ ──────────────────────────────────

#[tokio::test]
async fn invite_applies_documented_defaults() {
    let mock_server = MockServer::start().await;

    // Omitted options go out as: role issuer, send_email true,
    // add_directly false.
    Mock::given(method("POST"))
        .and(path("/institutions/team/invite/"))
        .and(header("x-api-key", "test-token"))
        .and(body_json(serde_json::json!({
            "email": "newhire@uni.edu",
            "role": "issuer",
            "send_email": true,
            "add_directly": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "message": "invitation sent",
            "invitation": {
                "id": "inv-2",
                "email": "newhire@uni.edu",
                "role": "issuer"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client
        .team()
        .invite(&InviteRequest::new("newhire@uni.edu"))
        .await
        .unwrap();
    assert_eq!(resp.message.as_deref(), Some("invitation sent"));
    assert!(resp.invitation.is_some());
    assert!(resp.member.is_none());
}

#[tokio::test]
async fn invite_with_admin_role_and_direct_add() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/institutions/team/invite/"))
        .and(body_json(serde_json::json!({
            "email": "existing@uni.edu",
            "role": "admin",
            "send_email": false,
            "add_directly": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "message": "member added",
            "member": {
                "id": "tm-3",
                "email": "existing@uni.edu",
                "role": "admin",
                "is_active": true
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let mut req = InviteRequest::new("existing@uni.edu");
    req.role = TeamRole::Admin;
    req.send_email = false;
    req.add_directly = true;

    let resp = client.team().invite(&req).await.unwrap();
    let member = resp.member.unwrap();
    assert_eq!(member.role, Some(TeamRole::Admin));
}

#[tokio::test]
async fn invite_rejects_empty_email() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    let err = client
        .team()
        .invite(&InviteRequest::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, DocWalError::MissingParameter("email")));
}

// ── PATCH /institutions/team/members/{id}/role/ ──────────────────────

#[tokio::test]
async fn update_role_patches_member() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/institutions/team/members/tm-2/role/"))
        .and(body_json(serde_json::json!({"role": "admin"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "role updated",
            "member": {"id": "tm-2", "email": "clerk@uni.edu", "role": "admin"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client
        .team()
        .update_role("tm-2", TeamRole::Admin)
        .await
        .unwrap();
    assert_eq!(resp.member.unwrap().role, Some(TeamRole::Admin));
}

// ── POST /institutions/team/members/{id}/deactivate/ ─────────────────

#[tokio::test]
async fn deactivate_with_reason_sends_it() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/institutions/team/members/tm-2/deactivate/"))
        .and(body_json(serde_json::json!({"reason": "left institution"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "member deactivated"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client
        .team()
        .deactivate("tm-2", Some("left institution"))
        .await
        .unwrap();
    assert_eq!(resp.message.as_deref(), Some("member deactivated"));
}

#[tokio::test]
async fn deactivate_without_reason_sends_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/institutions/team/members/tm-2/deactivate/"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "member deactivated"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.team().deactivate("tm-2", None).await.unwrap();
}

// ── POST /institutions/team/members/{id}/reactivate/ ─────────────────

#[tokio::test]
async fn reactivate_posts_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/institutions/team/members/tm-2/reactivate/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "member reactivated"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client.team().reactivate("tm-2").await.unwrap();
    assert_eq!(resp.message.as_deref(), Some("member reactivated"));
}

// ── DELETE /institutions/team/members/{id}/remove/ ───────────────────

#[tokio::test]
async fn remove_deletes_member() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/institutions/team/members/tm-2/remove/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "member removed"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client.team().remove("tm-2").await.unwrap();
    assert_eq!(resp.message.as_deref(), Some("member removed"));
}
