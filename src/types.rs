//! Types shared across DocWal resources.

use serde::Deserialize;

/// Ordered field map attached to an issued credential.
///
/// Keys and values are defined by the template schema; the client passes
/// them through opaquely and preserves insertion order on the wire.
pub type CredentialData = serde_json::Map<String, serde_json::Value>;

/// Acknowledgement payload returned by endpoints that only report an
/// outcome message (revoke, deactivate, key revocation, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
