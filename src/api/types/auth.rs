//! Types for the authentication endpoints.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UniversalAuthLoginOptions {
    pub client_id: String,
    pub client_secret: String,
}

/// Token material returned by login and renew.
///
/// `access_token` is the bearer credential the transport will present; the
/// TTL fields are in seconds. The client has no visibility into how the
/// server derived them.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MachineIdentityTokenResponse {
    pub access_token: String,
    pub expires_in: u64,
    #[serde(rename = "accessTokenMaxTTL")]
    pub access_token_max_ttl: u64,
    pub token_type: String,
}
