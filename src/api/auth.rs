//! Authentication facade: obtains and renews machine-identity tokens.

use log::debug;

use crate::api::types::auth::{MachineIdentityTokenResponse, UniversalAuthLoginOptions};
use crate::error::Result;
use crate::http::Transport;

/// Universal-auth login and token renewal.
///
/// On success the returned access token is installed into the transport, so
/// subsequent calls through the same client are authenticated without any
/// further setup.
#[derive(Debug, Clone)]
pub struct AuthApi {
    transport: Transport,
}

impl AuthApi {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Logs in with a machine-identity client id/secret pair.
    #[tracing::instrument(skip(self, client_id, client_secret))]
    pub async fn universal_auth_login(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<MachineIdentityTokenResponse> {
        let body = UniversalAuthLoginOptions {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        };

        let response: MachineIdentityTokenResponse = self
            .transport
            .post("/api/v1/auth/universal-auth/login", Some(&body), None)
            .await?;

        self.transport.set_access_token(&response.access_token)?;
        debug!("Universal auth login succeeded");
        Ok(response)
    }

    /// Renews the current access token and installs the replacement.
    #[tracing::instrument(skip(self))]
    pub async fn renew_token(&self) -> Result<MachineIdentityTokenResponse> {
        let response: MachineIdentityTokenResponse = self
            .transport
            .post("/api/v1/auth/token/renew", None::<&()>, None)
            .await?;

        self.transport.set_access_token(&response.access_token)?;
        Ok(response)
    }
}
