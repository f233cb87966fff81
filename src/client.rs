//! The top-level client: owns the transport, hands out facades.

use crate::api::{AuthApi, KmsApi, SecretsApi};
use crate::error::Result;
use crate::http::{ClientConfig, Transport};

/// Client for the secrets/key-management service.
///
/// Construction validates the base URL eagerly. All facades obtained from
/// one client share its transport, so a token installed by
/// [`AuthApi::universal_auth_login`] (or [`Client::set_access_token`])
/// authenticates every subsequent call.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Builds a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Installs a bearer token obtained out of band.
    ///
    /// Affects subsequent calls only; calls already in flight keep the
    /// headers they captured. Last write wins.
    pub fn set_access_token(&self, token: &str) -> Result<()> {
        self.transport.set_access_token(token)
    }

    /// Authentication endpoints.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.transport.clone())
    }

    /// Raw-secret endpoints.
    pub fn secrets(&self) -> SecretsApi {
        SecretsApi::new(self.transport.clone())
    }

    /// KMS key, encryption, and signing endpoints.
    pub fn kms(&self) -> KmsApi {
        KmsApi::new(self.transport.clone())
    }

    /// The underlying transport, for callers issuing requests to endpoints
    /// this crate has no facade for yet.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}
