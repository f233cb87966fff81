//! Raw-secret facade: typed CRUD over `/api/v3/secrets/raw`.
//!
//! Each method is a flat mapping from typed options to one transport call;
//! retry, auth, and error handling all live in the transport.

use crate::api::types::secrets::{
    CreateSecretOptions, DeleteSecretOptions, GetSecretOptions, ListSecretsOptions,
    ListSecretsResponse, Secret, SingleSecretResponse, UpdateSecretOptions,
};
use crate::error::Result;
use crate::http::{RequestOptions, Transport};

#[derive(Debug, Clone)]
pub struct SecretsApi {
    transport: Transport,
}

impl SecretsApi {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Lists secrets in a project environment, optionally expanding
    /// references and following imports.
    #[tracing::instrument(skip(self, options))]
    pub async fn list(&self, options: &ListSecretsOptions) -> Result<ListSecretsResponse> {
        let query = RequestOptions::new()
            .query("workspaceId", options.project_id.as_str())
            .query("environment", options.environment.as_str())
            .query("secretPath", options.secret_path.as_deref().unwrap_or("/"))
            .query(
                "expandSecretReferences",
                bool_str(options.expand_secret_references),
            )
            .query("recursive", bool_str(options.recursive))
            .query("includeImports", bool_str(options.include_imports));

        self.transport
            .get("/api/v3/secrets/raw", Some(&query))
            .await
    }

    /// Fetches one secret by name.
    #[tracing::instrument(skip(self, options))]
    pub async fn get(&self, options: &GetSecretOptions) -> Result<Secret> {
        let mut query = RequestOptions::new()
            .query("workspaceId", options.project_id.as_str())
            .query("environment", options.environment.as_str())
            .query("secretPath", options.secret_path.as_deref().unwrap_or("/"));
        if let Some(secret_type) = &options.secret_type {
            query = query.query("type", secret_type.as_str());
        }

        let response: SingleSecretResponse = self
            .transport
            .get(&secret_path(&options.name), Some(&query))
            .await?;
        Ok(response.secret)
    }

    /// Creates a secret.
    #[tracing::instrument(skip(self, options))]
    pub async fn create(&self, options: &CreateSecretOptions) -> Result<Secret> {
        let response: SingleSecretResponse = self
            .transport
            .post(&secret_path(&options.name), Some(options), None)
            .await?;
        Ok(response.secret)
    }

    /// Updates (or renames) a secret.
    #[tracing::instrument(skip(self, options))]
    pub async fn update(&self, options: &UpdateSecretOptions) -> Result<Secret> {
        let response: SingleSecretResponse = self
            .transport
            .patch(&secret_path(&options.name), Some(options), None)
            .await?;
        Ok(response.secret)
    }

    /// Deletes a secret, returning its final state.
    #[tracing::instrument(skip(self, options))]
    pub async fn delete(&self, options: &DeleteSecretOptions) -> Result<Secret> {
        let response: SingleSecretResponse = self
            .transport
            .delete(&secret_path(&options.name), Some(options), None)
            .await?;
        Ok(response.secret)
    }
}

fn secret_path(name: &str) -> String {
    format!("/api/v3/secrets/raw/{}", urlencoding::encode(name))
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
