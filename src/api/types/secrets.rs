//! Types for the raw-secret endpoints.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    pub id: String,
    /// Project the secret belongs to.
    pub workspace: String,
    pub environment: String,
    pub version: u32,
    #[serde(rename = "type")]
    pub secret_type: String,
    pub secret_key: String,
    pub secret_value: String,
    #[serde(default)]
    pub secret_comment: String,
    #[serde(default)]
    pub secret_path: Option<String>,
}

/// Secrets pulled in through an import, grouped by their source path.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SecretImport {
    pub secret_path: String,
    pub environment: String,
    #[serde(default)]
    pub folder_id: Option<String>,
    pub secrets: Vec<Secret>,
}

#[derive(Debug, Clone)]
pub struct ListSecretsOptions {
    pub project_id: String,
    pub environment: String,
    /// Folder path, defaults to the project root `/`.
    pub secret_path: Option<String>,
    pub expand_secret_references: bool,
    pub recursive: bool,
    pub include_imports: bool,
}

impl ListSecretsOptions {
    pub fn new(project_id: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            environment: environment.into(),
            secret_path: None,
            expand_secret_references: false,
            recursive: false,
            include_imports: false,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ListSecretsResponse {
    pub secrets: Vec<Secret>,
    #[serde(default)]
    pub imports: Vec<SecretImport>,
}

#[derive(Debug, Clone)]
pub struct GetSecretOptions {
    pub name: String,
    pub project_id: String,
    pub environment: String,
    pub secret_path: Option<String>,
    /// `shared` (default) or `personal`.
    pub secret_type: Option<String>,
}

impl GetSecretOptions {
    pub fn new(
        name: impl Into<String>,
        project_id: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            project_id: project_id.into(),
            environment: environment.into(),
            secret_path: None,
            secret_type: None,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateSecretOptions {
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "workspaceId")]
    pub project_id: String,
    pub environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_path: Option<String>,
    pub secret_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_comment: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSecretOptions {
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "workspaceId")]
    pub project_id: String,
    pub environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_comment: Option<String>,
    /// Renames the secret when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_secret_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSecretOptions {
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "workspaceId")]
    pub project_id: String,
    pub environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_path: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SingleSecretResponse {
    pub secret: Secret,
}
