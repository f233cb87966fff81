//! KMS facades: key lifecycle, encryption, and signing endpoints.
//!
//! Split into sub-facades mirroring the service's endpoint groups:
//! [`KmsKeysApi`] for key lifecycle, [`KmsEncryptionApi`] for
//! encrypt/decrypt, [`KmsSigningApi`] for sign/verify. Payloads are opaque
//! base64 strings; the client never inspects them.

use crate::api::types::kms::{
    CreateKmsKeyOptions, CreateKmsKeyResponse, DeleteKmsKeyResponse, GetKmsKeyByNameResponse,
    KmsDecryptDataOptions, KmsDecryptDataResponse, KmsEncryptDataOptions, KmsEncryptDataResponse,
    KmsGetPublicKeyResponse, KmsKey, KmsListSigningAlgorithmsResponse, KmsSignDataOptions,
    KmsSignDataResponse, KmsVerifyDataOptions, KmsVerifyDataResponse, SigningAlgorithm,
};
use crate::error::Result;
use crate::http::{RequestOptions, Transport};

/// Entry point for the KMS endpoint groups.
#[derive(Debug, Clone)]
pub struct KmsApi {
    transport: Transport,
}

impl KmsApi {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn keys(&self) -> KmsKeysApi {
        KmsKeysApi {
            transport: self.transport.clone(),
        }
    }

    pub fn encryption(&self) -> KmsEncryptionApi {
        KmsEncryptionApi {
            transport: self.transport.clone(),
        }
    }

    pub fn signing(&self) -> KmsSigningApi {
        KmsSigningApi {
            transport: self.transport.clone(),
        }
    }
}

/// Key lifecycle: create, delete, look up by name.
#[derive(Debug, Clone)]
pub struct KmsKeysApi {
    transport: Transport,
}

impl KmsKeysApi {
    #[tracing::instrument(skip(self, options))]
    pub async fn create(&self, options: &CreateKmsKeyOptions) -> Result<KmsKey> {
        let response: CreateKmsKeyResponse = self
            .transport
            .post("/api/v1/kms/keys", Some(options), None)
            .await?;
        Ok(response.key)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, key_id: &str) -> Result<KmsKey> {
        let response: DeleteKmsKeyResponse = self
            .transport
            .delete(&format!("/api/v1/kms/keys/{}", key_id), None::<&()>, None)
            .await?;
        Ok(response.key)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_by_name(&self, name: &str, project_id: &str) -> Result<KmsKey> {
        let query = RequestOptions::new().query("projectId", project_id);
        let response: GetKmsKeyByNameResponse = self
            .transport
            .get(
                &format!("/api/v1/kms/keys/key-name/{}", urlencoding::encode(name)),
                Some(&query),
            )
            .await?;
        Ok(response.key)
    }
}

/// Encrypt/decrypt with an encryption-usage key.
#[derive(Debug, Clone)]
pub struct KmsEncryptionApi {
    transport: Transport,
}

impl KmsEncryptionApi {
    /// Encrypts base64-encoded plaintext, returning the ciphertext string.
    #[tracing::instrument(skip(self, options))]
    pub async fn encrypt(&self, options: &KmsEncryptDataOptions) -> Result<String> {
        let response: KmsEncryptDataResponse = self
            .transport
            .post(
                &format!("/api/v1/kms/keys/{}/encrypt", options.key_id),
                Some(options),
                None,
            )
            .await?;
        Ok(response.ciphertext)
    }

    /// Decrypts a ciphertext, returning the base64-encoded plaintext.
    #[tracing::instrument(skip(self, options))]
    pub async fn decrypt(&self, options: &KmsDecryptDataOptions) -> Result<String> {
        let response: KmsDecryptDataResponse = self
            .transport
            .post(
                &format!("/api/v1/kms/keys/{}/decrypt", options.key_id),
                Some(options),
                None,
            )
            .await?;
        Ok(response.plaintext)
    }
}

/// Sign/verify with a signing-usage key.
#[derive(Debug, Clone)]
pub struct KmsSigningApi {
    transport: Transport,
}

impl KmsSigningApi {
    #[tracing::instrument(skip(self, options))]
    pub async fn sign(&self, options: &KmsSignDataOptions) -> Result<KmsSignDataResponse> {
        self.transport
            .post(
                &format!("/api/v1/kms/keys/{}/sign", options.key_id),
                Some(options),
                None,
            )
            .await
    }

    #[tracing::instrument(skip(self, options))]
    pub async fn verify(&self, options: &KmsVerifyDataOptions) -> Result<KmsVerifyDataResponse> {
        self.transport
            .post(
                &format!("/api/v1/kms/keys/{}/verify", options.key_id),
                Some(options),
                None,
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_signing_algorithms(&self, key_id: &str) -> Result<Vec<SigningAlgorithm>> {
        let response: KmsListSigningAlgorithmsResponse = self
            .transport
            .get(
                &format!("/api/v1/kms/keys/{}/signing-algorithms", key_id),
                None,
            )
            .await?;
        Ok(response.signing_algorithms)
    }

    /// PEM public key for asymmetric signing keys.
    #[tracing::instrument(skip(self))]
    pub async fn get_public_key(&self, key_id: &str) -> Result<String> {
        let response: KmsGetPublicKeyResponse = self
            .transport
            .get(&format!("/api/v1/kms/keys/{}/public-key", key_id), None)
            .await?;
        Ok(response.public_key)
    }
}
