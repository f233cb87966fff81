//! Types for the KMS key, encryption, and signing endpoints.

use serde::{Deserialize, Serialize};

/// Algorithm a KMS key is provisioned with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionAlgorithm {
    #[serde(rename = "RSA_4096")]
    Rsa4096,
    #[serde(rename = "ECC_NIST_P256")]
    EccNistP256,
    #[serde(rename = "aes-256-gcm")]
    Aes256Gcm,
    #[serde(rename = "aes-128-gcm")]
    Aes128Gcm,
}

/// Signing algorithms supported by signing keys.
///
/// The RSA PSS and ECDSA families are randomized: signing the same input
/// twice produces different signatures. The PKCS#1 v1.5 family is
/// deterministic.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningAlgorithm {
    #[serde(rename = "RSASSA_PSS_SHA_512")]
    RsassaPssSha512,
    #[serde(rename = "RSASSA_PSS_SHA_384")]
    RsassaPssSha384,
    #[serde(rename = "RSASSA_PSS_SHA_256")]
    RsassaPssSha256,
    #[serde(rename = "RSASSA_PKCS1_V1_5_SHA_512")]
    RsassaPkcs1V15Sha512,
    #[serde(rename = "RSASSA_PKCS1_V1_5_SHA_384")]
    RsassaPkcs1V15Sha384,
    #[serde(rename = "RSASSA_PKCS1_V1_5_SHA_256")]
    RsassaPkcs1V15Sha256,
    #[serde(rename = "ECDSA_SHA_512")]
    EcdsaSha512,
    #[serde(rename = "ECDSA_SHA_384")]
    EcdsaSha384,
    #[serde(rename = "ECDSA_SHA_256")]
    EcdsaSha256,
}

/// What a key may be used for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyUsage {
    #[serde(rename = "encrypt-decrypt")]
    Encryption,
    #[serde(rename = "sign-verify")]
    Signing,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KmsKey {
    pub id: String,
    pub description: String,
    pub is_disabled: bool,
    pub org_id: String,
    pub name: String,
    pub project_id: String,
    pub key_usage: KeyUsage,
    pub version: u32,
    pub encryption_algorithm: EncryptionAlgorithm,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateKmsKeyOptions {
    pub project_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub key_usage: KeyUsage,
    pub encryption_algorithm: EncryptionAlgorithm,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CreateKmsKeyResponse {
    pub key: KmsKey,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DeleteKmsKeyResponse {
    pub key: KmsKey,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GetKmsKeyByNameResponse {
    pub key: KmsKey,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KmsEncryptDataOptions {
    pub key_id: String,
    /// Base64-encoded plaintext; transported opaquely.
    pub plaintext: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct KmsEncryptDataResponse {
    pub ciphertext: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KmsDecryptDataOptions {
    pub key_id: String,
    pub ciphertext: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct KmsDecryptDataResponse {
    pub plaintext: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KmsSignDataOptions {
    pub key_id: String,
    /// Base64-encoded data (or digest when `is_digest` is set).
    pub data: String,
    pub signing_algorithm: SigningAlgorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_digest: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KmsSignDataResponse {
    pub signature: String,
    pub key_id: String,
    pub signing_algorithm: SigningAlgorithm,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KmsVerifyDataOptions {
    pub key_id: String,
    /// Must be base64 encoded.
    pub data: String,
    pub signature: String,
    pub signing_algorithm: SigningAlgorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_digest: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KmsVerifyDataResponse {
    pub signature_valid: bool,
    pub key_id: String,
    pub signing_algorithm: SigningAlgorithm,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KmsListSigningAlgorithmsResponse {
    pub signing_algorithms: Vec<SigningAlgorithm>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KmsGetPublicKeyResponse {
    pub public_key: String,
}
