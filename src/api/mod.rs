//! Endpoint facades: flat typed mappings onto transport calls.
//!
//! No facade performs retry, authentication, or error handling itself;
//! that is all owned by [`crate::http::Transport`].

mod auth;
mod kms;
mod secrets;
pub mod types;

pub use auth::AuthApi;
pub use kms::{KmsApi, KmsEncryptionApi, KmsKeysApi, KmsSigningApi};
pub use secrets::SecretsApi;
