//! Typed async client for a secrets and key-management REST service.
//!
//! The crate is a thin set of typed endpoint facades over one resilient
//! transport: every call is authenticated with the installed bearer token,
//! retried with capped jittered backoff on transient failures, and fails
//! with exactly one of two error variants ([`Error::Client`] or
//! [`Error::Request`]).
//!
//! ```no_run
//! use secretsmith::{Client, ClientConfig};
//!
//! # async fn run() -> secretsmith::Result<()> {
//! let client = Client::new(ClientConfig::new("https://vault.example.com"))?;
//! client
//!     .auth()
//!     .universal_auth_login("client-id", "client-secret")
//!     .await?;
//!
//! let key = client.kms().keys().get_by_name("app-key", "project-id").await?;
//! println!("key {} is version {}", key.name, key.version);
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
mod error;
pub mod http;

pub use client::Client;
pub use error::{Error, Result};
pub use http::{ClientConfig, RequestOptions, RetryPolicy, Transport};
