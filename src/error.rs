//! Error taxonomy for the SDK.
//!
//! Every failure surfaced to a caller is exactly one of two variants:
//! [`Error::Request`] when the server answered with an HTTP error status and
//! a structured body, [`Error::Client`] for everything else (connection
//! failures, timeouts after the retry budget, undecodable responses).

use reqwest::{Method, StatusCode};

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fallback message when an HTTP error carries no usable detail.
const UNKNOWN_REQUEST_FAILURE: &str = "Request failed with unknown error";

/// Fallback message when a failure carries no message at all.
const UNKNOWN_FAILURE: &str = "An error occurred";

/// The error type returned by every public operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No structured server response was available: network failure,
    /// exhausted timeout, malformed response body, unknown cause.
    Client {
        message: String,
    },
    /// The server responded with an HTTP error status and a structured
    /// error body. URL, method and status are preserved for diagnostics.
    Request {
        message: String,
        url: String,
        method: String,
        status_code: u16,
    },
}

impl Error {
    pub(crate) fn client(message: impl Into<String>) -> Self {
        Error::Client {
            message: message.into(),
        }
    }

    /// The human-readable message, without the request context prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::Client { message } | Error::Request { message, .. } => message,
        }
    }

    /// HTTP status code, when the server produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Client { .. } => None,
            Error::Request { status_code, .. } => Some(*status_code),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Client { message } => write!(f, "{}", message),
            Error::Request {
                message,
                url,
                method,
                status_code,
            } => {
                write!(
                    f,
                    "[URL={}] [Method={}] [StatusCode={}] {}",
                    url, method, status_code, message
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// A failed exchange, captured once at the point it occurred.
///
/// The transport decides which arm applies when it catches the failure;
/// normalization never probes shapes at runtime.
#[derive(Debug)]
pub(crate) enum Failure {
    /// The server responded with an error status; body bytes are retained
    /// for message extraction.
    Http {
        status: StatusCode,
        url: String,
        method: Method,
        body: Vec<u8>,
    },
    /// No server response: connect/DNS failure, per-attempt timeout, or a
    /// wire-level read error.
    Transport(reqwest::Error),
}

impl Failure {
    /// Whether the retry policy may try this failure again.
    pub(crate) fn is_transient(&self, retryable: impl Fn(StatusCode) -> bool) -> bool {
        match self {
            Failure::Http { status, .. } => retryable(*status),
            Failure::Transport(_) => true,
        }
    }

    /// Normalizes the failure into the public taxonomy. Total: never
    /// panics, never produces anything but the two [`Error`] variants.
    pub(crate) fn into_error(self) -> Error {
        match self {
            Failure::Http {
                status,
                url,
                method,
                body,
            } => normalize_http(status, url, method, &body),
            Failure::Transport(err) => {
                let message = err.to_string();
                if message.is_empty() {
                    Error::client(UNKNOWN_FAILURE)
                } else {
                    Error::client(message)
                }
            }
        }
    }
}

fn normalize_http(status: StatusCode, url: String, method: Method, body: &[u8]) -> Error {
    let data = serde_json::from_slice::<serde_json::Value>(body).ok();

    let message = data
        .as_ref()
        .and_then(|data| data.get("message"))
        .and_then(|message| message.as_str());

    match (message, &data) {
        (Some(message), Some(data)) => {
            // 422 responses carry structured validation detail; surface the
            // whole body rather than losing it to a single string.
            let message = if status == StatusCode::UNPROCESSABLE_ENTITY {
                data.to_string()
            } else {
                message.to_string()
            };

            Error::Request {
                message,
                url,
                method: method.to_string(),
                status_code: status.as_u16(),
            }
        }
        _ => match status.canonical_reason() {
            Some(reason) => Error::client(format!(
                "Request failed with status code {} {}",
                status.as_u16(),
                reason
            )),
            None => Error::client(UNKNOWN_REQUEST_FAILURE),
        },
    }
}
