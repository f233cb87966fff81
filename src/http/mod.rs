//! HTTP transport: authenticated, retried, uniformly-erroring exchanges.

mod retry;
mod transport;

pub use retry::RetryPolicy;
pub use transport::{ClientConfig, DEFAULT_TIMEOUT, RequestOptions, Transport};
