//! Wire types shared between the endpoint facades and the service.

pub mod auth;
pub mod kms;
pub mod secrets;
