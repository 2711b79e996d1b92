//! Shared building blocks for the Tripletex invoice and subscription
//! gateways: wire types, HMAC signatures, the settings schema and (with the
//! `client` feature) an HTTP client for the billing API.

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
pub mod signature;
