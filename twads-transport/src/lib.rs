// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # twads Transport
//!
//! Authenticated HTTP transport for the twads client binding.
//!
//! This crate provides the single external collaborator the resource
//! clients consume:
//!
//! - [`Transport`] - The abstract GET/POST/PUT/DELETE contract
//! - [`HttpTransport`] - The reqwest-backed implementation
//! - [`TransportConfig`] - Credentials, base URL, and timeout
//! - [`RawResponse`] / [`TransportError`] - The exchange result surface
//!
//! The transport owns timeout policy and credential attachment, and nothing
//! else: no retries, no status-code interpretation, no response decoding.

pub mod config;
pub mod error;
pub mod http;

pub use config::TransportConfig;
pub use error::TransportError;
pub use http::{HttpTransport, RawResponse, Transport};
