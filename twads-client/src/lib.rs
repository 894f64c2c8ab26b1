// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # twads Client
//!
//! HTTP-backed resource clients for the Twitter Ads API.
//!
//! This crate implements the operation contracts from `twads-core` over any
//! [`twads_transport::Transport`]:
//!
//! - [`TargetingCriteriaClient`] - CRUD on account-scoped targeting criteria
//! - [`AdvertisingStatsClient`] - Read-only campaign statistics snapshots
//!
//! Clients are stateless between calls and perform no retries; they check
//! the transport's credential precondition locally, build account-scoped
//! paths, forward caller-built parameter bags unmodified, and map remote
//! failures onto the [`twads_core::AdsError`] taxonomy.
//!
//! ## Example
//!
//! ```ignore
//! use twads_client::TargetingCriteriaClient;
//! use twads_core::TargetingCriteriaOperations;
//! use twads_transport::{HttpTransport, TransportConfig};
//!
//! let transport = HttpTransport::new(&TransportConfig::with_token("token"))?;
//! let client = TargetingCriteriaClient::new(transport);
//! let criteria = client.list("hkk5").await?;
//! ```

mod response;
mod stats;
mod targeting;

pub use stats::AdvertisingStatsClient;
pub use targeting::TargetingCriteriaClient;
