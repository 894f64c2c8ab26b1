// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # twads Core
//!
//! Core types, models, and traits for the twads client binding.
//!
//! This crate provides the foundational abstractions used across the other
//! twads crates, including:
//!
//! - Domain models (targeting criteria, statistical snapshots)
//! - Paging parameter builders
//! - Error taxonomy
//! - Operation trait contracts implemented by the HTTP-backed clients
//!
//! ## Key Types
//!
//! - [`TargetingCriteria`] - A remote targeting-criteria record
//! - [`StatsSnapshot`] - A point-in-time campaign metrics aggregate
//! - [`AdsResponse`] - The `{"data": ...}` envelope remote payloads arrive in
//! - [`AdsError`] / [`AdsResult`] - Error taxonomy for all operations
//! - [`TargetingCriteriaOperations`] / [`AdvertisingStatsOperations`] -
//!   Operation contracts

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::{AdsError, AdsResult};

// Re-export all model types
pub use models::{
    paging_params, paging_params_with_page, AdsResponse, QueryParams, StatsSnapshot,
    TargetingCriteria, TransferPayload,
};

// Re-export traits
pub use traits::{AdvertisingStatsOperations, TargetingCriteriaOperations};
