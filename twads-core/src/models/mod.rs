//! Domain models for twads.
//!
//! ## Submodules
//!
//! - [`paging`] - Paging parameter builders
//! - [`response`] - Remote response envelope
//! - [`stats`] - Statistical snapshot records
//! - [`targeting`] - Targeting criteria records

pub mod paging;

mod response;
mod stats;
mod targeting;

pub use paging::{paging_params, paging_params_with_page};
pub use response::AdsResponse;
pub use stats::StatsSnapshot;
pub use targeting::TargetingCriteria;

/// An ordered multi-valued parameter set, passed through to the transport
/// unmodified. Used for query filters and paging parameters alike.
pub type QueryParams = Vec<(String, String)>;

/// A caller-constructed key/value body for create/update requests. The
/// client never inspects its contents, only forwards it.
pub type TransferPayload = Vec<(String, String)>;
