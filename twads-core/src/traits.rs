//! Trait definitions for twads.
//!
//! This module defines the operation contracts the HTTP-backed resource
//! clients implement. Keeping them as traits lets callers substitute test
//! doubles or alternative bindings without touching call sites.

use crate::error::AdsResult;
use crate::models::{StatsSnapshot, TargetingCriteria};

/// CRUD access to targeting-criteria records scoped under an advertising
/// account.
///
/// Implementors are responsible for:
/// - Checking the credential precondition before any network dispatch
/// - Building the account-scoped resource paths
/// - Mapping remote failures onto [`crate::AdsError`]
///
/// Account and resource ids are not validated locally; the remote service
/// rejects unknown or malformed ids.
pub trait TargetingCriteriaOperations: Send + Sync {
    /// Lists all targeting criteria under an account.
    fn list(
        &self,
        account_id: &str,
    ) -> impl std::future::Future<Output = AdsResult<Vec<TargetingCriteria>>> + Send;

    /// Lists targeting criteria with an explicit paging parameter set,
    /// built via [`crate::models::paging`].
    fn list_paged(
        &self,
        account_id: &str,
        paging: &[(String, String)],
    ) -> impl std::future::Future<Output = AdsResult<Vec<TargetingCriteria>>> + Send;

    /// Fetches a single targeting criteria record by id.
    ///
    /// Unknown ids fail with [`crate::AdsError::NotFound`]; this never
    /// returns an empty success.
    fn get(
        &self,
        account_id: &str,
        id: &str,
    ) -> impl std::future::Future<Output = AdsResult<TargetingCriteria>> + Send;

    /// Creates a targeting criteria record from a caller-built payload.
    ///
    /// Not idempotent: repeated calls with an identical payload create
    /// distinct records.
    fn create(
        &self,
        account_id: &str,
        payload: &[(String, String)],
    ) -> impl std::future::Future<Output = AdsResult<TargetingCriteria>> + Send;

    /// Updates an existing record. Partial-vs-full replacement semantics
    /// are owned by the remote service and the payload's contents.
    fn update(
        &self,
        account_id: &str,
        id: &str,
        payload: &[(String, String)],
    ) -> impl std::future::Future<Output = AdsResult<()>> + Send;

    /// Deletes a record. Unknown or already-deleted ids fail with
    /// [`crate::AdsError::NotFound`].
    fn delete(
        &self,
        account_id: &str,
        id: &str,
    ) -> impl std::future::Future<Output = AdsResult<()>> + Send;
}

/// Read-only statistical snapshot retrieval scoped by account, optionally
/// narrowed to a single campaign.
///
/// The query bag may encode campaign-id lists, date ranges, and metric
/// selectors; it is opaque to this layer and forwarded unmodified.
pub trait AdvertisingStatsOperations: Send + Sync {
    /// Retrieves an aggregate snapshot across campaigns matching the query.
    fn account_stats(
        &self,
        account_id: &str,
        query: &[(String, String)],
    ) -> impl std::future::Future<Output = AdsResult<StatsSnapshot>> + Send;

    /// Retrieves a snapshot scoped to exactly one campaign, still accepting
    /// query refinement.
    fn campaign_stats(
        &self,
        account_id: &str,
        campaign_id: &str,
        query: &[(String, String)],
    ) -> impl std::future::Future<Output = AdsResult<StatsSnapshot>> + Send;
}
