//! HTTP-backed targeting criteria client.

use tracing::{debug, instrument};
use twads_core::{AdsResult, TargetingCriteria, TargetingCriteriaOperations};
use twads_transport::{Transport, TransportError};

use crate::response::{decode_data, expect_success, Scope};

/// CRUD client for targeting criteria, scoped per call by an advertising
/// account id.
///
/// Generic over the transport so tests can substitute doubles. Stateless
/// between calls; holds only the transport handle.
#[derive(Debug, Clone)]
pub struct TargetingCriteriaClient<T> {
    transport: T,
}

impl<T: Transport> TargetingCriteriaClient<T> {
    /// Creates a client over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fails fast with an authorization error when the transport carries
    /// no credentials, before any network dispatch.
    fn ensure_authorized(&self) -> AdsResult<()> {
        if self.transport.is_authorized() {
            Ok(())
        } else {
            Err(twads_core::AdsError::missing_credentials())
        }
    }

    fn collection_path(account_id: &str) -> String {
        format!("accounts/{account_id}/targeting_criteria")
    }

    fn record_path(account_id: &str, id: &str) -> String {
        format!("accounts/{account_id}/targeting_criteria/{id}")
    }
}

impl<T: Transport> TargetingCriteriaOperations for TargetingCriteriaClient<T> {
    #[instrument(skip(self))]
    async fn list(&self, account_id: &str) -> AdsResult<Vec<TargetingCriteria>> {
        self.ensure_authorized()?;
        let response = self
            .transport
            .get(&Self::collection_path(account_id), &[])
            .await
            .map_err(TransportError::into_ads)?;
        let records: Vec<TargetingCriteria> =
            decode_data(&response, Scope::account(account_id))?;
        debug!(count = records.len(), "Listed targeting criteria");
        Ok(records)
    }

    #[instrument(skip(self, paging))]
    async fn list_paged(
        &self,
        account_id: &str,
        paging: &[(String, String)],
    ) -> AdsResult<Vec<TargetingCriteria>> {
        self.ensure_authorized()?;
        let response = self
            .transport
            .get(&Self::collection_path(account_id), paging)
            .await
            .map_err(TransportError::into_ads)?;
        decode_data(&response, Scope::account(account_id))
    }

    #[instrument(skip(self))]
    async fn get(&self, account_id: &str, id: &str) -> AdsResult<TargetingCriteria> {
        self.ensure_authorized()?;
        let response = self
            .transport
            .get(&Self::record_path(account_id, id), &[])
            .await
            .map_err(TransportError::into_ads)?;
        decode_data(&response, Scope::resource(account_id, id))
    }

    #[instrument(skip(self, payload))]
    async fn create(
        &self,
        account_id: &str,
        payload: &[(String, String)],
    ) -> AdsResult<TargetingCriteria> {
        self.ensure_authorized()?;
        let response = self
            .transport
            .post(&Self::collection_path(account_id), payload)
            .await
            .map_err(TransportError::into_ads)?;
        let record: TargetingCriteria = decode_data(&response, Scope::account(account_id))?;
        debug!(id = %record.id, "Created targeting criteria");
        Ok(record)
    }

    #[instrument(skip(self, payload))]
    async fn update(
        &self,
        account_id: &str,
        id: &str,
        payload: &[(String, String)],
    ) -> AdsResult<()> {
        self.ensure_authorized()?;
        let response = self
            .transport
            .put(&Self::record_path(account_id, id), payload)
            .await
            .map_err(TransportError::into_ads)?;
        expect_success(&response, Scope::resource(account_id, id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, account_id: &str, id: &str) -> AdsResult<()> {
        self.ensure_authorized()?;
        let response = self
            .transport
            .delete(&Self::record_path(account_id, id))
            .await
            .map_err(TransportError::into_ads)?;
        expect_success(&response, Scope::resource(account_id, id))
    }
}
