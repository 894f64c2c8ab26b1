//! HTTP-backed advertising stats client.

use tracing::{debug, instrument};
use twads_core::{AdsResult, AdvertisingStatsOperations, StatsSnapshot};
use twads_transport::{Transport, TransportError};

use crate::response::{decode_data, Scope};

/// Read-only snapshot client for campaign statistics.
///
/// The query bag (date ranges, metric selectors, campaign-id filters) is
/// caller-built and forwarded unmodified; malformed filters surface as
/// remote validation failures.
#[derive(Debug, Clone)]
pub struct AdvertisingStatsClient<T> {
    transport: T,
}

impl<T: Transport> AdvertisingStatsClient<T> {
    /// Creates a client over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn ensure_authorized(&self) -> AdsResult<()> {
        if self.transport.is_authorized() {
            Ok(())
        } else {
            Err(twads_core::AdsError::missing_credentials())
        }
    }
}

impl<T: Transport> AdvertisingStatsOperations for AdvertisingStatsClient<T> {
    #[instrument(skip(self, query))]
    async fn account_stats(
        &self,
        account_id: &str,
        query: &[(String, String)],
    ) -> AdsResult<StatsSnapshot> {
        self.ensure_authorized()?;
        let path = format!("accounts/{account_id}/stats");
        let response = self
            .transport
            .get(&path, query)
            .await
            .map_err(TransportError::into_ads)?;
        let snapshot: StatsSnapshot = decode_data(&response, Scope::account(account_id))?;
        debug!(has_data = snapshot.has_data(), "Fetched account stats");
        Ok(snapshot)
    }

    #[instrument(skip(self, query))]
    async fn campaign_stats(
        &self,
        account_id: &str,
        campaign_id: &str,
        query: &[(String, String)],
    ) -> AdsResult<StatsSnapshot> {
        self.ensure_authorized()?;
        let path = format!("accounts/{account_id}/stats/campaign/{campaign_id}");
        let response = self
            .transport
            .get(&path, query)
            .await
            .map_err(TransportError::into_ads)?;
        decode_data(&response, Scope::resource(account_id, campaign_id))
    }
}
