use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    chat::ports::{ChatRepository, ChatResponder},
    common::{entities::app_errors::CoreError, services::Service},
    profile::ports::ProfileRepository,
    scan::{
        adjuster::adjust,
        entities::{AdjustedScan, ScanRecord},
        ports::{ScanService, ScanSource},
        value_objects::ScanQuery,
    },
};

impl<P, CH, SC, AR> ScanService for Service<P, CH, SC, AR>
where
    P: ProfileRepository,
    CH: ChatRepository,
    SC: ScanSource,
    AR: ChatResponder,
{
    async fn scan_food(&self, session_id: Uuid, query: ScanQuery) -> Result<AdjustedScan, CoreError> {
        if let ScanQuery::Barcode(barcode) = &query
            && barcode.trim().is_empty()
        {
            return Err(CoreError::InvalidInput("barcode must not be blank".to_string()));
        }

        let raw = self.scan_source.lookup(&query).map_err(|e| {
            warn!(%session_id, ?query, "scan lookup failed: {}", e);
            e
        })?;

        self.adjust_scan(session_id, raw).await
    }

    async fn adjust_scan(&self, session_id: Uuid, record: ScanRecord) -> Result<AdjustedScan, CoreError> {
        if record.health_score > 100 {
            return Err(CoreError::InvalidInput(
                "health_score must be between 0 and 100".to_string(),
            ));
        }

        let profile = self.profile_repository.find(session_id).await?;
        let adjusted = adjust(&record, &profile);

        info!(
            %session_id,
            item = %adjusted.name,
            category = ?adjusted.category,
            health_score = adjusted.health_score,
            alerts = adjusted.alerts.len(),
            "scan personalized"
        );

        Ok(AdjustedScan::from(adjusted))
    }
}
