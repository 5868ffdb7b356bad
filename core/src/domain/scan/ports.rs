use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    scan::{
        entities::{AdjustedScan, ScanRecord},
        value_objects::ScanQuery,
    },
};

/// Where raw scan records come from.
#[cfg_attr(test, mockall::automock)]
pub trait ScanSource: Send + Sync {
    fn lookup(&self, query: &ScanQuery) -> Result<ScanRecord, CoreError>;
}

pub trait ScanService: Send + Sync {
    /// Looks the item up in the scan source and personalizes it for the
    /// session.
    fn scan_food(
        &self,
        session_id: Uuid,
        query: ScanQuery,
    ) -> impl Future<Output = Result<AdjustedScan, CoreError>> + Send;

    /// Personalizes a raw record supplied by the caller.
    fn adjust_scan(
        &self,
        session_id: Uuid,
        record: ScanRecord,
    ) -> impl Future<Output = Result<AdjustedScan, CoreError>> + Send;
}
