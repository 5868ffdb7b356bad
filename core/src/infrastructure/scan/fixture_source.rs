use std::sync::{Arc, Mutex};

use rand::Rng;
use tracing::{debug, error};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        scan::{
            entities::ScanRecord,
            ports::ScanSource,
            value_objects::{ScanFixture, ScanQuery},
        },
    },
    infrastructure::scan::fixtures::fixture_record,
};

/// Stand-in for a barcode database: fixtures are returned as-is and any
/// barcode resolves to a fixture drawn from the injected RNG.
#[derive(Debug, Clone)]
pub struct FixtureScanSource<R> {
    rng: Arc<Mutex<R>>,
}

impl<R: Rng> FixtureScanSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    fn draw_fixture(&self) -> Result<ScanFixture, CoreError> {
        let mut rng = self.rng.lock().map_err(|_| {
            error!("scan source rng lock poisoned");
            CoreError::InternalServerError
        })?;

        Ok(if rng.gen_bool(0.5) {
            ScanFixture::Healthy
        } else {
            ScanFixture::Unhealthy
        })
    }
}

impl<R> ScanSource for FixtureScanSource<R>
where
    R: Rng + Send,
{
    fn lookup(&self, query: &ScanQuery) -> Result<ScanRecord, CoreError> {
        match query {
            ScanQuery::Fixture(fixture) => Ok(fixture_record(*fixture)),
            ScanQuery::Barcode(barcode) => {
                let fixture = self.draw_fixture()?;
                debug!(barcode = %barcode, ?fixture, "barcode resolved");

                let mut record = fixture_record(fixture);
                record.barcode = Some(barcode.trim().to_string());
                Ok(record)
            }
        }
    }
}
