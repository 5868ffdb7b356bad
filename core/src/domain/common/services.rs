use std::sync::Arc;

use crate::domain::{
    chat::ports::{ChatRepository, ChatResponder},
    profile::ports::ProfileRepository,
    recommendation::entities::MealCatalog,
    scan::ports::ScanSource,
};

/// Application service. Each domain implements its `*Service` trait for this
/// struct, so handlers only ever hold one value.
#[derive(Clone)]
pub struct Service<P, CH, SC, AR>
where
    P: ProfileRepository,
    CH: ChatRepository,
    SC: ScanSource,
    AR: ChatResponder,
{
    pub(crate) profile_repository: P,
    pub(crate) chat_repository: CH,
    pub(crate) scan_source: SC,
    pub(crate) chat_responder: AR,
    pub(crate) catalog: Arc<MealCatalog>,
}

impl<P, CH, SC, AR> Service<P, CH, SC, AR>
where
    P: ProfileRepository,
    CH: ChatRepository,
    SC: ScanSource,
    AR: ChatResponder,
{
    pub fn new(
        profile_repository: P,
        chat_repository: CH,
        scan_source: SC,
        chat_responder: AR,
        catalog: MealCatalog,
    ) -> Self {
        Self {
            profile_repository,
            chat_repository,
            scan_source,
            chat_responder,
            catalog: Arc::new(catalog),
        }
    }
}
