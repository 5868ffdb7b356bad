use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use crate::{
    domain::{
        common::{NutrisenseConfig, RandomnessConfig, services::Service},
        recommendation::entities::MealCatalog,
    },
    infrastructure::{
        chat::CannedChatResponder, scan::FixtureScanSource, session::InMemorySessionStore,
    },
};

pub type NutrisenseService = Service<
    InMemorySessionStore,
    InMemorySessionStore,
    FixtureScanSource<StdRng>,
    CannedChatResponder<StdRng>,
>;

fn rng_pair(config: &RandomnessConfig) -> (StdRng, StdRng) {
    match config.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    }
}

pub fn create_service(config: NutrisenseConfig) -> NutrisenseService {
    let sessions = InMemorySessionStore::new(config.sessions.clone());
    let (scan_rng, chat_rng) = rng_pair(&config.randomness);

    info!(
        seeded = config.randomness.seed.is_some(),
        max_sessions = config.sessions.max_sessions,
        "creating nutrisense service"
    );

    Service::new(
        sessions.clone(),
        sessions,
        FixtureScanSource::new(scan_rng),
        CannedChatResponder::new(chat_rng),
        MealCatalog::default(),
    )
}
