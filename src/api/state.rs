use std::sync::Arc;

use crate::betting::{OddsSource, RandomOdds, SeededOdds};
use crate::data::DataContext;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Player and schedule tables, loaded once at startup
    pub data: Arc<DataContext>,

    /// Odds sampler for every proposition
    pub odds: Arc<dyn OddsSource>,
}

impl AppState {
    pub fn new(data: Arc<DataContext>, odds: Arc<dyn OddsSource>) -> Self {
        Self { data, odds }
    }

    /// Seeded odds when a seed is given, thread-local randomness otherwise
    pub fn with_seed(data: Arc<DataContext>, odds_seed: Option<u64>) -> Self {
        let odds: Arc<dyn OddsSource> = match odds_seed {
            Some(seed) => Arc::new(SeededOdds::new(seed)),
            None => Arc::new(RandomOdds),
        };
        Self::new(data, odds)
    }
}
