use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::Odds;

/// Source of placeholder odds for each proposition
pub trait OddsSource: Send + Sync {
    fn sample(&self) -> Odds;
}

/// Uniform draw from [`Odds::CHOICES`] using the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOdds;

impl OddsSource for RandomOdds {
    fn sample(&self) -> Odds {
        let mut rng = rand::thread_rng();
        Odds::CHOICES
            .choose(&mut rng)
            .copied()
            .unwrap_or(Odds::CHOICES[0])
    }
}

/// Reproducible draw from [`Odds::CHOICES`]
pub struct SeededOdds {
    rng: Mutex<StdRng>,
}

impl SeededOdds {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl OddsSource for SeededOdds {
    fn sample(&self) -> Odds {
        // A poisoned lock still holds a usable RNG
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Odds::CHOICES
            .choose(&mut *rng)
            .copied()
            .unwrap_or(Odds::CHOICES[0])
    }
}

/// Always returns the same odds
#[derive(Debug, Clone, Copy)]
pub struct FixedOdds(pub Odds);

impl OddsSource for FixedOdds {
    fn sample(&self) -> Odds {
        self.0
    }
}
