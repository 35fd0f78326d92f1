use serde::{Deserialize, Serialize};

use super::bet::BetCategory;

/// One row of the player statistics table (most recent rolling form)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Display name (e.g., "Jayson Tatum")
    pub name: String,

    /// Team abbreviation (e.g., "BOS")
    pub team: String,

    /// Free-form injury label; blank when the source has none
    pub injury_status: String,

    /// Points per game over the last 10 games
    pub points: f64,

    /// Assists per game over the last 10 games
    pub assists: f64,

    /// Rebounds per game over the last 10 games
    pub rebounds: f64,

    /// Points + rebounds + assists per game over the last 10 games
    pub pra: f64,
}

impl PlayerRecord {
    /// Rolling average backing a bet category
    pub fn stat(&self, category: BetCategory) -> f64 {
        match category {
            BetCategory::Points => self.points,
            BetCategory::Assists => self.assists,
            BetCategory::Rebounds => self.rebounds,
            BetCategory::Combined => self.pra,
        }
    }
}
