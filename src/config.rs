use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Player statistics CSV
    pub player_stats_path: PathBuf,

    /// Tried when `player_stats_path` does not exist
    pub player_stats_fallback_path: Option<PathBuf>,

    /// Game schedule CSV
    pub game_schedule_path: PathBuf,

    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,

    /// Seed for reproducible odds sampling
    pub odds_seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            player_stats_path: env::var("PLAYER_STATS_PATH")
                .unwrap_or_else(|_| "data/nba_player_stats_2020_2025.csv".to_string())
                .into(),

            player_stats_fallback_path: env::var("PLAYER_STATS_FALLBACK_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),

            game_schedule_path: env::var("GAME_SCHEDULE_PATH")
                .unwrap_or_else(|_| "data/nba_game_schedule.csv".to_string())
                .into(),

            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
                .parse()
                .context("BIND_ADDR must be a valid socket address")?,

            odds_seed: env::var("ODDS_SEED")
                .ok()
                .map(|s| s.parse())
                .transpose()
                .context("ODDS_SEED must be a valid unsigned integer")?,
        })
    }
}
