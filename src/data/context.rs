use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::info;

use super::loader;
use crate::config::Config;
use crate::error::DataError;
use crate::models::{PlayerRecord, ScheduleEntry};

/// Immutable snapshot of the player and schedule tables shared by every request
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    players: Vec<PlayerRecord>,
    schedule: HashMap<NaiveDate, Vec<String>>,
}

impl DataContext {
    /// Build a context from already-loaded tables.
    ///
    /// Later entries for an already-seen date are ignored.
    pub fn new(players: Vec<PlayerRecord>, schedule: Vec<ScheduleEntry>) -> Self {
        let mut by_date = HashMap::with_capacity(schedule.len());
        for entry in schedule {
            by_date.entry(entry.date).or_insert(entry.teams);
        }

        Self {
            players,
            schedule: by_date,
        }
    }

    /// Load both tables from the configured locations
    pub fn load(config: &Config) -> Result<Self, DataError> {
        let stats_path = loader::resolve_path(
            &config.player_stats_path,
            config.player_stats_fallback_path.as_deref(),
        )?;
        let players = loader::load_players(&stats_path)?;
        let schedule = loader::load_schedule(&config.game_schedule_path)?;

        if players.is_empty() {
            return Err(DataError::Validation(format!(
                "no usable player rows in {}",
                stats_path.display()
            )));
        }

        let context = Self::new(players, schedule);
        info!(
            "Data context ready: {} players, {} scheduled dates",
            context.player_count(),
            context.schedule_len()
        );
        Ok(context)
    }

    /// Teams scheduled on `date`, if the date is in the schedule
    pub fn teams_on(&self, date: NaiveDate) -> Option<&[String]> {
        self.schedule.get(&date).map(Vec::as_slice)
    }

    /// Players whose team plays on `date`, in table order
    pub fn active_players(&self, date: NaiveDate) -> Vec<&PlayerRecord> {
        let Some(teams) = self.teams_on(date) else {
            return Vec::new();
        };

        let teams: HashSet<&str> = teams.iter().map(String::as_str).collect();
        self.players
            .iter()
            .filter(|p| teams.contains(p.team.as_str()))
            .collect()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn schedule_len(&self) -> usize {
        self.schedule.len()
    }
}
