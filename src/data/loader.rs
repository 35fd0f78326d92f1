use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::DataError;
use crate::models::{parse_date, PlayerRecord, ScheduleEntry};

/// Player stats row as exported by the stats pipeline
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawPlayer {
    DISPLAY_FIRST_LAST: String,
    TEAM_ABBREVIATION: String,
    #[serde(default)]
    INJURY_STATUS: Option<String>,
    POINTS_PER_GAME_10G_MODE: f64,
    ASSISTS_PER_GAME_10G_MODE: f64,
    REBOUNDS_PER_GAME_10G_MODE: f64,
    PRA_10G_MODE: f64,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawScheduleRow {
    DATE: String,
    #[serde(default)]
    TEAMS: String,
}

/// Pick the first existing path among the primary and optional fallback
pub fn resolve_path(primary: &Path, fallback: Option<&Path>) -> Result<PathBuf, DataError> {
    if primary.exists() {
        info!("Using data file {}", primary.display());
        return Ok(primary.to_path_buf());
    }

    if let Some(fallback) = fallback {
        if fallback.exists() {
            info!(
                "{} not found, using fallback {}",
                primary.display(),
                fallback.display()
            );
            return Ok(fallback.to_path_buf());
        }
    }

    let mut tried = vec![primary.to_path_buf()];
    tried.extend(fallback.map(Path::to_path_buf));
    Err(DataError::MissingFile { tried })
}

/// Load the player statistics table from a CSV file
pub fn load_players(path: &Path) -> Result<Vec<PlayerRecord>, DataError> {
    let file = open(path)?;
    let players = load_players_from_reader(file).map_err(|source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Load the game schedule from a CSV file
pub fn load_schedule(path: &Path) -> Result<Vec<ScheduleEntry>, DataError> {
    if !path.exists() {
        return Err(DataError::MissingFile {
            tried: vec![path.to_path_buf()],
        });
    }

    let file = open(path)?;
    let schedule = load_schedule_from_reader(file).map_err(|source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} schedule dates from {}", schedule.len(), path.display());
    Ok(schedule)
}

fn open(path: &Path) -> Result<File, DataError> {
    File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse player rows, skipping malformed or out-of-range ones.
///
/// Fails only when the header itself cannot be read.
pub fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    reader.headers()?;

    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayer>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping malformed player row: {}", e);
                continue;
            }
        };

        let name = raw.DISPLAY_FIRST_LAST.trim().to_string();
        let stats = [
            raw.POINTS_PER_GAME_10G_MODE,
            raw.ASSISTS_PER_GAME_10G_MODE,
            raw.REBOUNDS_PER_GAME_10G_MODE,
            raw.PRA_10G_MODE,
        ];
        if !stats.iter().all(|v| v.is_finite() && *v >= 0.0) {
            warn!("Skipping player '{}': stats must be finite and non-negative", name);
            continue;
        }

        players.push(PlayerRecord {
            name,
            team: raw.TEAM_ABBREVIATION.trim().to_string(),
            injury_status: raw.INJURY_STATUS.unwrap_or_default().trim().to_string(),
            points: raw.POINTS_PER_GAME_10G_MODE,
            assists: raw.ASSISTS_PER_GAME_10G_MODE,
            rebounds: raw.REBOUNDS_PER_GAME_10G_MODE,
            pra: raw.PRA_10G_MODE,
        });
    }

    Ok(players)
}

/// Parse schedule rows; the first row wins when a date repeats
pub fn load_schedule_from_reader<R: Read>(rdr: R) -> Result<Vec<ScheduleEntry>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    reader.headers()?;

    let mut seen = HashSet::new();
    let mut schedule = Vec::new();
    for result in reader.deserialize::<RawScheduleRow>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping malformed schedule row: {}", e);
                continue;
            }
        };

        let Some(date) = parse_date(&raw.DATE) else {
            warn!("Skipping schedule row with unparseable date '{}'", raw.DATE);
            continue;
        };

        if !seen.insert(date) {
            warn!("Duplicate schedule entry for {}, keeping the first", date);
            continue;
        }

        schedule.push(ScheduleEntry::from_team_list(date, &raw.TEAMS));
    }

    Ok(schedule)
}
