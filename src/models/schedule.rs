use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Teams playing on a given calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,

    /// Team abbreviations, trimmed, in source order
    pub teams: Vec<String>,
}

impl ScheduleEntry {
    /// Build an entry from a comma-separated team list (e.g., "LAL, BOS")
    pub fn from_team_list(date: NaiveDate, teams: &str) -> Self {
        let teams = teams
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Self { date, teams }
    }
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a calendar date as written in the schedule file or the `date` query parameter.
///
/// Accepts ISO dates, ISO datetimes (time dropped), and slash-separated
/// US or year-first dates.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
