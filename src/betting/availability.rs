use crate::models::PlayerRecord;

/// Injury labels that rule a player out of recommendations
const UNAVAILABLE_STATUSES: [&str; 3] = ["injured", "probable", "out"];

/// Whether a player can be recommended. Blank or unknown statuses count as available.
pub fn is_available(player: &PlayerRecord) -> bool {
    let status = player.injury_status.trim().to_lowercase();
    !UNAVAILABLE_STATUSES.contains(&status.as_str())
}
