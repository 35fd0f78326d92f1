use super::odds::OddsSource;
use crate::models::{Advice, BetCandidate, BetCategory, PlayerRecord};

/// Every candidate for one player, plus the one selected as best
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBets {
    /// One candidate per category, in [`BetCategory::ALL`] order
    pub candidates: [BetCandidate; 4],
    pub best: BetCandidate,
}

/// Proposed line for a rolling average: 90% of it, to the nearest half point
pub fn compute_line(average: f64) -> f64 {
    (f64::max(0.8 * average, 0.9 * average) * 2.0).round_ties_even() / 2.0
}

/// Ratio of average to line as a percentage, one decimal, capped at 100.
///
/// A zero line scores 0.
pub fn compute_confidence(average: f64, line: f64) -> f64 {
    if line == 0.0 {
        return 0.0;
    }

    let pct = (average / line * 100.0 * 10.0).round_ties_even() / 10.0;
    pct.clamp(0.0, 100.0)
}

/// Build the candidate bet for a single category
pub fn candidate(player: &PlayerRecord, category: BetCategory, odds: &dyn OddsSource) -> BetCandidate {
    let average = player.stat(category);
    let line = compute_line(average);

    BetCandidate {
        category,
        line,
        odds: odds.sample(),
        confidence: compute_confidence(average, line),
        advice: if average > line { Advice::Over } else { Advice::Under },
    }
}

/// Score every category for a player and pick the highest-confidence one.
///
/// Ties go to the category that comes first in [`BetCategory::ALL`].
pub fn calculate_best_bet(player: &PlayerRecord, odds: &dyn OddsSource) -> PlayerBets {
    let candidates = BetCategory::ALL.map(|category| candidate(player, category, odds));

    let mut best = &candidates[0];
    for c in &candidates[1..] {
        if c.confidence > best.confidence {
            best = c;
        }
    }

    PlayerBets {
        best: best.clone(),
        candidates,
    }
}
