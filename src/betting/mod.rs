pub mod availability;
pub mod calculator;
pub mod odds;
pub mod ranker;

use chrono::NaiveDate;
use tracing::debug;

pub use availability::is_available;
pub use calculator::{calculate_best_bet, PlayerBets};
pub use odds::{FixedOdds, OddsSource, RandomOdds, SeededOdds};
pub use ranker::{rank, TOP_N};

use crate::data::DataContext;
use crate::models::Recommendation;

/// Result of evaluating a date's slate
#[derive(Debug, Clone, PartialEq)]
pub enum SlateOutcome {
    /// The date is unscheduled or no player belongs to a scheduled team
    NoActivePlayers,

    /// Ranked picks; empty when every active player is unavailable
    Picks(Vec<Recommendation>),
}

/// Top recommendations for every available player whose team plays on `date`
pub fn recommend_for_date(
    context: &DataContext,
    date: NaiveDate,
    odds: &dyn OddsSource,
) -> SlateOutcome {
    let active = context.active_players(date);
    if active.is_empty() {
        debug!("No active players on {}", date);
        return SlateOutcome::NoActivePlayers;
    }

    let recommendations: Vec<Recommendation> = active
        .into_iter()
        .filter(|p| is_available(p))
        .map(|player| {
            let best = calculate_best_bet(player, odds).best;
            Recommendation {
                player: player.name.clone(),
                team: player.team.clone(),
                bet_type: best.category,
                line: best.line,
                odds: best.odds,
                confidence: best.confidence,
                advice: best.advice,
            }
        })
        .collect();

    debug!(
        "Scored {} available players on {}",
        recommendations.len(),
        date
    );

    SlateOutcome::Picks(rank(recommendations, TOP_N))
}
