pub mod bet;
pub mod player;
pub mod schedule;

pub use bet::{Advice, BetCandidate, BetCategory, Odds, Recommendation};
pub use player::PlayerRecord;
pub use schedule::{parse_date, ScheduleEntry};
