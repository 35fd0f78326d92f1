use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Statistical category a prop bet is offered on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BetCategory {
    Points,
    Assists,
    Rebounds,
    /// Points + rebounds + assists
    #[serde(rename = "P+R+A")]
    Combined,
}

impl BetCategory {
    /// Canonical evaluation order; earlier categories win confidence ties
    pub const ALL: [BetCategory; 4] = [
        BetCategory::Points,
        BetCategory::Assists,
        BetCategory::Rebounds,
        BetCategory::Combined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BetCategory::Points => "Points",
            BetCategory::Assists => "Assists",
            BetCategory::Rebounds => "Rebounds",
            BetCategory::Combined => "P+R+A",
        }
    }
}

impl fmt::Display for BetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the line to take
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Advice {
    Over,
    Under,
}

/// American odds (e.g., -110, +120)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Odds(pub i32);

impl Odds {
    /// Placeholder market prices sampled for every proposition
    pub const CHOICES: [Odds; 5] = [Odds(-110), Odds(-120), Odds(-130), Odds(100), Odds(120)];
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "{:+}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Odds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A proposed bet for one player in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetCandidate {
    pub category: BetCategory,

    /// Threshold, always a multiple of 0.5
    pub line: f64,

    pub odds: Odds,

    /// Percentage in [0, 100]
    pub confidence: f64,

    pub advice: Advice,
}

/// A ranked recommendation as returned by `GET /bets`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub player: String,
    pub team: String,
    pub bet_type: BetCategory,
    pub line: f64,
    pub odds: Odds,
    #[serde(serialize_with = "serialize_confidence")]
    pub confidence: f64,
    pub advice: Advice,
}

/// Render a confidence percentage: capped values as "100%", otherwise one decimal ("95.3%")
pub fn format_confidence(confidence: f64) -> String {
    if confidence >= 100.0 {
        "100%".to_string()
    } else {
        format!("{:.1}%", confidence)
    }
}

fn serialize_confidence<S: Serializer>(confidence: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_confidence(*confidence))
}
