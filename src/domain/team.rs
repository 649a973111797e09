use serde::{Deserialize, Serialize};

/// One FBS program as returned by the rating service for a single query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub ranking: f64,
    /// Schedule order, exactly as the service returned it.
    #[serde(default)]
    pub games: Vec<Game>,
}

impl Team {
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

/// A single scored contest. `won` and the sign of `margin` are passed through
/// as received, even when they disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub opponent: String,
    pub opponent_record: String,
    pub opponent_rank: f64,
    pub won: bool,
    pub margin: i32,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarginTier {
    /// Decided by eight points or fewer.
    OneScore,
    /// Nine to sixteen points.
    TwoScore,
    /// Seventeen or more.
    ThreeScore,
}

impl MarginTier {
    pub fn from_margin(margin: i32) -> Self {
        match margin.unsigned_abs() {
            0..=8 => Self::OneScore,
            9..=16 => Self::TwoScore,
            _ => Self::ThreeScore,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneScore => "one-score",
            Self::TwoScore => "two-score",
            Self::ThreeScore => "blowout",
        }
    }
}

impl Game {
    pub fn margin_tier(&self) -> MarginTier {
        MarginTier::from_margin(self.margin)
    }

    pub fn result_letter(&self) -> char {
        if self.won {
            'W'
        } else {
            'L'
        }
    }

    /// `+14`, `-3`, `0`.
    pub fn margin_display(&self) -> String {
        if self.margin > 0 {
            format!("+{}", self.margin)
        } else {
            self.margin.to_string()
        }
    }
}
