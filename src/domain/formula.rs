use crate::error::LeaderboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// The five weights the rating service applies. Values are transmitted as-is;
/// range checking is the service's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormulaParams {
    pub win_loss_multiplier: f64,
    pub one_score_multiplier: f64,
    pub two_score_multiplier: f64,
    pub three_score_multiplier: f64,
    pub strength_of_schedule_multiplier: f64,
}

impl Default for FormulaParams {
    fn default() -> Self {
        Self {
            win_loss_multiplier: 1.0,
            one_score_multiplier: 1.0,
            two_score_multiplier: 1.3,
            three_score_multiplier: 1.5,
            strength_of_schedule_multiplier: 1.0,
        }
    }
}

impl FormulaParams {
    pub fn get(&self, field: FormulaField) -> f64 {
        match field {
            FormulaField::WinLoss => self.win_loss_multiplier,
            FormulaField::OneScore => self.one_score_multiplier,
            FormulaField::TwoScore => self.two_score_multiplier,
            FormulaField::ThreeScore => self.three_score_multiplier,
            FormulaField::StrengthOfSchedule => self.strength_of_schedule_multiplier,
        }
    }

    pub fn set(&mut self, field: FormulaField, value: f64) {
        let slot = match field {
            FormulaField::WinLoss => &mut self.win_loss_multiplier,
            FormulaField::OneScore => &mut self.one_score_multiplier,
            FormulaField::TwoScore => &mut self.two_score_multiplier,
            FormulaField::ThreeScore => &mut self.three_score_multiplier,
            FormulaField::StrengthOfSchedule => &mut self.strength_of_schedule_multiplier,
        };
        *slot = value;
    }

    /// `(field, value)` pairs in wire order.
    pub fn fields(&self) -> [(FormulaField, f64); 5] {
        FormulaField::ALL.map(|field| (field, self.get(field)))
    }
}

impl fmt::Display for FormulaParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W/L {} | 1-score {} | 2-score {} | 3-score {} | SoS {}",
            self.win_loss_multiplier,
            self.one_score_multiplier,
            self.two_score_multiplier,
            self.three_score_multiplier,
            self.strength_of_schedule_multiplier
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormulaField {
    WinLoss,
    OneScore,
    TwoScore,
    ThreeScore,
    StrengthOfSchedule,
}

impl FormulaField {
    pub const ALL: [FormulaField; 5] = [
        FormulaField::WinLoss,
        FormulaField::OneScore,
        FormulaField::TwoScore,
        FormulaField::ThreeScore,
        FormulaField::StrengthOfSchedule,
    ];

    /// Query parameter name sent to the rating service.
    pub fn query_key(&self) -> &'static str {
        match self {
            Self::WinLoss => "win_loss_multiplier",
            Self::OneScore => "one_score_multiplier",
            Self::TwoScore => "two_score_multiplier",
            Self::ThreeScore => "three_score_multiplier",
            Self::StrengthOfSchedule => "strength_of_schedule_multiplier",
        }
    }

    /// Abbreviated key used in share links.
    pub fn share_key(&self) -> &'static str {
        match self {
            Self::WinLoss => "wl",
            Self::OneScore => "os",
            Self::TwoScore => "ts",
            Self::ThreeScore => "ths",
            Self::StrengthOfSchedule => "sos",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    JustWin,
    Blowout,
    Schedule,
}

impl Preset {
    pub fn params(&self) -> FormulaParams {
        match self {
            Self::JustWin => FormulaParams {
                win_loss_multiplier: 1.5,
                one_score_multiplier: 1.0,
                two_score_multiplier: 1.0,
                three_score_multiplier: 1.0,
                strength_of_schedule_multiplier: 1.0,
            },
            Self::Blowout => FormulaParams {
                win_loss_multiplier: 1.0,
                one_score_multiplier: 0.5,
                two_score_multiplier: 1.5,
                three_score_multiplier: 2.0,
                strength_of_schedule_multiplier: 1.0,
            },
            Self::Schedule => FormulaParams {
                win_loss_multiplier: 1.0,
                one_score_multiplier: 1.0,
                two_score_multiplier: 1.0,
                three_score_multiplier: 1.0,
                strength_of_schedule_multiplier: 2.0,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::JustWin => "just-win",
            Self::Blowout => "blowout",
            Self::Schedule => "schedule",
        }
    }
}

impl FromStr for Preset {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "just-win" => Ok(Self::JustWin),
            "blowout" => Ok(Self::Blowout),
            "schedule" => Ok(Self::Schedule),
            other => Err(LeaderboardError::InvalidArgument(format!(
                "unknown preset '{other}' (expected just-win, blowout or schedule)"
            ))),
        }
    }
}

/// Edits accepted by [`FormulaStore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormulaAction {
    Set(FormulaField, f64),
    Replace(FormulaParams),
    Reset,
    Preset(Preset),
}

/// Single source of truth for the weights, read by both the request builder
/// and the share-link encoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormulaStore {
    params: FormulaParams,
}

impl FormulaStore {
    pub fn new(params: FormulaParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> FormulaParams {
        self.params
    }

    pub fn set(&mut self, field: FormulaField, value: f64) {
        self.params.set(field, value);
    }

    pub fn replace(&mut self, params: FormulaParams) {
        self.params = params;
    }

    pub fn reset(&mut self) {
        self.params = FormulaParams::default();
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        info!("Applying formula preset {}", preset.name());
        self.params = preset.params();
    }

    pub fn apply(&mut self, action: FormulaAction) {
        match action {
            FormulaAction::Set(field, value) => self.set(field, value),
            FormulaAction::Replace(params) => self.replace(params),
            FormulaAction::Reset => self.reset(),
            FormulaAction::Preset(preset) => self.apply_preset(preset),
        }
    }
}
