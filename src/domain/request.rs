use super::{FormulaParams, ViewFilters};
use serde::Serialize;

/// Everything the rating service needs to compute one leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankingRequest {
    pub filters: ViewFilters,
    pub params: FormulaParams,
}

impl RankingRequest {
    pub fn new(filters: ViewFilters, params: FormulaParams) -> Self {
        Self { filters, params }
    }

    /// Query pairs for `GET /rankings`, in the order the service documents.
    /// Weights go out under their full names; `week` is omitted for all weeks.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("year", self.filters.year.to_string()),
            ("season_type", self.filters.season_type.as_str().to_string()),
        ];
        if let Some(week) = self.filters.week {
            pairs.push(("week", week.to_string()));
        }
        pairs.extend(
            self.params
                .fields()
                .into_iter()
                .map(|(field, value)| (field.query_key(), value.to_string())),
        );
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Preset, SeasonType};

    #[test]
    fn all_weeks_omits_week() {
        let request = RankingRequest::new(ViewFilters::default(), FormulaParams::default());
        let keys: Vec<_> = request.query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            [
                "year",
                "season_type",
                "win_loss_multiplier",
                "one_score_multiplier",
                "two_score_multiplier",
                "three_score_multiplier",
                "strength_of_schedule_multiplier",
            ]
        );
    }

    #[test]
    fn week_and_weights_use_full_names() {
        let filters = ViewFilters {
            year: 2023,
            week: Some(9),
            season_type: SeasonType::Both,
        };
        let request = RankingRequest::new(filters, Preset::Blowout.params());
        let pairs = request.query_pairs();
        assert_eq!(pairs[0], ("year", "2023".to_string()));
        assert_eq!(pairs[1], ("season_type", "both".to_string()));
        assert_eq!(pairs[2], ("week", "9".to_string()));
        assert_eq!(pairs[4], ("one_score_multiplier", "0.5".to_string()));
        assert_eq!(pairs[5], ("two_score_multiplier", "1.5".to_string()));
        assert_eq!(pairs.len(), 8);
    }
}
