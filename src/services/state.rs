use crate::domain::{FormulaAction, FormulaStore, RankingRequest, SeasonType, Team, ViewFilters};
use crate::error::Result;
use crate::services::ranking::{Leaderboard, RankedTeam};
use crate::services::search::SearchQuery;
use crate::services::share_link::SharedView;
use tracing::{info, warn};

/// Monotonic id of an issued fetch. Only the latest one may change state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetYear(u16),
    SetWeek(Option<u8>),
    SetSeasonType(SeasonType),
    Formula(FormulaAction),
    SetSearch(String),
    ToggleTeam(String),
    Retry,
}

/// What the driver has to do after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Fetch(RankingRequest),
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub filters: ViewFilters,
    pub formula: FormulaStore,
    pub search: String,
    pub expanded_team: Option<String>,
    pub leaderboard: Leaderboard,
    pub status: FetchStatus,
    latest_token: RequestToken,
    last_request: Option<RankingRequest>,
}

impl AppState {
    pub fn from_shared(view: SharedView) -> Self {
        Self {
            filters: view.filters,
            formula: FormulaStore::new(view.params),
            ..Self::default()
        }
    }

    pub fn shared_view(&self) -> SharedView {
        SharedView::new(self.filters, self.formula.params())
    }

    pub fn current_request(&self) -> RankingRequest {
        RankingRequest::new(self.filters, self.formula.params())
    }

    pub fn last_request(&self) -> Option<RankingRequest> {
        self.last_request
    }

    pub fn latest_token(&self) -> RequestToken {
        self.latest_token
    }

    /// Applies startup actions before the first fetch. Fetch effects are
    /// collapsed into the single initial request the driver issues.
    pub fn seed(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            match self.apply(action) {
                Effect::Fetch(_) | Effect::None => {}
            }
        }
    }

    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::SetYear(year) => {
                self.filters.year = year;
                Effect::Fetch(self.current_request())
            }
            Action::SetWeek(week) => {
                self.filters.week = week;
                Effect::Fetch(self.current_request())
            }
            Action::SetSeasonType(season_type) => {
                self.filters.season_type = season_type;
                Effect::Fetch(self.current_request())
            }
            Action::Formula(action) => {
                self.formula.apply(action);
                Effect::Fetch(self.current_request())
            }
            Action::SetSearch(query) => {
                self.search = query;
                Effect::None
            }
            Action::ToggleTeam(name) => {
                if self.expanded_team.as_deref() == Some(name.as_str()) {
                    self.expanded_team = None;
                } else {
                    self.expanded_team = Some(name);
                }
                Effect::None
            }
            Action::Retry => Effect::Fetch(
                self.last_request
                    .unwrap_or_else(|| self.current_request()),
            ),
        }
    }

    /// Marks `request` as the current fetch and hands out its token.
    pub fn begin_fetch(&mut self, request: RankingRequest) -> RequestToken {
        self.latest_token = RequestToken(self.latest_token.0 + 1);
        self.last_request = Some(request);
        self.status = FetchStatus::Loading;
        self.expanded_team = None;
        self.latest_token
    }

    /// Applies a finished fetch. Returns `false` if a newer fetch has been
    /// issued since, in which case state is left untouched.
    pub fn complete_fetch(&mut self, token: RequestToken, result: Result<Vec<Team>>) -> bool {
        if token != self.latest_token {
            warn!(
                "Discarding stale response {:?} (latest is {:?})",
                token, self.latest_token
            );
            return false;
        }

        match result {
            Ok(teams) => {
                info!("Loaded {} teams", teams.len());
                self.leaderboard = Leaderboard::new(teams);
                self.status = FetchStatus::Ready;
            }
            Err(e) => {
                warn!("Ranking fetch failed: {}", e);
                self.status = FetchStatus::Failed {
                    message: e.to_string(),
                };
            }
        }
        true
    }

    /// Failure outside a tracked fetch, e.g. the cache-clear call.
    pub fn fail(&mut self, message: String) {
        self.status = FetchStatus::Failed { message };
    }

    pub fn visible_teams(&self) -> Vec<RankedTeam<'_>> {
        self.leaderboard.search(&SearchQuery::new(&self.search))
    }
}
