use crate::domain::RankingRequest;
use crate::infrastructure::RankingSource;
use crate::services::state::{Action, AppState, Effect, FetchStatus};
use tracing::{error, info};

/// Drives the fetch cycle: actions go through the reducer, fetch effects go
/// to the ranking source, and results come back through the token guard.
pub struct Session<S> {
    state: AppState,
    source: S,
}

impl<S: RankingSource> Session<S> {
    pub fn new(source: S, state: AppState) -> Self {
        Self { state, source }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn dispatch(&mut self, action: Action) -> &FetchStatus {
        match self.state.apply(action) {
            Effect::Fetch(request) => self.run_fetch(request).await,
            Effect::None => &self.state.status,
        }
    }

    /// Fetches with the current filters and weights.
    pub async fn refresh(&mut self) -> &FetchStatus {
        let request = self.state.current_request();
        self.run_fetch(request).await
    }

    /// Re-issues the last request unchanged.
    pub async fn retry(&mut self) -> &FetchStatus {
        info!("Retrying last ranking request");
        self.dispatch(Action::Retry).await
    }

    /// Invalidates the service cache, then fetches. A failed invalidation
    /// fails the whole operation and no fetch is sent.
    pub async fn clear_cache_and_refresh(&mut self) -> &FetchStatus {
        self.state.status = FetchStatus::Loading;
        if let Err(e) = self.source.clear_cache().await {
            error!("Failed to clear cache: {}", e);
            self.state.fail(e.to_string());
            return &self.state.status;
        }
        self.refresh().await
    }

    async fn run_fetch(&mut self, request: RankingRequest) -> &FetchStatus {
        let token = self.state.begin_fetch(request);
        let result = self.source.fetch(&request).await;
        self.state.complete_fetch(token, result);
        &self.state.status
    }
}
