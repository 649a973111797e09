use crate::domain::{RankingRequest, Team};
use crate::error::{LeaderboardError, Result};
use reqwest::{Client, Url};
use serde::Deserialize;
use std::future::Future;
use tracing::{debug, error, info};

/// Body of `GET /rankings`. Only `teams` is read; an absent or null list is
/// treated as empty.
#[derive(Debug, Deserialize)]
pub struct RankingsResponse {
    #[serde(default)]
    pub teams: Option<Vec<Team>>,
}

/// Anything that can compute a leaderboard for a request.
pub trait RankingSource {
    fn fetch(&self, request: &RankingRequest) -> impl Future<Output = Result<Vec<Team>>> + Send;
    fn clear_cache(&self) -> impl Future<Output = Result<()>> + Send;
}

pub struct RankingClient {
    client: Client,
    base_url: Url,
}

impl RankingClient {
    pub fn new(client: Client, mut base_url: Url) -> Self {
        // Keep any path prefix when joining endpoint names onto it.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> Result<Url> {
        Ok(self.base_url.join(name)?)
    }
}

pub fn parse_rankings(body: &str) -> Result<Vec<Team>> {
    let response: RankingsResponse = serde_json::from_str(body)
        .map_err(|e| LeaderboardError::MalformedResponse(e.to_string()))?;
    Ok(response.teams.unwrap_or_default())
}

impl RankingSource for RankingClient {
    async fn fetch(&self, request: &RankingRequest) -> Result<Vec<Team>> {
        let url = self.endpoint("rankings")?;
        info!(
            "Fetching rankings: year {} ({}) week {:?}",
            request.filters.year, request.filters.season_type, request.filters.week
        );
        debug!("Formula: {}", request.params);

        let response = self
            .client
            .get(url)
            .query(&request.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Rankings API error: Status {}", status);
            return Err(LeaderboardError::Remote {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let teams = parse_rankings(&body)?;
        info!("Rankings API returned {} teams", teams.len());
        Ok(teams)
    }

    async fn clear_cache(&self) -> Result<()> {
        let url = self.endpoint("clear-cache")?;
        info!("Clearing remote ranking cache");

        let response = self.client.post(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Cache clear failed: Status {}", status);
            return Err(LeaderboardError::Remote {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
