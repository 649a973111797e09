mod clients;

pub use clients::rankings::{parse_rankings, RankingClient, RankingSource, RankingsResponse};
