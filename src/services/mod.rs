pub(crate) mod ranking;
pub(crate) mod search;
pub(crate) mod session;
pub(crate) mod share_link;
pub(crate) mod state;

pub use ranking::{derive_rankings, Leaderboard, RankTier, RankedTeam};
pub use search::SearchQuery;
pub use session::Session;
pub use share_link::{
    decode as decode_share_link, encode as encode_share_link, share_url, SharedView,
};
pub use state::{Action, AppState, Effect, FetchStatus, RequestToken};
