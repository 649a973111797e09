mod filters;
mod formula;
pub(crate) mod lookup;
mod request;
mod team;

pub use filters::{parse_week, parse_year, SeasonType, ViewFilters, DEFAULT_YEAR, MAX_WEEK};
pub use formula::{FormulaAction, FormulaField, FormulaParams, FormulaStore, Preset};
pub use lookup::{conference_of, logo_url, Conference};
pub use request::RankingRequest;
pub use team::{Game, MarginTier, Team};
