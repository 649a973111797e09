use crate::domain::{parse_year, Preset, SeasonType};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Base URL of the rating service
    #[arg(long, env = "CFB_API_URL", default_value = "http://localhost:8000")]
    pub api_url: String,

    /// Share link (or bare query string) to seed filters and weights from
    #[arg(long)]
    pub share: Option<String>,

    /// Four-digit season year
    #[arg(long, value_parser = year_arg)]
    pub year: Option<u16>,

    /// Week 1-15; omit for all weeks
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=15))]
    pub week: Option<u8>,

    /// Season type (regular, both)
    #[arg(long)]
    pub season_type: Option<SeasonType>,

    /// Formula preset (just-win, blowout, schedule)
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Reset formula weights to their defaults
    #[arg(long)]
    pub reset: bool,

    /// Win/loss weight
    #[arg(long, allow_negative_numbers = true)]
    pub wl: Option<f64>,

    /// One-score game weight (margin <= 8)
    #[arg(long, allow_negative_numbers = true)]
    pub os: Option<f64>,

    /// Two-score game weight (margin 9-16)
    #[arg(long, allow_negative_numbers = true)]
    pub ts: Option<f64>,

    /// Blowout weight (margin 17+)
    #[arg(long, allow_negative_numbers = true)]
    pub ths: Option<f64>,

    /// Strength of schedule weight
    #[arg(long, allow_negative_numbers = true)]
    pub sos: Option<f64>,

    /// Filter by team or conference name
    #[arg(long, default_value = "")]
    pub search: String,

    /// Show the game log for one team
    #[arg(long)]
    pub team: Option<String>,

    /// Only print the first N rows
    #[arg(long)]
    pub top: Option<usize>,

    /// Clear the service's ranking cache before fetching
    #[arg(long)]
    pub clear_cache: bool,

    /// Print a share link for the current view
    #[arg(long)]
    pub print_share: bool,

    /// Base URL for printed share links (defaults to the service root)
    #[arg(long)]
    pub share_base: Option<String>,

    /// Print the visible leaderboard as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn year_arg(raw: &str) -> Result<u16, String> {
    parse_year(raw).ok_or_else(|| format!("'{raw}' is not a four-digit year"))
}
