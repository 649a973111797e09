use crate::config::cli::Args;
use crate::domain::{FormulaAction, FormulaField};
use crate::error::Result;
use crate::services::{decode_share_link, Action, AppState, SharedView};
use clap::Parser;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::info;

pub mod cli;

pub struct Config {
    pub args: Args,
    pub api_url: Url,
    pub share_base: Url,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let api_url = Url::parse(&args.api_url)?;
        let share_base = match &args.share_base {
            Some(base) => Url::parse(base)?,
            None => api_url.join("/")?,
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(concat!("cfb-leaderboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            args,
            api_url,
            share_base,
            http_client,
        })
    }

    /// Defaults, then the share link, then explicit flags: preset, reset and
    /// single-weight overrides, in that order.
    pub fn initial_state(&self) -> AppState {
        let view = match &self.args.share {
            Some(link) => {
                info!("Seeding view from share link");
                decode_share_link(link)
            }
            None => SharedView::default(),
        };
        let mut state = AppState::from_shared(view);

        let mut actions = Vec::new();
        if let Some(year) = self.args.year {
            actions.push(Action::SetYear(year));
        }
        if let Some(week) = self.args.week {
            actions.push(Action::SetWeek(Some(week)));
        }
        if let Some(season_type) = self.args.season_type {
            actions.push(Action::SetSeasonType(season_type));
        }
        if let Some(preset) = self.args.preset {
            actions.push(Action::Formula(FormulaAction::Preset(preset)));
        }
        if self.args.reset {
            actions.push(Action::Formula(FormulaAction::Reset));
        }
        let overrides = [
            (FormulaField::WinLoss, self.args.wl),
            (FormulaField::OneScore, self.args.os),
            (FormulaField::TwoScore, self.args.ts),
            (FormulaField::ThreeScore, self.args.ths),
            (FormulaField::StrengthOfSchedule, self.args.sos),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                actions.push(Action::Formula(FormulaAction::Set(field, value)));
            }
        }
        if !self.args.search.is_empty() {
            actions.push(Action::SetSearch(self.args.search.clone()));
        }

        state.seed(actions);
        state
    }
}
