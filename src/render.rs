use crate::domain::{conference_of, logo_url, FormulaParams, Team};
use crate::error::Result;
use crate::services::{Leaderboard, RankedTeam};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct RankedRow<'a> {
    pub rank: usize,
    pub conference: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(flatten)]
    pub team: &'a Team,
}

impl<'a> From<&RankedTeam<'a>> for RankedRow<'a> {
    fn from(ranked: &RankedTeam<'a>) -> Self {
        Self {
            rank: ranked.true_rank,
            conference: conference_of(&ranked.team.name).label(),
            logo: logo_url(&ranked.team.name),
            team: ranked.team,
        }
    }
}

fn limited<'a, 'b>(rows: &'b [RankedTeam<'a>], top: Option<usize>) -> &'b [RankedTeam<'a>] {
    match top {
        Some(n) if n < rows.len() => &rows[..n],
        _ => rows,
    }
}

pub fn write_json(out: &mut impl Write, rows: &[RankedTeam<'_>], top: Option<usize>) -> Result<()> {
    let rows: Vec<RankedRow> = limited(rows, top).iter().map(RankedRow::from).collect();
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_table(
    out: &mut impl Write,
    rows: &[RankedTeam<'_>],
    top: Option<usize>,
) -> Result<()> {
    writeln!(
        out,
        "{:>4}  {:<3}  {:<24} {:<14} {:>7} {:>9}",
        "RANK", "", "TEAM", "CONF", "RECORD", "RATING"
    )?;
    for row in limited(rows, top) {
        writeln!(
            out,
            "{:>4}  {:<3}  {:<24} {:<14} {:>7} {:>9.2}",
            row.true_rank,
            row.tier().badge(),
            row.team.name,
            conference_of(&row.team.name).label(),
            row.team.record(),
            row.team.ranking
        )?;
    }
    Ok(())
}

pub fn write_game_log(out: &mut impl Write, ranked: &RankedTeam<'_>) -> Result<()> {
    let team = ranked.team;
    writeln!(
        out,
        "#{} {} ({}) game results",
        ranked.true_rank,
        team.name.to_uppercase(),
        team.record()
    )?;
    if team.games.is_empty() {
        writeln!(out, "  no games")?;
        return Ok(());
    }
    for game in &team.games {
        writeln!(
            out,
            "  {}  vs {:<24} {:<6} {:>5}  {:<9}  opp {:>7.2}  value {:>+7.3}",
            game.result_letter(),
            game.opponent,
            game.opponent_record,
            game.margin_display(),
            game.margin_tier().label(),
            game.opponent_rank,
            game.value
        )?;
    }
    Ok(())
}

pub fn write_summary(
    out: &mut impl Write,
    shown: usize,
    board: &Leaderboard,
    params: &FormulaParams,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Teams:   {} of {}", shown, board.len())?;
    writeln!(out, "Formula: {}", params)?;
    if let Some(fetched_at) = board.fetched_at() {
        writeln!(out, "Fetched: {}", fetched_at.to_rfc3339())?;
    }
    Ok(())
}
