use cfb_leaderboard::config::Config;
use cfb_leaderboard::error::Result;
use cfb_leaderboard::infrastructure::RankingClient;
use cfb_leaderboard::render;
use cfb_leaderboard::services::{share_url, Action, FetchStatus, Session};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::{error, info, Level};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let config = Config::new()?;

    let level = Level::from_str(&config.args.log_level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let client = RankingClient::new(config.http_client.clone(), config.api_url.clone());
    let mut session = Session::new(client, config.initial_state());

    let spinner = loading_spinner("Computing rankings...");
    let mut status = if config.args.clear_cache {
        session.clear_cache_and_refresh().await.clone()
    } else {
        session.refresh().await.clone()
    };
    spinner.finish_and_clear();

    let mut answers = BufReader::new(tokio::io::stdin()).lines();
    while let FetchStatus::Failed { message } = &status {
        eprintln!("Failed to load rankings: {message}");
        if !ask_retry(&mut answers).await? {
            return Ok(ExitCode::FAILURE);
        }
        let spinner = loading_spinner("Retrying...");
        status = session.retry().await.clone();
        spinner.finish_and_clear();
    }

    if let Some(team) = &config.args.team {
        session.dispatch(Action::ToggleTeam(team.clone())).await;
    }

    let state = session.state();
    let rows = state.visible_teams();
    info!("Showing {} of {} teams", rows.len(), state.leaderboard.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.args.json {
        render::write_json(&mut out, &rows, config.args.top)?;
        return Ok(ExitCode::SUCCESS);
    }

    render::write_table(&mut out, &rows, config.args.top)?;

    if let Some(name) = &state.expanded_team {
        writeln!(out)?;
        match state.leaderboard.find(name) {
            Some(ranked) => render::write_game_log(&mut out, &ranked)?,
            None => writeln!(out, "No team named '{name}' in this leaderboard")?,
        }
    }

    render::write_summary(
        &mut out,
        rows.len(),
        &state.leaderboard,
        &state.formula.params(),
    )?;

    if config.args.print_share {
        let url = share_url(&config.share_base, &state.shared_view());
        writeln!(out, "Share:   {url}")?;
    }

    Ok(ExitCode::SUCCESS)
}

fn loading_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Asks whether to re-issue the failed request. EOF counts as "no".
async fn ask_retry<R>(answers: &mut Lines<R>) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    eprint!("Try again? [Y/n] ");
    io::stderr().flush()?;

    let answer = answers.next_line().await?;
    Ok(matches!(
        answer.as_deref().map(str::trim),
        Some("") | Some("y") | Some("Y") | Some("yes")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn retry_answers_share_one_reader() {
        let input: &[u8] = b"y\n\nn\n";
        let mut answers = BufReader::new(input).lines();
        assert!(ask_retry(&mut answers).await.unwrap());
        assert!(ask_retry(&mut answers).await.unwrap());
        assert!(!ask_retry(&mut answers).await.unwrap());
        assert!(!ask_retry(&mut answers).await.unwrap());
    }
}
