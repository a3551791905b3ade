use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bestball::cache;
use bestball::config::Config;
use bestball::error::Result;
use bestball::fetch::DkClient;
use bestball::normalize::keys::resolve_i64;
use bestball::normalize::{is_bestball_contest, normalize_contest, normalize_leaderboard};
use bestball::updater::Updater;

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    let updater = Updater::new(&cfg.username, &cfg.data_dir);

    if cfg.cookie.is_some() {
        refresh_raw_files(&cfg, &updater).await?;
    } else {
        info!("DK_COOKIE not set, re-parsing files already on disk");
    }

    let (data, stats) = updater.build()?;
    cache::save_data(&updater.data_path(), &data)?;
    info!(
        standings = data.standings.len(),
        roster_slots = data.rosters.len(),
        contests = stats.contests,
        "wrote {}",
        updater.data_path().display()
    );
    Ok(())
}

/// Pull fresh leaderboards (and optionally rosters and player pools) for
/// every live best-ball contest on the saved listing page. Per-contest
/// fetch failures are logged and skipped; the refresh keeps going.
async fn refresh_raw_files(cfg: &Config, updater: &Updater) -> Result<()> {
    let client = DkClient::new(cfg)?;
    let delay = Duration::from_millis(cfg.fetch_delay_ms);

    std::fs::create_dir_all(cfg.data_dir.join("leaderboards"))?;
    std::fs::create_dir_all(cfg.data_dir.join("rosters"))?;

    let mut fetched = 0usize;
    let mut skipped = 0usize;

    for raw in updater.load_contests()? {
        let contest = normalize_contest(&raw);
        if !is_bestball_contest(&contest) {
            continue;
        }
        let Some(contest_key) = resolve_i64(&raw, &["MegaContestId", "ContestId"]) else {
            continue;
        };

        let lb = match client.contest_leaderboard(contest_key).await {
            Ok(lb) => lb,
            Err(e) => {
                warn!(contest_key, "leaderboard fetch failed: {e}");
                skipped += 1;
                continue;
            }
        };
        cache::save_json(&updater.leaderboard_path(contest_key), &lb)?;
        fetched += 1;
        tokio::time::sleep(delay).await;

        let Some(draft_group_id) = contest.draft_group_id else {
            continue;
        };

        let draftables_path = updater.draftables_path(draft_group_id);
        if !draftables_path.is_file() {
            match client.draftables(draft_group_id).await {
                Ok(pool) => {
                    cache::save_json(&draftables_path, &pool)?;
                    tokio::time::sleep(delay).await;
                }
                Err(e) => warn!(draft_group_id, "draftables fetch failed: {e}"),
            }
        }

        if cfg.fetch_rosters {
            for entry in normalize_leaderboard(&lb) {
                let Some(entry_key) = entry.entry_key else {
                    continue;
                };
                let path = updater.roster_path(entry_key);
                if path.is_file() {
                    continue;
                }
                match client.contest_roster(draft_group_id, entry_key).await {
                    Ok(roster) => cache::save_json(&path, &roster)?,
                    Err(e) => {
                        warn!(entry_key, "roster fetch failed: {e}");
                        skipped += 1;
                    }
                }
                tokio::time::sleep(delay).await;
            }
        }
    }

    info!(fetched, skipped, "refresh complete");
    Ok(())
}
