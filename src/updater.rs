//! Batch update pipeline: contest listing → leaderboards → rosters →
//! player pools → normalized [`MyData`].
//!
//! Each contest is processed independently; a bad or missing file logs a
//! warning, bumps a skip counter, and the run moves on. One corrupt pull
//! never fails the batch.

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{info, warn};

use crate::cache;
use crate::error::{AppError, Result};
use crate::normalize::keys::{resolve_f64, resolve_i64};
use crate::normalize::{
    entry_key_for_user, is_bestball_contest, normalize_contest, normalize_leaderboard,
    normalize_roster, parse_contest_listing,
};
use crate::pool::{build_player_pool_index, PlayerPoolIndex};
use crate::types::{MyData, Standing};

/// The listing page stores the contest key under `MegaContestId` for
/// best-ball, plain `ContestId` otherwise.
const LISTING_CONTEST_KEY: &[&str] = &["MegaContestId", "ContestId"];
const LISTING_WINNINGS: &[&str] = &["TokensWon"];

#[derive(Debug, Default)]
pub struct UpdateStats {
    pub contests: usize,
    pub skipped_non_bestball: usize,
    pub skipped_no_key: usize,
    pub skipped_leaderboards: usize,
    pub skipped_rosters: usize,
    pub skipped_pools: usize,
}

pub struct Updater {
    username: String,
    data_dir: PathBuf,
}

impl Updater {
    pub fn new(username: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self { username: username.into(), data_dir: data_dir.into() }
    }

    pub fn mycontests_path(&self) -> PathBuf {
        self.data_dir.join("mycontests.html")
    }

    pub fn leaderboard_path(&self, contest_key: i64) -> PathBuf {
        self.data_dir.join("leaderboards").join(format!("{contest_key}.json"))
    }

    pub fn roster_path(&self, entry_key: i64) -> PathBuf {
        self.data_dir.join("rosters").join(format!("{entry_key}.json"))
    }

    pub fn draftables_path(&self, draft_group_id: i64) -> PathBuf {
        self.data_dir.join(format!("draftables_{draft_group_id}.json"))
    }

    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join("mydata.json")
    }

    /// Raw live contests from the saved "my contests" page.
    /// A page without the contests variable is a setup problem, not data
    /// variance, so it is an error here.
    pub fn load_contests(&self) -> Result<Vec<Value>> {
        let html = std::fs::read_to_string(self.mycontests_path())?;
        parse_contest_listing(&html).ok_or_else(|| {
            AppError::MalformedInput("mycontests.html has no parseable contests variable".to_string())
        })
    }

    /// Walk every live best-ball contest and assemble standings plus the
    /// user's rosters, enriched through each draft group's player pool.
    pub fn build(&self) -> Result<(MyData, UpdateStats)> {
        let raw_contests = self.load_contests()?;
        let mut data = MyData::default();
        let mut stats = UpdateStats::default();
        // pool indexes loaded once per draft group for this run
        let mut pools: HashMap<i64, Option<PlayerPoolIndex>> = HashMap::new();

        for raw in &raw_contests {
            let contest = normalize_contest(raw);
            if !is_bestball_contest(&contest) {
                stats.skipped_non_bestball += 1;
                continue;
            }
            let Some(contest_key) = resolve_i64(raw, LISTING_CONTEST_KEY) else {
                warn!("listing contest has no contest key, skipping");
                stats.skipped_no_key += 1;
                continue;
            };

            let entry_key = match cache::load_json(&self.leaderboard_path(contest_key)) {
                Ok(lb) => {
                    let entries = normalize_leaderboard(&lb);
                    entry_key_for_user(&entries, &self.username)
                }
                Err(e) => {
                    warn!(contest_key, "could not load leaderboard: {e}");
                    stats.skipped_leaderboards += 1;
                    None
                }
            };

            if let Some(entry_key) = entry_key {
                match cache::load_json(&self.roster_path(entry_key)) {
                    Ok(raw_roster) => {
                        let pool = contest
                            .draft_group_id
                            .and_then(|dgid| self.pool_for(dgid, &mut pools, &mut stats));
                        data.rosters.extend(normalize_roster(&raw_roster, pool.as_ref()));
                    }
                    Err(e) => {
                        warn!(contest_key, entry_key, "could not load roster: {e}");
                        stats.skipped_rosters += 1;
                    }
                }
            }

            data.standings.push(Standing {
                contest_key: Some(contest_key),
                contest_name: contest.contest_name.clone().unwrap_or_default(),
                buy_in_amount: contest.buy_in_amount.unwrap_or(0.0),
                contest_size: contest.max_number_players,
                place: contest.results_rank,
                winnings: resolve_f64(raw, LISTING_WINNINGS).unwrap_or(0.0),
                points: contest.player_points,
                leader_points: contest.total_points_opp,
                entry_key,
            });
            stats.contests += 1;
        }

        info!(
            contests = stats.contests,
            skipped_non_bestball = stats.skipped_non_bestball,
            skipped_leaderboards = stats.skipped_leaderboards,
            skipped_rosters = stats.skipped_rosters,
            skipped_pools = stats.skipped_pools,
            "update complete"
        );
        Ok((data, stats))
    }

    /// Player-pool index for one draft group, loaded at most once per run.
    /// A missing or malformed draftables file degrades to un-enriched
    /// rosters rather than failing the batch.
    fn pool_for(
        &self,
        draft_group_id: i64,
        pools: &mut HashMap<i64, Option<PlayerPoolIndex>>,
        stats: &mut UpdateStats,
    ) -> Option<PlayerPoolIndex> {
        if let Some(cached) = pools.get(&draft_group_id) {
            return cached.clone();
        }
        let loaded = cache::load_json(&self.draftables_path(draft_group_id))
            .and_then(|raw| build_player_pool_index(&raw));
        let index = match loaded {
            Ok(index) => Some(index),
            Err(e) => {
                warn!(draft_group_id, "could not load player pool: {e}");
                stats.skipped_pools += 1;
                None
            }
        };
        pools.insert(draft_group_id, index.clone());
        index
    }
}
