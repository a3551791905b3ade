use serde_json::Value;
use tracing::warn;

use crate::normalize::keys;
use crate::types::LeaderboardEntry;

/// Flatten a raw leaderboard envelope into entry records.
///
/// The entrant list lives under `"Leaderboard"` or `"leaderBoard"`
/// depending on the contest-type family, and entrant field casing varies
/// the same way; both shapes resolve through the candidate tables in
/// [`keys`]. `contest_key`/`entry_key` are taken from the entrant when
/// present there, falling back to the envelope.
///
/// A missing entrant list logs a warning and yields an empty vec —
/// partial pulls must not abort a batch.
pub fn normalize_leaderboard(raw: &Value) -> Vec<LeaderboardEntry> {
    let entrants = match keys::resolve(raw, keys::LEADERBOARD).and_then(Value::as_array) {
        Some(list) => list,
        None => {
            warn!("leaderboard envelope has no entrant list, skipping");
            return Vec::new();
        }
    };

    entrants
        .iter()
        .map(|item| LeaderboardEntry {
            user_name: keys::resolve_str(item, keys::USER_NAME),
            user_key: keys::resolve_i64(item, keys::USER_KEY),
            rank: keys::resolve_i64(item, keys::RANK),
            fantasy_points: keys::resolve_f64(item, keys::FANTASY_POINTS),
            contest_key: keys::resolve_i64(item, keys::CONTEST_KEY)
                .or_else(|| keys::resolve_i64(raw, keys::CONTEST_KEY)),
            entry_key: keys::resolve_i64(item, keys::ENTRY_KEY)
                .or_else(|| keys::resolve_i64(raw, keys::ENTRY_KEY)),
        })
        .collect()
}

/// The given user's entry key within a leaderboard.
pub fn entry_key_for_user(entries: &[LeaderboardEntry], username: &str) -> Option<i64> {
    entries
        .iter()
        .find(|e| e.user_name.as_deref() == Some(username))
        .and_then(|e| e.entry_key)
}
