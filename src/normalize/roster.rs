use serde_json::Value;
use tracing::warn;

use crate::normalize::keys::{as_i64_lenient, as_str_owned};
use crate::pool::PlayerPoolIndex;
use crate::types::RosterSlot;

/// Flatten one raw roster resource into per-player slots.
///
/// The resource nests a single entry object carrying draft metadata and a
/// scorecard list (one per drafted player) under `entries[0].roster.scorecards`.
/// Metadata is read once, then merged into each scorecard row. When a pool
/// index is supplied, the pool's fields are authoritative on name collision
/// (the scorecard's `displayName` is replaced by the pool's).
///
/// Slot order matches input scorecard order. A missing nested path logs a
/// warning and yields an empty vec — rosters for unfilled entries come back
/// without scorecards and must not abort a batch.
pub fn normalize_roster(raw: &Value, pool: Option<&PlayerPoolIndex>) -> Vec<RosterSlot> {
    let entry = match raw.get("entries").and_then(|e| e.get(0)) {
        Some(e) => e,
        None => {
            warn!("roster resource has no entries, skipping");
            return Vec::new();
        }
    };

    let scorecards = match entry
        .get("roster")
        .and_then(|r| r.get("scorecards"))
        .and_then(Value::as_array)
    {
        Some(cards) => cards,
        None => {
            warn!(
                draft_group_id = entry.get("draftGroupId").and_then(serde_json::Value::as_i64),
                entry_key = entry.get("entryKey").and_then(as_i64_lenient),
                "roster entry has no scorecards, skipping"
            );
            return Vec::new();
        }
    };

    // Draft metadata, built once per roster.
    let draft_group_id = entry.get("draftGroupId").and_then(as_i64_lenient);
    let contest_key = entry.get("contestKey").and_then(as_i64_lenient);
    let entry_key = entry.get("entryKey").and_then(as_i64_lenient);
    let lineup_id = entry.get("lineupId").and_then(as_i64_lenient);
    let user_name = entry.get("userName").and_then(as_str_owned);
    let user_key = entry.get("userKey").and_then(as_i64_lenient);

    scorecards
        .iter()
        .map(|card| {
            let draftable_id = card.get("draftableId").and_then(as_i64_lenient);
            let scorecard_name = card.get("displayName").and_then(as_str_owned);
            let enrichment = draftable_id.and_then(|id| pool.and_then(|p| p.get(&id)));

            let (display_name, player_id, player_dk_id, position, team_abbreviation) =
                match enrichment {
                    Some(player) => (
                        player.display_name.clone().or(scorecard_name),
                        player.player_id,
                        player.player_dk_id,
                        player.position.clone(),
                        player.team_abbreviation.clone(),
                    ),
                    None => (scorecard_name, None, None, None, None),
                };

            RosterSlot {
                draft_group_id,
                contest_key,
                entry_key,
                lineup_id,
                user_name: user_name.clone(),
                user_key,
                display_name,
                draftable_id,
                player_id,
                player_dk_id,
                position,
                team_abbreviation,
            }
        })
        .collect()
}
