//! Player-pool build and join index.
//!
//! A draft group's pool is loaded once, read-only, and consumed as a
//! `draftable_id` lookup by the roster normalizer.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::error::{AppError, Result};
use crate::normalize::keys::{as_i64_lenient, as_str_owned};
use crate::types::{PlayerCard, PlayerPoolEntry};

/// Enrichment lookup keyed by `draftable_id`.
pub type PlayerPoolIndex = HashMap<i64, PlayerCard>;

/// Build the flat player pool from a raw draftables resource.
///
/// Errors when `raw` is not an object carrying a `draftables` array — that
/// is a caller contract violation, not expected data variance. Items
/// missing their `draftableId` cannot be joined and are skipped with a
/// warning.
pub fn build_player_pool(raw: &Value) -> Result<Vec<PlayerPoolEntry>> {
    let items = raw
        .as_object()
        .and_then(|o| o.get("draftables"))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AppError::MalformedInput("draftables resource is not an object with a draftables list".to_string())
        })?;

    let mut pool = Vec::with_capacity(items.len());
    for item in items {
        let Some(draftable_id) = item.get("draftableId").and_then(as_i64_lenient) else {
            warn!("draftable without draftableId skipped");
            continue;
        };
        pool.push(PlayerPoolEntry {
            draftable_id,
            player: PlayerCard {
                player_id: item.get("playerId").and_then(as_i64_lenient),
                player_dk_id: item.get("playerDkId").and_then(as_i64_lenient),
                display_name: item.get("displayName").and_then(as_str_owned),
                position: item.get("position").and_then(as_str_owned),
                team_abbreviation: item.get("teamAbbreviation").and_then(as_str_owned),
            },
        });
    }
    Ok(pool)
}

/// Build the `draftable_id` → player lookup consumed by
/// [`crate::normalize::normalize_roster`]. Values exclude the key field.
pub fn build_player_pool_index(raw: &Value) -> Result<PlayerPoolIndex> {
    Ok(build_player_pool(raw)?
        .into_iter()
        .map(|entry| (entry.draftable_id, entry.player))
        .collect())
}
