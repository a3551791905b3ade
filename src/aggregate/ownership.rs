use std::collections::{BTreeMap, HashSet};

use tracing::warn;

use crate::aggregate::{classify, round1};
use crate::types::{ContestType, OwnershipRow, RosterSlot, Standing};

/// Player ownership across a set of roster slots.
///
/// Groups by (display_name, position, team_abbreviation) and counts slots
/// per group. The denominator `tot` is the count of distinct entry keys in
/// the whole input — ownership weights by entries, not contests, so
/// multi-entry contests count once per entry. `pct = n / tot * 100`
/// rounded to one decimal.
///
/// Rows sort by `pct` descending; ties keep the group key's ascending
/// order (stable sort over the ordered grouping). Slots without a display
/// name cannot be attributed and are skipped; an input with no entry keys
/// yields an empty table.
pub fn ownership(slots: &[RosterSlot]) -> Vec<OwnershipRow> {
    let tot = slots
        .iter()
        .filter_map(|s| s.entry_key)
        .collect::<HashSet<_>>()
        .len();
    if tot == 0 {
        if !slots.is_empty() {
            warn!("roster slots carry no entry keys, ownership table is empty");
        }
        return Vec::new();
    }

    // BTreeMap keeps the grouping key-ordered so the pct tie-break below
    // is deterministic.
    let mut groups: BTreeMap<(String, String, String), usize> = BTreeMap::new();
    for slot in slots {
        let Some(name) = slot.display_name.clone() else {
            continue;
        };
        let key = (
            name,
            slot.position.clone().unwrap_or_default(),
            slot.team_abbreviation.clone().unwrap_or_default(),
        );
        *groups.entry(key).or_default() += 1;
    }

    let mut rows: Vec<OwnershipRow> = groups
        .into_iter()
        .map(|((display_name, position, team_abbreviation), n)| OwnershipRow {
            display_name,
            position,
            team_abbreviation,
            n,
            tot,
            pct: round1(n as f64 / tot as f64 * 100.0),
        })
        .collect();
    rows.sort_by(|a, b| b.pct.total_cmp(&a.pct));
    rows
}

/// Ownership rows for one position above a percentage threshold
/// (strict inequality).
pub fn positional_ownership(rows: &[OwnershipRow], position: &str, threshold: f64) -> Vec<OwnershipRow> {
    rows.iter()
        .filter(|r| r.position == position && r.pct > threshold)
        .cloned()
        .collect()
}

/// Roster slots belonging to contests of one contest type, resolved
/// through the standings' contest names.
pub fn rosters_for_type(
    slots: &[RosterSlot],
    standings: &[Standing],
    contest_type: ContestType,
) -> Vec<RosterSlot> {
    let keys: HashSet<i64> = standings
        .iter()
        .filter(|s| classify::contest_type(&s.contest_name) == contest_type)
        .filter_map(|s| s.contest_key)
        .collect();
    slots
        .iter()
        .filter(|s| s.contest_key.is_some_and(|k| keys.contains(&k)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(entry_key: i64, name: &str, position: &str, team: &str) -> RosterSlot {
        RosterSlot {
            draft_group_id: Some(1),
            contest_key: Some(entry_key / 100),
            entry_key: Some(entry_key),
            lineup_id: Some(-1),
            user_name: Some("me".to_string()),
            user_key: Some(7),
            display_name: Some(name.to_string()),
            draftable_id: Some(1000),
            player_id: None,
            player_dk_id: None,
            position: Some(position.to_string()),
            team_abbreviation: Some(team.to_string()),
        }
    }

    #[test]
    fn counts_slots_per_player_and_distinct_entries() {
        // 3 entries; Kamara rostered in 2, Newton in all 3
        let slots = vec![
            slot(100, "Cam Newton", "QB", "NE"),
            slot(100, "Alvin Kamara", "RB", "NO"),
            slot(200, "Cam Newton", "QB", "NE"),
            slot(200, "Alvin Kamara", "RB", "NO"),
            slot(300, "Cam Newton", "QB", "NE"),
        ];
        let rows = ownership(&slots);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].display_name, "Cam Newton");
        assert_eq!(rows[0].n, 3);
        assert_eq!(rows[0].tot, 3);
        assert_eq!(rows[0].pct, 100.0);
        assert_eq!(rows[1].display_name, "Alvin Kamara");
        assert_eq!(rows[1].n, 2);
        assert_eq!(rows[1].pct, 66.7);
    }

    #[test]
    fn denominator_is_entries_not_rows() {
        // one entry with a 2-player roster: tot must be 1, not 2
        let slots = vec![
            slot(100, "Cam Newton", "QB", "NE"),
            slot(100, "Alvin Kamara", "RB", "NO"),
        ];
        let rows = ownership(&slots);
        assert!(rows.iter().all(|r| r.tot == 1));
        assert!(rows.iter().all(|r| r.pct == 100.0));
    }

    #[test]
    fn ownership_sums_match_roster_sizes() {
        let slots = vec![
            slot(100, "A", "QB", "X"),
            slot(100, "B", "RB", "Y"),
            slot(100, "C", "WR", "Z"),
            slot(200, "A", "QB", "X"),
        ];
        let rows = ownership(&slots);
        let total_n: usize = rows.iter().map(|r| r.n).sum();
        assert_eq!(total_n, slots.len());
    }

    #[test]
    fn ties_keep_group_key_order() {
        let slots = vec![
            slot(100, "Zeke Elliott", "RB", "DAL"),
            slot(200, "Aaron Jones", "RB", "GB"),
        ];
        let rows = ownership(&slots);
        assert_eq!(rows[0].pct, rows[1].pct);
        assert_eq!(rows[0].display_name, "Aaron Jones");
        assert_eq!(rows[1].display_name, "Zeke Elliott");
    }

    #[test]
    fn nameless_slots_skipped_and_no_entries_is_empty() {
        let mut nameless = slot(100, "A", "QB", "X");
        nameless.display_name = None;
        let rows = ownership(&[nameless.clone(), slot(100, "B", "RB", "Y")]);
        assert_eq!(rows.len(), 1);

        let mut keyless = slot(100, "A", "QB", "X");
        keyless.entry_key = None;
        assert!(ownership(&[keyless]).is_empty());
    }

    #[test]
    fn positional_filter_is_strict() {
        let rows = vec![
            OwnershipRow {
                display_name: "A".into(), position: "QB".into(), team_abbreviation: "X".into(),
                n: 2, tot: 20, pct: 10.0,
            },
            OwnershipRow {
                display_name: "B".into(), position: "QB".into(), team_abbreviation: "Y".into(),
                n: 3, tot: 20, pct: 15.0,
            },
            OwnershipRow {
                display_name: "C".into(), position: "RB".into(), team_abbreviation: "Z".into(),
                n: 4, tot: 20, pct: 20.0,
            },
        ];
        let qb = positional_ownership(&rows, "QB", 10.0);
        // pct == threshold is excluded
        assert_eq!(qb.len(), 1);
        assert_eq!(qb[0].display_name, "B");
    }

    #[test]
    fn filters_rosters_by_contest_type() {
        let standings = vec![
            Standing {
                contest_key: Some(1),
                contest_name: "NFL Best Ball Tournament".to_string(),
                buy_in_amount: 5.0,
                contest_size: None,
                place: None,
                winnings: 0.0,
                points: None,
                leader_points: None,
                entry_key: Some(100),
            },
            Standing {
                contest_key: Some(2),
                contest_name: "NFL Best Ball $1 3-Player".to_string(),
                buy_in_amount: 1.0,
                contest_size: None,
                place: None,
                winnings: 0.0,
                points: None,
                leader_points: None,
                entry_key: Some(200),
            },
        ];
        let mut a = slot(100, "A", "QB", "X");
        a.contest_key = Some(1);
        let mut b = slot(200, "B", "RB", "Y");
        b.contest_key = Some(2);

        let filtered = rosters_for_type(&[a, b], &standings, ContestType::Tournament);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].contest_key, Some(1));
    }
}
