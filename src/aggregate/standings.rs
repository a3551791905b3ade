use std::collections::BTreeMap;

use crate::aggregate::round2;
use crate::config::contest_code_pattern;
use crate::error::{AppError, Result};
use crate::types::{Standing, StandingsRow};

/// Placement distribution for one contest-type code.
///
/// `code` is a short type code (`3m`, `6m`, `12m`, `pa`, `m`, `t`)
/// resolved to a contest-name substring through the constant code table;
/// an unknown code is a caller error. Standings whose name matches are
/// bucketed by finishing place: `n_teams` per place and
/// `pct = n_teams / total` as a two-decimal fraction, where `total` is
/// the size of the filtered set — rows with no recorded place count in
/// the total but produce no distribution row. Sorted by ascending place.
pub fn standings_summary(standings: &[Standing], code: &str) -> Result<Vec<StandingsRow>> {
    let pattern = contest_code_pattern(code)
        .ok_or_else(|| AppError::MalformedInput(format!("unknown contest type code: {code}")))?;

    let filtered: Vec<&Standing> = standings
        .iter()
        .filter(|s| s.contest_name.contains(pattern))
        .collect();
    let total = filtered.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    let mut places: BTreeMap<i64, usize> = BTreeMap::new();
    for s in &filtered {
        if let Some(place) = s.place {
            *places.entry(place).or_default() += 1;
        }
    }

    Ok(places
        .into_iter()
        .map(|(place, n_teams)| StandingsRow {
            place,
            n_teams,
            pct: round2(n_teams as f64 / total as f64),
        })
        .collect())
}
