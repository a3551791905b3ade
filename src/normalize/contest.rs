use serde_json::Value;

use crate::config::BESTBALL_GAME_TYPE_ID;
use crate::types::{ClockType, Contest, ContestFormat};

/// Flatten one raw contest object into a [`Contest`].
///
/// Extracts a fixed field whitelist; any whitelisted key absent from `raw`
/// yields `None` rather than an error. `clock_type` and `contest_format`
/// are derived from the contest name.
pub fn normalize_contest(raw: &Value) -> Contest {
    let contest_name = raw.get("ContestName").and_then(|v| v.as_str()).map(String::from);
    let clock_type = contest_name.as_deref().map(ClockType::from_contest_name);
    let contest_format = contest_name.as_deref().map(ContestFormat::from_contest_name);

    Contest {
        contest_id: raw.get("ContestId").and_then(Value::as_i64),
        contest_name,
        buy_in_amount: raw.get("BuyInAmount").and_then(Value::as_f64),
        max_number_players: raw.get("MaxNumberPlayers").and_then(Value::as_i64),
        draft_group_id: raw.get("DraftGroupId").and_then(Value::as_i64),
        game_type_id: raw.get("GameTypeId").and_then(Value::as_i64),
        top_payout: raw.get("TopPayout").and_then(Value::as_f64),
        user_contest_id: raw.get("UserContestId").and_then(Value::as_i64),
        results_rank: raw.get("ResultsRank").and_then(Value::as_i64),
        total_points_opp: raw.get("TotalPointsOpp").and_then(Value::as_f64),
        username_opp: raw.get("UsernameOpp").and_then(|v| v.as_str()).map(String::from),
        player_points: raw.get("PlayerPoints").and_then(Value::as_f64),
        clock_type,
        contest_format,
    }
}

/// Best-ball contests carry a fixed game type id.
pub fn is_bestball_contest(contest: &Contest) -> bool {
    contest.game_type_id == Some(BESTBALL_GAME_TYPE_ID)
}

/// Keep only contests of one sit-and-go size, e.g. `size=3` → "3-Player".
pub fn filter_contests_by_size<'a>(contests: &'a [Contest], size: i64) -> Vec<&'a Contest> {
    let marker = format!("{size}-Player");
    contests
        .iter()
        .filter(|c| c.contest_name.as_deref().is_some_and(|n| n.contains(&marker)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_contest() -> Value {
        json!({
            "ContestId": 89460375,
            "ContestName": "NFL Best Ball $1 12-Player (Sit + Go)",
            "BuyInAmount": 1.0,
            "MaxNumberPlayers": 12,
            "DraftGroupId": 37605,
            "GameTypeId": 145,
            "TopPayout": 10.0,
            "UserContestId": 2271705961i64,
            "ResultsRank": 3,
            "TotalPointsOpp": 1012.5,
            "UsernameOpp": "leader1",
            "PlayerPoints": 980.2,
            "IrrelevantField": "ignored"
        })
    }

    #[test]
    fn whitelist_fields_extracted() {
        let c = normalize_contest(&raw_contest());
        assert_eq!(c.contest_id, Some(89460375));
        assert_eq!(
            c.contest_name.as_deref(),
            Some("NFL Best Ball $1 12-Player (Sit + Go)")
        );
        assert_eq!(c.buy_in_amount, Some(1.0));
        assert_eq!(c.max_number_players, Some(12));
        assert_eq!(c.draft_group_id, Some(37605));
        assert_eq!(c.game_type_id, Some(145));
        assert_eq!(c.results_rank, Some(3));
        assert_eq!(c.username_opp.as_deref(), Some("leader1"));
    }

    #[test]
    fn missing_fields_become_none() {
        let c = normalize_contest(&json!({"ContestId": 1}));
        assert_eq!(c.contest_id, Some(1));
        assert!(c.contest_name.is_none());
        assert!(c.buy_in_amount.is_none());
        assert!(c.clock_type.is_none());
        assert!(c.contest_format.is_none());
    }

    #[test]
    fn clock_type_derived_from_name() {
        let slow = normalize_contest(&json!({"ContestName": "NFL Best Ball Slow Draft $5"}));
        assert_eq!(slow.clock_type, Some(ClockType::Slow));

        let fast = normalize_contest(&raw_contest());
        assert_eq!(fast.clock_type, Some(ClockType::Fast));
    }

    #[test]
    fn contest_format_derived_from_name() {
        let t = normalize_contest(&json!({"ContestName": "NFL Best Ball Tournament"}));
        assert_eq!(t.contest_format, Some(ContestFormat::Tournament));

        let sng = normalize_contest(&raw_contest());
        assert_eq!(sng.contest_format, Some(ContestFormat::SitAndGo));
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = raw_contest();
        assert_eq!(normalize_contest(&raw), normalize_contest(&raw));
    }

    #[test]
    fn bestball_gametype_check() {
        assert!(is_bestball_contest(&normalize_contest(&raw_contest())));
        assert!(!is_bestball_contest(&normalize_contest(
            &json!({"GameTypeId": 1})
        )));
        assert!(!is_bestball_contest(&normalize_contest(&json!({}))));
    }

    #[test]
    fn size_filter_matches_name_marker() {
        let contests = vec![
            normalize_contest(&json!({"ContestName": "NFL Best Ball $1 3-Player"})),
            normalize_contest(&json!({"ContestName": "NFL Best Ball $1 12-Player"})),
            normalize_contest(&json!({"ContestId": 3})),
        ];
        let threes = filter_contests_by_size(&contests, 3);
        assert_eq!(threes.len(), 1);
        assert_eq!(
            threes[0].contest_name.as_deref(),
            Some("NFL Best Ball $1 3-Player")
        );
    }
}
