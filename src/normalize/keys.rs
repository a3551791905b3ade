//! Dual-cased field resolution.
//!
//! The remote API changed key casing between contest-type families
//! (`UserName` vs `userName`, `MegaContestKey` vs `contestKey`). Each
//! logical field declares an ordered candidate list here and is resolved
//! once through [`resolve`] — first candidate present wins.

use serde_json::Value;

pub const LEADERBOARD: &[&str] = &["Leaderboard", "leaderBoard"];
pub const USER_NAME: &[&str] = &["UserName", "userName"];
pub const USER_KEY: &[&str] = &["UserKey", "userKey"];
pub const RANK: &[&str] = &["Rank", "rank"];
pub const FANTASY_POINTS: &[&str] = &["FantasyPoints", "fantasyPoints"];
pub const CONTEST_KEY: &[&str] = &["MegaContestKey", "contestKey"];
pub const ENTRY_KEY: &[&str] = &["MegaEntryKey", "entryKey"];

/// Returns the value under the first candidate key present in `obj`.
/// `None` when no candidate is present or `obj` is not an object —
/// API shape drift is expected and degrades to a missing field.
pub fn resolve<'a>(obj: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    let map = obj.as_object()?;
    candidates.iter().find_map(|k| map.get(*k))
}

/// Integer field that may arrive as a JSON number or a numeric string
/// (entry and contest keys come back as strings on some endpoints).
pub fn as_i64_lenient(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Float field that may arrive as a JSON number or a numeric string.
pub fn as_f64_lenient(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub fn as_str_owned(v: &Value) -> Option<String> {
    v.as_str().map(|s| s.to_string())
}

/// Resolve + coerce shorthands used by the normalizers.
pub fn resolve_i64(obj: &Value, candidates: &[&str]) -> Option<i64> {
    resolve(obj, candidates).and_then(as_i64_lenient)
}

pub fn resolve_f64(obj: &Value, candidates: &[&str]) -> Option<f64> {
    resolve(obj, candidates).and_then(as_f64_lenient)
}

pub fn resolve_str(obj: &Value, candidates: &[&str]) -> Option<String> {
    resolve(obj, candidates).and_then(as_str_owned)
}
