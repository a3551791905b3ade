use std::path::PathBuf;

use crate::error::{AppError, Result};

pub const API_URL: &str = "https://api.draftkings.com";

/// GameTypeId DraftKings assigns to NFL best-ball contests.
pub const BESTBALL_GAME_TYPE_ID: i64 = 145;

/// Short contest-type codes accepted by standings reports, mapped to the
/// contest-name substring that identifies the type.
pub const CONTEST_CODES: &[(&str, &str)] = &[
    ("3m", "3-Player"),
    ("6m", "6-Player"),
    ("12m", "12-Player"),
    ("pa", "Action"),
    ("m", "Millionaire"),
    ("t", "Tournament"),
];

/// Resolve a standings contest-type code to its name substring.
pub fn contest_code_pattern(code: &str) -> Option<&'static str> {
    CONTEST_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, pattern)| pattern)
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding mycontests.html, leaderboards/, rosters/,
    /// draftables_{id}.json and the mydata.json cache.
    pub data_dir: PathBuf,
    /// DraftKings username whose entries are tracked.
    pub username: String,
    pub api_url: String,
    /// Session cookie string for api.draftkings.com. When unset, the tracker
    /// skips the fetch step and only re-parses files already on disk.
    pub cookie: Option<String>,
    pub log_level: String,
    /// Whether the fetch step also pulls rosters (one request per entry).
    pub fetch_rosters: bool,
    /// Delay between API requests (milliseconds).
    pub fetch_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .map_err(|_| AppError::Config("DATA_DIR must be set".to_string()))?,
            username: std::env::var("DK_USERNAME")
                .map_err(|_| AppError::Config("DK_USERNAME must be set".to_string()))?,
            api_url: std::env::var("DK_API_URL").unwrap_or_else(|_| API_URL.to_string()),
            cookie: std::env::var("DK_COOKIE").ok().filter(|s| !s.is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            fetch_rosters: std::env::var("FETCH_ROSTERS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            fetch_delay_ms: std::env::var("FETCH_DELAY_MS")
                .unwrap_or_else(|_| "100".to_string())
                .parse::<u64>()
                .unwrap_or(100),
        })
    }
}
