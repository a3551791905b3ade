use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use serde_json::Value;

use crate::config::Config;
use crate::error::Result;

/// DraftKings API client. The site gates these endpoints behind the
/// browser session, so requests carry a browser-like header set and the
/// session cookie from config.
pub struct DkClient {
    http: reqwest::Client,
    api_url: String,
}

impl DkClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", HeaderValue::from_static("Mozilla/5.0 (X11; Linux x86_64)"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Origin", HeaderValue::from_static("https://www.draftkings.com"));
        headers.insert("Referer", HeaderValue::from_static("https://www.draftkings.com/"));
        if let Some(cookie) = &cfg.cookie {
            if let Ok(v) = HeaderValue::from_str(cookie) {
                headers.insert(COOKIE, v);
            }
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()?;

        Ok(Self { http, api_url: cfg.api_url.trim_end_matches('/').to_string() })
    }

    /// Leaderboard for one mega-contest.
    pub async fn contest_leaderboard(&self, contest_id: i64) -> Result<Value> {
        let url = format!("{}/scores/v1/megacontests/{contest_id}/leaderboard", self.api_url);
        self.get_json(&url, &[("format", "json"), ("embed", "leaderboard")]).await
    }

    /// Roster resource for one entry within a draft group.
    pub async fn contest_roster(&self, draft_group_id: i64, entry_key: i64) -> Result<Value> {
        let url = format!("{}/scores/v2/entries/{draft_group_id}/{entry_key}", self.api_url);
        self.get_json(&url, &[("format", "json"), ("embed", "roster")]).await
    }

    /// Draftables (player pool) for one draft group.
    pub async fn draftables(&self, draft_group_id: i64) -> Result<Value> {
        let url = format!(
            "{}/draftgroups/v1/draftgroups/{draft_group_id}/draftables",
            self.api_url
        );
        self.get_json(&url, &[("format", "json")]).await
    }

    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        let resp = self.http.get(url).query(params).send().await?;
        Ok(resp.error_for_status()?.json::<Value>().await?)
    }
}
