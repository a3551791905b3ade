//! Best-ball contest tracker: normalizes raw DraftKings contest,
//! leaderboard, roster, and player-pool JSON into flat records and
//! aggregates them into ownership, financial, and standings reports.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod pool;
pub mod types;
pub mod updater;
