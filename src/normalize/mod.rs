//! Record normalizer: raw per-contest JSON blobs into flat records.

pub mod contest;
pub mod keys;
pub mod leaderboard;
pub mod listing;
pub mod roster;

pub use contest::{filter_contests_by_size, is_bestball_contest, normalize_contest};
pub use leaderboard::{entry_key_for_user, normalize_leaderboard};
pub use listing::parse_contest_listing;
pub use roster::normalize_roster;
