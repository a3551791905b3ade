use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Contest
// ---------------------------------------------------------------------------

/// Draft clock speed, derived from the contest name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockType {
    Slow,
    Fast,
}

impl ClockType {
    /// `"Slow Draft"` in the contest name (case-sensitive) means a slow clock.
    pub fn from_contest_name(name: &str) -> Self {
        if name.contains("Slow Draft") {
            ClockType::Slow
        } else {
            ClockType::Fast
        }
    }
}

impl std::fmt::Display for ClockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockType::Slow => write!(f, "slow"),
            ClockType::Fast => write!(f, "fast"),
        }
    }
}

/// Tournament vs. sit-and-go, derived from the contest name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContestFormat {
    Tournament,
    SitAndGo,
}

impl ContestFormat {
    pub fn from_contest_name(name: &str) -> Self {
        if name.contains("Tournament") {
            ContestFormat::Tournament
        } else {
            ContestFormat::SitAndGo
        }
    }
}

impl std::fmt::Display for ContestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContestFormat::Tournament => write!(f, "tournament"),
            ContestFormat::SitAndGo => write!(f, "sit_and_go"),
        }
    }
}

/// Flat contest record. Whitelisted fields copied from the raw contest
/// object; any field the source omits is `None`. The derived fields
/// (`clock_type`, `contest_format`) are pure functions of the contest name
/// and are `None` only when the name itself is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub contest_id: Option<i64>,
    pub contest_name: Option<String>,
    pub buy_in_amount: Option<f64>,
    pub max_number_players: Option<i64>,
    pub draft_group_id: Option<i64>,
    pub game_type_id: Option<i64>,
    pub top_payout: Option<f64>,
    // User-result fields, copied through verbatim when present. These
    // overlap with leaderboard data (contest leader, your own entry).
    pub user_contest_id: Option<i64>,
    pub results_rank: Option<i64>,
    pub total_points_opp: Option<f64>,
    pub username_opp: Option<String>,
    pub player_points: Option<f64>,
    pub clock_type: Option<ClockType>,
    pub contest_format: Option<ContestFormat>,
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// One ranked entry in a contest leaderboard. All fields are optional
/// because the remote API drops fields freely across contest-type families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_name: Option<String>,
    pub user_key: Option<i64>,
    pub rank: Option<i64>,
    pub fantasy_points: Option<f64>,
    pub contest_key: Option<i64>,
    pub entry_key: Option<i64>,
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// One drafted player within one entry. The rows sharing
/// `(contest_key, entry_key)` form that user's full roster for the contest.
/// `player_id` through `team_abbreviation` come from the player-pool join
/// and are `None` when no pool was supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub draft_group_id: Option<i64>,
    pub contest_key: Option<i64>,
    pub entry_key: Option<i64>,
    pub lineup_id: Option<i64>,
    pub user_name: Option<String>,
    pub user_key: Option<i64>,
    pub display_name: Option<String>,
    pub draftable_id: Option<i64>,
    pub player_id: Option<i64>,
    pub player_dk_id: Option<i64>,
    pub position: Option<String>,
    pub team_abbreviation: Option<String>,
}

// ---------------------------------------------------------------------------
// Player pool
// ---------------------------------------------------------------------------

/// Player identity/display fields used to enrich roster slots.
/// Does not carry the `draftable_id` key itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub player_id: Option<i64>,
    pub player_dk_id: Option<i64>,
    pub display_name: Option<String>,
    pub position: Option<String>,
    pub team_abbreviation: Option<String>,
}

/// One draftable player in a draft group's pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPoolEntry {
    pub draftable_id: i64,
    pub player: PlayerCard,
}

// ---------------------------------------------------------------------------
// Standings
// ---------------------------------------------------------------------------

/// The tracked user's result in one contest, assembled by the updater from
/// the contest listing and that contest's leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub contest_key: Option<i64>,
    pub contest_name: String,
    pub buy_in_amount: f64,
    pub contest_size: Option<i64>,
    pub place: Option<i64>,
    pub winnings: f64,
    pub points: Option<f64>,
    pub leader_points: Option<f64>,
    /// The user's own entry key in this contest.
    pub entry_key: Option<i64>,
}

// ---------------------------------------------------------------------------
// Financial classification
// ---------------------------------------------------------------------------

/// Contest-type label used by the financial summary, derived from the
/// contest name. `Ord` follows declaration order so grouped output is
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContestType {
    Tournament,
    TwelveMan,
    SixMan,
    ThreeMan,
    Unknown,
}

impl std::fmt::Display for ContestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContestType::Tournament => "Tournament",
            ContestType::TwelveMan => "12-Man",
            ContestType::SixMan => "6-Man",
            ContestType::ThreeMan => "3-Man",
            ContestType::Unknown => "Unknown",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Derived report rows
// ---------------------------------------------------------------------------

/// Player ownership across a set of rosters. `tot` counts distinct entry
/// keys (entries, not contests); `pct` is `n / tot * 100` to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipRow {
    pub display_name: String,
    pub position: String,
    pub team_abbreviation: String,
    pub n: usize,
    pub tot: usize,
    pub pct: f64,
}

/// Entries/paid/won/ROI for one (contest type, buy-in) bucket.
/// `roi` is `None` when nothing was paid — free contests have no ROI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRow {
    pub contest_type: ContestType,
    pub buy_in_amount: f64,
    pub entries: usize,
    pub paid: f64,
    pub won: f64,
    pub roi: Option<f64>,
}

/// Placement distribution row. `pct` is the fraction `n_teams / total`
/// over the filtered standings set, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub place: i64,
    pub n_teams: usize,
    pub pct: f64,
}

// ---------------------------------------------------------------------------
// Cache payload
// ---------------------------------------------------------------------------

/// Everything the report binary needs, persisted as one JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MyData {
    pub standings: Vec<Standing>,
    pub rosters: Vec<RosterSlot>,
}
