//! Aggregate reports over normalized records: ownership, financial
//! summary, standings distributions.

pub mod classify;
pub mod financial;
pub mod ownership;
pub mod standings;

pub use classify::contest_type;
pub use financial::financial_summary;
pub use ownership::{ownership, positional_ownership, rosters_for_type};
pub use standings::standings_summary;

/// Round to one decimal, half away from zero (`f64::round` semantics).
/// All percentage fields use this unless noted otherwise.
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to two decimals, half away from zero. Used by standings `pct`.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
