use std::collections::BTreeMap;

use crate::aggregate::{classify, round1};
use crate::types::{ContestType, FinancialRow, Standing};

#[derive(Debug, Default)]
struct Bucket {
    entries: usize,
    paid: f64,
    won: f64,
}

/// Entries/paid/won/ROI grouped by (contest type, buy-in).
///
/// The contest type is derived row-level from the contest name. Buy-ins
/// are keyed in integer cents so floats never act as map keys. Output is
/// sorted by contest type (declaration order) then buy-in ascending.
///
/// `roi = (won - paid) / paid * 100`, one decimal. A bucket with
/// `paid == 0` has no ROI (`None`) — free contests divide by zero and
/// must not panic or report 0.
pub fn financial_summary(standings: &[Standing]) -> Vec<FinancialRow> {
    let mut buckets: BTreeMap<(ContestType, i64), Bucket> = BTreeMap::new();

    for s in standings {
        let contest_type = classify::contest_type(&s.contest_name);
        let cents = (s.buy_in_amount * 100.0).round() as i64;
        let bucket = buckets.entry((contest_type, cents)).or_default();
        bucket.entries += 1;
        bucket.paid += s.buy_in_amount;
        bucket.won += s.winnings;
    }

    buckets
        .into_iter()
        .map(|((contest_type, cents), b)| FinancialRow {
            contest_type,
            buy_in_amount: cents as f64 / 100.0,
            entries: b.entries,
            paid: b.paid,
            won: b.won,
            roi: if b.paid == 0.0 {
                None
            } else {
                Some(round1((b.won - b.paid) / b.paid * 100.0))
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContestType;

    fn standing(name: &str, buy_in: f64, winnings: f64) -> Standing {
        Standing {
            contest_key: Some(1),
            contest_name: name.to_string(),
            buy_in_amount: buy_in,
            contest_size: None,
            place: None,
            winnings,
            points: None,
            leader_points: None,
            entry_key: None,
        }
    }

    #[test]
    fn roi_for_paid_100_won_150_is_50() {
        let rows = financial_summary(&[
            standing("NFL Best Ball $50 3-Player", 50.0, 75.0),
            standing("NFL Best Ball $50 3-Player", 50.0, 75.0),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].entries, 2);
        assert_eq!(rows[0].paid, 100.0);
        assert_eq!(rows[0].won, 150.0);
        assert_eq!(rows[0].roi, Some(50.0));
    }

    #[test]
    fn zero_paid_has_no_roi() {
        let rows = financial_summary(&[standing("Freeroll 3-Player", 0.0, 0.0)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].roi, None);
    }

    #[test]
    fn negative_roi_is_a_signed_percentage() {
        let rows = financial_summary(&[standing("NFL Best Ball $20 6-Player", 20.0, 5.0)]);
        assert_eq!(rows[0].roi, Some(-75.0));
    }

    #[test]
    fn groups_by_type_and_buy_in() {
        let rows = financial_summary(&[
            standing("NFL Best Ball $1 3-Player", 1.0, 0.0),
            standing("NFL Best Ball $5 3-Player", 5.0, 12.0),
            standing("NFL Best Ball $1 3-Player", 1.0, 2.5),
            standing("NFL Best Ball Tournament", 5.0, 0.0),
        ]);
        assert_eq!(rows.len(), 3);
        // tournament sorts first (declaration order), then 3-man by buy-in
        assert_eq!(rows[0].contest_type, ContestType::Tournament);
        assert_eq!(rows[1].contest_type, ContestType::ThreeMan);
        assert_eq!(rows[1].buy_in_amount, 1.0);
        assert_eq!(rows[1].entries, 2);
        assert_eq!(rows[1].paid, 2.0);
        assert_eq!(rows[1].won, 2.5);
        assert_eq!(rows[1].roi, Some(25.0));
        assert_eq!(rows[2].buy_in_amount, 5.0);
    }

    #[test]
    fn roi_rounds_to_one_decimal() {
        // (4 - 3) / 3 * 100 = 33.333... → 33.3
        let rows = financial_summary(&[standing("NFL Best Ball $3 12-Player", 3.0, 4.0)]);
        assert_eq!(rows[0].roi, Some(33.3));
    }
}
