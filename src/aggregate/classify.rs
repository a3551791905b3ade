use crate::types::ContestType;

/// Name substrings that mark a tournament-family contest. Tested before
/// the size markers: a name carrying both a tournament marker and a size
/// marker classifies as a tournament.
const TOURNAMENT_MARKERS: &[&str] = &["Tournament", "Millionaire", "Play-Action"];

/// Classify a contest name into its financial-summary contest type.
/// Order-sensitive, first match wins.
pub fn contest_type(name: &str) -> ContestType {
    if TOURNAMENT_MARKERS.iter().any(|m| name.contains(m)) {
        ContestType::Tournament
    } else if name.contains("12-Player") {
        ContestType::TwelveMan
    } else if name.contains("6-Player") {
        ContestType::SixMan
    } else if name.contains("3-Player") {
        ContestType::ThreeMan
    } else {
        ContestType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_markers_classify() {
        assert_eq!(contest_type("NFL Best Ball $1 12-Player (Sit + Go)"), ContestType::TwelveMan);
        assert_eq!(contest_type("NFL Best Ball $5 6-Player"), ContestType::SixMan);
        assert_eq!(contest_type("NFL Best Ball $5 3-Player"), ContestType::ThreeMan);
    }

    #[test]
    fn tournament_family_markers_classify() {
        assert_eq!(contest_type("NFL Best Ball Tournament"), ContestType::Tournament);
        assert_eq!(contest_type("NFL Best Ball Millionaire [$1M to 1st]"), ContestType::Tournament);
        assert_eq!(contest_type("NFL Best Ball Play-Action [$100K to 1st]"), ContestType::Tournament);
    }

    #[test]
    fn tournament_markers_take_precedence_over_size() {
        assert_eq!(
            contest_type("NFL Best Ball Tournament 3-Player"),
            ContestType::Tournament
        );
    }

    #[test]
    fn unrecognized_name_is_unknown() {
        assert_eq!(contest_type("NFL Classic $5 Double Up"), ContestType::Unknown);
        assert_eq!(contest_type(""), ContestType::Unknown);
    }
}
