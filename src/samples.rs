//! Example rosters bundled with the crate.
//!
//! A small club roster and a race results file covering nickname variants,
//! accented names, hyphenated surnames, a missing first name, namesakes in
//! different cities, and a few results that belong to no member.

const SAMPLE_MEMBERS: &str = include_str!("../data/sample_members.tsv");
const SAMPLE_RESULTS: &str = include_str!("../data/sample_results.tsv");

/// Tab-separated `first`, `last`, `city` member roster with a header line
#[must_use]
pub fn sample_members() -> &'static str {
    SAMPLE_MEMBERS
}

/// Tab-separated race results: bib, name, city, gender, division, time
#[must_use]
pub fn sample_results() -> &'static str {
    SAMPLE_RESULTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::engine::{MatchingConfig, MatchingEngine};
    use crate::parsing::roster::{parse_members_text, parse_results_text};

    #[test]
    fn test_sample_rosters_parse() {
        let members = parse_members_text(sample_members());
        assert!(members.stats.header_skipped);
        assert_eq!(members.len(), 20);
        assert_eq!(members.stats.malformed, 0);

        let results = parse_results_text(sample_results());
        assert!(results.stats.header_skipped);
        assert_eq!(results.len(), 22);
        assert_eq!(results.stats.malformed, 1);
    }

    #[test]
    fn test_sample_run() {
        let report = MatchingEngine::default().run(sample_members(), sample_results());
        assert_eq!(report.matches.len(), 19);

        let unmatched: Vec<&str> = report
            .unmatched_members
            .iter()
            .map(|m| m.full_name.as_str())
            .collect();
        assert_eq!(unmatched, ["John Doe"]);

        let unmatched: Vec<&str> = report
            .unmatched_results
            .iter()
            .map(|r| r.name_as_recorded.as_str())
            .collect();
        assert_eq!(unmatched, ["Alice Walker", "Jane Roe", "Kevin Park"]);
    }

    #[test]
    fn test_sample_namesakes_resolved_by_city() {
        let engine = MatchingEngine::new(MatchingConfig {
            include_city: true,
            ..MatchingConfig::default()
        });
        let report = engine.run(sample_members(), sample_results());

        let browns: Vec<(&str, &str)> = report
            .matches
            .iter()
            .filter(|m| m.member.full_name == "Michael Brown")
            .map(|m| {
                (
                    m.member.city.as_deref().unwrap_or_default(),
                    m.result.city.as_deref().unwrap_or_default(),
                )
            })
            .collect();
        assert_eq!(browns.len(), 2);
        assert!(browns.iter().all(|(member, result)| member == result));
    }
}
