//! Rendering of a matching run.
//!
//! Three renderings of the same [`Report`]:
//!
//! - **Text** ([`Report::to_text`]): the line-oriented contract consumed by callers
//! - **TSV** ([`Report::to_tsv`]): one row per record with a `section` column
//! - **JSON** ([`Report::to_json`]): the full report including parse stats
//!
//! ## Text contract
//!
//! ```text
//! # matches: 1
//! 0.6500	nickname	agree	William Smith (Springfield)	Bill Smith (Springfield)
//! # unmatched members: 1
//! John Doe (Capital City)
//! # unmatched results: 1
//! Jane Roe (Other Town)
//! ```
//!
//! Every record is exactly one line and every line ends with `\n`. Section
//! headers start with `# ` and are always present. Echoed roster text never
//! contains tabs, line breaks, or the pilcrow (`¶`), so a caller may use `¶`
//! as a pagination marker and treat every `\n` as a record boundary.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::core::record::{MemberRecord, ResultRecord, RosterEntry};
use crate::core::roster::{MemberRoster, ParseStats, ResultRoster};
use crate::matching::engine::MatchResult;

/// Character reserved for caller-side pagination
pub const PAGINATION_MARKER: char = '\u{00B6}';

const TSV_COLUMNS: &[&str] = &[
    "section",
    "confidence",
    "match_kind",
    "city_agreement",
    "member_line",
    "member_name",
    "member_city",
    "result_line",
    "result_name",
    "result_city",
];

/// Outcome of one matching run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Accepted matches, in assignment order
    pub matches: Vec<MatchResult>,

    /// Members with no accepted match, in roster order
    pub unmatched_members: Vec<MemberRecord>,

    /// Results with no accepted match, in roster order
    pub unmatched_results: Vec<ResultRecord>,

    pub member_stats: ParseStats,

    pub result_stats: ParseStats,

    /// Candidate pairs produced by surname blocking, before scoring
    pub candidate_count: usize,
}

impl Report {
    #[must_use]
    pub fn new(
        matches: Vec<MatchResult>,
        members: &MemberRoster,
        results: &ResultRoster,
        candidate_count: usize,
    ) -> Self {
        let claimed_members: HashSet<usize> =
            matches.iter().map(|m| m.pair.member_index()).collect();
        let claimed_results: HashSet<usize> =
            matches.iter().map(|m| m.pair.result_index()).collect();

        Self {
            unmatched_members: unclaimed(&members.records, &claimed_members),
            unmatched_results: unclaimed(&results.records, &claimed_results),
            matches,
            member_stats: members.stats,
            result_stats: results.stats,
            candidate_count,
        }
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn to_tsv(&self) -> String {
        TsvReport(self).to_string()
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn unclaimed<R: RosterEntry + Clone>(records: &[R], claimed: &HashSet<usize>) -> Vec<R> {
    records
        .iter()
        .filter(|r| !claimed.contains(&r.source_index()))
        .cloned()
        .collect()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# matches: {}", self.matches.len())?;
        for m in &self.matches {
            writeln!(
                f,
                "{:.4}\t{}\t{}\t{}\t{}",
                m.pair.confidence,
                m.pair.match_kind(),
                m.pair.city_agreement,
                display_entry(&m.member),
                display_entry(&m.result),
            )?;
        }

        writeln!(f, "# unmatched members: {}", self.unmatched_members.len())?;
        for member in &self.unmatched_members {
            writeln!(f, "{}", display_entry(member))?;
        }

        writeln!(f, "# unmatched results: {}", self.unmatched_results.len())?;
        for result in &self.unmatched_results {
            writeln!(f, "{}", display_entry(result))?;
        }
        Ok(())
    }
}

struct TsvReport<'a>(&'a Report);

impl fmt::Display for TsvReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TSV_COLUMNS.join("\t"))?;
        for m in &self.0.matches {
            writeln!(
                f,
                "match\t{:.4}\t{}\t{}\t{}\t{}",
                m.pair.confidence,
                m.pair.match_kind(),
                m.pair.city_agreement,
                tsv_columns(&m.member),
                tsv_columns(&m.result),
            )?;
        }
        for member in &self.0.unmatched_members {
            writeln!(f, "unmatched_member\t\t\t\t{}\t\t\t", tsv_columns(member))?;
        }
        for result in &self.0.unmatched_results {
            writeln!(f, "unmatched_result\t\t\t\t\t\t\t{}", tsv_columns(result))?;
        }
        Ok(())
    }
}

fn tsv_columns(entry: &dyn RosterEntry) -> String {
    format!(
        "{}\t{}\t{}",
        entry.line_number(),
        sanitize(entry.name()),
        entry.city().map(sanitize).unwrap_or_default()
    )
}

/// `Name` or `Name (City)`
fn display_entry(entry: &dyn RosterEntry) -> String {
    let name = sanitize(entry.name());
    match entry.city().map(sanitize) {
        Some(city) if !city.is_empty() => format!("{name} ({city})"),
        _ => name,
    }
}

/// Treat characters with meaning in the output layout as spaces, then
/// collapse and trim whitespace
fn sanitize(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == PAGINATION_MARKER)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::engine::{MatchingConfig, MatchingEngine};

    fn scenario_report() -> Report {
        MatchingEngine::new(MatchingConfig {
            include_city: true,
            ..MatchingConfig::default()
        })
        .run(
            "William Smith, Springfield\nJohn Doe, Capital City",
            "Bill Smith, Springfield\nJane Roe, Other Town",
        )
    }

    #[test]
    fn test_text_layout() {
        let text = scenario_report().to_text();
        let expected = "# matches: 1\n\
             0.6500\tnickname\tagree\tWilliam Smith (Springfield)\tBill Smith (Springfield)\n\
             # unmatched members: 1\n\
             John Doe (Capital City)\n\
             # unmatched results: 1\n\
             Jane Roe (Other Town)\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_sections_still_have_headers() {
        let text = MatchingEngine::default().run("", "").to_text();
        assert_eq!(
            text,
            "# matches: 0\n# unmatched members: 0\n# unmatched results: 0\n"
        );
    }

    #[test]
    fn test_pagination_marker_never_emitted() {
        let report = MatchingEngine::default().run("Ann\u{00B6}Lee, Kent\u{00B6}", "Bo Chen");
        let text = report.to_text();
        assert!(!text.contains(PAGINATION_MARKER));
        assert!(text.contains("Ann Lee (Kent)\n"));
    }

    #[test]
    fn test_sanitize_collapses_and_trims() {
        assert_eq!(sanitize("\u{00B6} Ann\t\u{00B6}Lee \u{00B6}"), "Ann Lee");
        assert_eq!(sanitize("\u{00B6}"), "");

        let text = MatchingEngine::default().run("Ann Lee, \u{00B6}", "").to_text();
        assert!(text.contains("\nAnn Lee\n"));
    }

    #[test]
    fn test_tsv_has_one_row_per_record() {
        let tsv = scenario_report().to_tsv();
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[1],
            "match\t0.6500\tnickname\tagree\t1\tWilliam Smith\tSpringfield\t1\tBill Smith\tSpringfield"
        );
        assert!(lines[2].starts_with("unmatched_member\t"));
        assert!(lines[3].starts_with("unmatched_result\t"));
        let columns = lines[0].split('\t').count();
        assert!(lines.iter().all(|l| l.split('\t').count() == columns));
    }

    #[test]
    fn test_json_contains_matches_and_stats() {
        let json = scenario_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["matches"][0]["match_kind"], "nickname_variant");
        assert_eq!(value["matches"][0]["city_agreement"], "agree");
        assert_eq!(value["matches"][0]["member"]["full_name"], "William Smith");
        assert_eq!(value["member_stats"]["records"], 2);
        assert_eq!(value["unmatched_results"][0]["name_as_recorded"], "Jane Roe");
    }
}
