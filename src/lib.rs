//! # roster-match
//!
//! A library for finding the members of a club in published race results.
//!
//! Race results rarely spell names the way a membership roster does. A member
//! listed as "William Smith" may finish as "Bill Smith", "José García" may be
//! recorded as "Jose Garcia", and two members can share a name. `roster-match`
//! links the two lists and reports how confident it is in every link.
//!
//! ## Features
//!
//! - **Lenient parsing**: Tab, comma, or whitespace delimited input; headers,
//!   comments, and malformed lines are skipped and counted
//! - **Name folding**: Accents, case, apostrophes, and suffixes are removed
//! - **Nickname matching**: A built-in table links given names to their
//!   common short forms in both directions
//! - **City evidence**: Optional use of home city as a tie breaker
//! - **One-to-one assignment**: Each member and each result is used at most once
//!
//! ## Example
//!
//! ```rust
//! let text = roster_match::match_rosters(
//!     "William Smith, Springfield\nJohn Doe, Capital City",
//!     "Bill Smith, Springfield\nJane Roe, Other Town",
//!     true,
//! );
//!
//! assert!(text.starts_with("# matches: 1\n0.6500\tnickname\tagree\t"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Record, roster, and classification types
//! - [`names`]: Name normalization and the nickname table
//! - [`parsing`]: Roster text parsers
//! - [`matching`]: Blocking, scoring, and assignment
//! - [`report`]: Text, TSV, and JSON rendering
//! - [`samples`]: Built-in example rosters
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod names;
pub mod parsing;
pub mod report;
pub mod samples;

// Re-export commonly used types for convenience
pub use core::record::{MemberRecord, ResultRecord};
pub use core::types::*;
pub use matching::engine::{MatchResult, MatchingConfig, MatchingEngine, ScoringWeights};
pub use report::Report;
pub use samples::{sample_members, sample_results};

/// Match two roster texts with the default weights and render the text report.
///
/// `include_city` turns on city agreement as scoring evidence. Never fails:
/// unusable lines are skipped and an empty roster simply yields no matches.
#[must_use]
pub fn match_rosters(members_text: &str, results_text: &str, include_city: bool) -> String {
    MatchingEngine::new(MatchingConfig {
        include_city,
        ..MatchingConfig::default()
    })
    .run(members_text, results_text)
    .to_text()
}
