//! Parsers turning free-text rosters into typed records.
//!
//! - **Members**: one person per line, `Name[, City]` or `First, Last, City`
//! - **Results**: one finisher per line, name plus any mix of bib, city,
//!   gender, division, and time columns
//!
//! The delimiter (tab, comma, or whitespace run) is detected once per roster.
//! Blank lines, `#` comments, and a leading column header are skipped. Lines
//! with no name token are skipped and counted; parsing never fails.
//!
//! ## Example
//!
//! ```rust
//! use roster_match::parsing::roster::{parse_members_text, parse_results_text};
//!
//! let members = parse_members_text("William Smith, Springfield\n");
//! let results = parse_results_text("101\tBill Smith\tSpringfield\t24:31\n");
//!
//! assert_eq!(members.records[0].city.as_deref(), Some("Springfield"));
//! assert_eq!(results.records[0].metadata, ["101", "24:31"]);
//! ```

pub mod roster;
