//! Core data types for roster matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`MemberRecord`](record::MemberRecord): One entry of the membership roster
//! - [`ResultRecord`](record::ResultRecord): One line of the race results
//! - [`Roster`](roster::Roster): Parsed records plus [`ParseStats`](roster::ParseStats)
//! - [`MatchKind`](types::MatchKind), [`CityAgreement`](types::CityAgreement),
//!   [`AssignmentPolicy`](types::AssignmentPolicy): Classification types
//!
//! Records are immutable once parsed. Everything derived from them (normalized
//! names, candidates, scores) is recomputed on every matching run.

pub mod record;
pub mod roster;
pub mod types;
