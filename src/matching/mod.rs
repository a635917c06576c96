//! Candidate generation, scoring, and assignment.
//!
//! - [`MatchingEngine`]: Main entry point; parses, normalizes, and matches two rosters
//! - [`CandidateFinder`]: Surname blocking and name classification
//! - [`Scorer`]: Confidence for each candidate pair
//! - [`assign`]: Greedy resolution of scored pairs into matches
//!
//! ## Matching Algorithm
//!
//! 1. **Blocking**: Results are indexed by surname (last normalized token); a
//!    member is only compared against results sharing its surname
//! 2. **Classification**: Identical given names make an *exact* candidate; a
//!    given-name pair related through the nickname table makes a *nickname*
//!    candidate; anything else is dropped
//! 3. **Scoring**: `prob_member_in_race` times `total_right` (exact) or
//!    `total_nickname` (nickname), optionally adjusted by city agreement
//! 4. **Assignment**: Highest confidence first, each record used at most once,
//!    only pairs strictly above `min_confidence`
//!
//! ## Example
//!
//! ```rust
//! use roster_match::{MatchingConfig, MatchingEngine};
//!
//! let engine = MatchingEngine::new(MatchingConfig::default());
//! let report = engine.run("Robert Scott, Bellevue", "101\tBob Scott\tBellevue\t24:02");
//!
//! assert_eq!(report.matches.len(), 1);
//! assert!((report.matches[0].pair.confidence - 0.3).abs() < 1e-9);
//! ```

pub mod assign;
pub mod blocking;
pub mod engine;
pub mod scoring;

pub use assign::assign;
pub use blocking::{CandidateFinder, CandidatePair};
pub use engine::{MatchResult, MatchingConfig, MatchingEngine, ScoringWeights};
pub use scoring::{ScoredPair, Scorer};
