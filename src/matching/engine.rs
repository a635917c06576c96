use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::record::{MemberRecord, ResultRecord};
use crate::core::roster::{MemberRoster, ResultRoster};
use crate::core::types::AssignmentPolicy;
use crate::matching::assign::assign;
use crate::matching::blocking::CandidateFinder;
use crate::matching::scoring::{ScoredPair, Scorer};
use crate::names::normalize::{fold_city, normalize, NormalizedName};
use crate::parsing::roster::{parse_members_text, parse_results_text};
use crate::report::Report;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// An accepted pair together with the two records it binds
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub member: MemberRecord,

    pub result: ResultRecord,

    #[serde(flatten)]
    pub pair: ScoredPair,
}

/// Default acceptance threshold for matches
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.2;

/// Configurable weights of the scoring model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Prior probability that a roster member appears in the results at all
    pub prob_member_in_race: f64,
    /// Confidence that an exact-name candidate is a true match
    pub total_right: f64,
    /// Confidence that a nickname-only candidate is a true match
    pub total_nickname: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            prob_member_in_race: 0.5,
            total_right: 0.9,
            total_nickname: 0.6,
        }
    }
}

impl ScoringWeights {
    /// Clamp every weight to [0, 1]; NaN becomes 0
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            prob_member_in_race: clamp_unit(self.prob_member_in_race),
            total_right: clamp_unit(self.total_right),
            total_nickname: clamp_unit(self.total_nickname),
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Configuration for the matching engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Scoring model weights
    pub scoring_weights: ScoringWeights,
    /// Use city agreement as a scoring signal
    pub include_city: bool,
    /// Pairs must score strictly above this to be accepted
    pub min_confidence: f64,
    /// How scored pairs are resolved into matches
    pub policy: AssignmentPolicy,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            scoring_weights: ScoringWeights::default(),
            include_city: false,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            policy: AssignmentPolicy::default(),
        }
    }
}

impl MatchingConfig {
    /// Load a configuration from a JSON file; absent fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read, or
    /// `ConfigError::ParseError` if it is not valid JSON for this type.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the JSON does not describe a config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Copy with every weight and the threshold clamped to [0, 1]
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            scoring_weights: self.scoring_weights.clamped(),
            min_confidence: clamp_unit(self.min_confidence),
            ..self.clone()
        }
    }
}

/// The main matching engine
///
/// Stateless across runs: every call parses, normalizes, and scores from
/// scratch, so one engine can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    /// Create an engine; out-of-range values in `config` are clamped
    #[must_use]
    pub fn new(config: MatchingConfig) -> Self {
        let clamped = config.clamped();
        if clamped != config {
            warn!(
                requested = ?config.scoring_weights,
                used = ?clamped.scoring_weights,
                min_confidence = clamped.min_confidence,
                "configuration values outside [0, 1] were clamped"
            );
        }
        Self { config: clamped }
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Parse both rosters and match them
    #[must_use]
    pub fn run(&self, members_text: &str, results_text: &str) -> Report {
        let members = parse_members_text(members_text);
        let results = parse_results_text(results_text);
        self.match_rosters(&members, &results)
    }

    /// Match two parsed rosters
    #[must_use]
    pub fn match_rosters(&self, members: &MemberRoster, results: &ResultRoster) -> Report {
        let member_names: Vec<NormalizedName> = members
            .records
            .iter()
            .map(|m| normalize(&m.full_name))
            .collect();
        let result_names: Vec<NormalizedName> = results
            .records
            .iter()
            .map(|r| normalize(&r.name_as_recorded))
            .collect();

        // Step 1: Block on surname and classify given names
        let finder = CandidateFinder::new(&member_names, &result_names);
        let candidates = finder.find_candidates();
        debug!(
            surnames = finder.index().bucket_count(),
            candidates = candidates.len(),
            "generated candidate pairs"
        );

        // Step 2: Score
        let member_cities = fold_cities(members.records.iter().map(|m| m.city.as_deref()));
        let result_cities = fold_cities(results.records.iter().map(|r| r.city.as_deref()));
        let scorer = Scorer::new(&self.config.scoring_weights, self.config.include_city);
        let scored = scorer.score_all(&candidates, &member_cities, &result_cities);

        // Step 3: Assign
        let accepted = assign(&scored, self.config.min_confidence, self.config.policy);

        let matches: Vec<MatchResult> = accepted
            .into_iter()
            .map(|pair| MatchResult {
                member: members.records[pair.member_index()].clone(),
                result: results.records[pair.result_index()].clone(),
                pair,
            })
            .collect();

        info!(
            members = members.len(),
            results = results.len(),
            matches = matches.len(),
            "matching complete"
        );

        Report::new(matches, members, results, candidates.len())
    }
}

fn fold_cities<'a>(cities: impl Iterator<Item = Option<&'a str>>) -> Vec<Option<String>> {
    cities.map(|c| c.map(fold_city)).collect()
}
