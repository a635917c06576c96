use serde::Serialize;

use crate::core::types::{CityAgreement, MatchKind};
use crate::matching::blocking::CandidatePair;
use crate::matching::engine::ScoringWeights;

/// Fraction of the remaining distance to 1.0 gained when cities agree
pub const CITY_AGREEMENT_BOOST: f64 = 0.5;

/// Factor removed from the confidence when cities disagree
pub const CITY_DISAGREEMENT_PENALTY: f64 = 0.5;

/// A candidate pair with its confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredPair {
    #[serde(flatten)]
    pub candidate: CandidatePair,

    /// Estimated probability that both records are the same person, in [0, 1]
    pub confidence: f64,

    pub city_agreement: CityAgreement,
}

impl ScoredPair {
    #[must_use]
    pub fn member_index(&self) -> usize {
        self.candidate.member_index
    }

    #[must_use]
    pub fn result_index(&self) -> usize {
        self.candidate.result_index
    }

    #[must_use]
    pub fn match_kind(&self) -> MatchKind {
        self.candidate.match_kind
    }
}

/// Turns candidates into scored pairs
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: ScoringWeights,
    include_city: bool,
}

impl Scorer {
    /// Weights are clamped to [0, 1] here, whatever the caller passed
    #[must_use]
    pub fn new(weights: &ScoringWeights, include_city: bool) -> Self {
        Self {
            weights: weights.clamped(),
            include_city,
        }
    }

    /// Confidence from the name evidence alone
    #[must_use]
    pub fn base_confidence(&self, kind: MatchKind) -> f64 {
        let weight = match kind {
            MatchKind::ExactName => self.weights.total_right,
            MatchKind::NicknameVariant => self.weights.total_nickname,
        };
        self.weights.prob_member_in_race * weight
    }

    /// Score one candidate given the folded cities of both records
    #[must_use]
    pub fn score(
        &self,
        candidate: CandidatePair,
        member_city: Option<&str>,
        result_city: Option<&str>,
    ) -> ScoredPair {
        let city_agreement = if self.include_city {
            compare_cities(member_city, result_city)
        } else {
            CityAgreement::Unknown
        };
        let confidence =
            adjust_for_city(self.base_confidence(candidate.match_kind), city_agreement);

        ScoredPair {
            candidate,
            confidence,
            city_agreement,
        }
    }

    /// Score every candidate; `member_cities` and `result_cities` are indexed
    /// like the rosters the candidates point into
    #[must_use]
    pub fn score_all(
        &self,
        candidates: &[CandidatePair],
        member_cities: &[Option<String>],
        result_cities: &[Option<String>],
    ) -> Vec<ScoredPair> {
        candidates
            .iter()
            .map(|c| {
                self.score(
                    *c,
                    city_at(member_cities, c.member_index),
                    city_at(result_cities, c.result_index),
                )
            })
            .collect()
    }
}

fn city_at(cities: &[Option<String>], idx: usize) -> Option<&str> {
    cities.get(idx).and_then(Option::as_deref)
}

/// Compare two folded cities; a missing or empty city on either side is `Unknown`
#[must_use]
pub fn compare_cities(a: Option<&str>, b: Option<&str>) -> CityAgreement {
    match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
            if a == b {
                CityAgreement::Agree
            } else {
                CityAgreement::Disagree
            }
        }
        _ => CityAgreement::Unknown,
    }
}

/// Apply city evidence and clamp to [0, 1]
#[must_use]
pub fn adjust_for_city(confidence: f64, agreement: CityAgreement) -> f64 {
    let adjusted = match agreement {
        CityAgreement::Agree => confidence + (1.0 - confidence) * CITY_AGREEMENT_BOOST,
        CityAgreement::Disagree => confidence * (1.0 - CITY_DISAGREEMENT_PENALTY),
        CityAgreement::Unknown => confidence,
    };
    adjusted.clamp(0.0, 1.0)
}
