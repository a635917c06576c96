use std::cmp::Ordering;
use std::collections::HashSet;

use crate::core::types::AssignmentPolicy;
use crate::matching::scoring::ScoredPair;

/// Resolve scored pairs into accepted matches.
///
/// Under [`AssignmentPolicy::OneToOne`] pairs are visited by confidence
/// descending (ties: lower member index, then lower result index) and a pair
/// is accepted when its confidence is above `min_confidence` and neither of
/// its records has been claimed yet. This greedy pass approximates a
/// maximum-weight bipartite matching and returns the accepted pairs in visit
/// order.
///
/// Under [`AssignmentPolicy::AllAboveThreshold`] every pair above the
/// threshold is kept in the order it was given (order of discovery).
#[must_use]
pub fn assign(
    scored: &[ScoredPair],
    min_confidence: f64,
    policy: AssignmentPolicy,
) -> Vec<ScoredPair> {
    match policy {
        AssignmentPolicy::OneToOne => assign_one_to_one(scored, min_confidence),
        AssignmentPolicy::AllAboveThreshold => scored
            .iter()
            .filter(|p| p.confidence > min_confidence)
            .copied()
            .collect(),
    }
}

fn assign_one_to_one(scored: &[ScoredPair], min_confidence: f64) -> Vec<ScoredPair> {
    let mut ranked: Vec<&ScoredPair> = scored
        .iter()
        .filter(|p| p.confidence > min_confidence)
        .collect();
    ranked.sort_by(|a, b| rank(a, b));

    let mut claimed_members = HashSet::new();
    let mut claimed_results = HashSet::new();
    let mut accepted = Vec::new();

    for pair in ranked {
        if claimed_members.contains(&pair.member_index())
            || claimed_results.contains(&pair.result_index())
        {
            continue;
        }
        claimed_members.insert(pair.member_index());
        claimed_results.insert(pair.result_index());
        accepted.push(*pair);
    }

    accepted
}

/// Confidence descending, then member index, then result index
fn rank(a: &ScoredPair, b: &ScoredPair) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| a.member_index().cmp(&b.member_index()))
        .then_with(|| a.result_index().cmp(&b.result_index()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CityAgreement, MatchKind};
    use crate::matching::blocking::CandidatePair;

    fn pair(member_index: usize, result_index: usize, confidence: f64) -> ScoredPair {
        ScoredPair {
            candidate: CandidatePair {
                member_index,
                result_index,
                match_kind: MatchKind::ExactName,
            },
            confidence,
            city_agreement: CityAgreement::Unknown,
        }
    }

    fn indices(pairs: &[ScoredPair]) -> Vec<(usize, usize)> {
        pairs
            .iter()
            .map(|p| (p.member_index(), p.result_index()))
            .collect()
    }

    #[test]
    fn test_highest_confidence_claims_first() {
        let scored = vec![pair(0, 0, 0.4), pair(0, 1, 0.9), pair(1, 1, 0.8), pair(1, 0, 0.3)];
        let accepted = assign(&scored, 0.2, AssignmentPolicy::OneToOne);
        assert_eq!(indices(&accepted), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_ties_break_on_member_then_result() {
        let scored = vec![pair(1, 1, 0.5), pair(1, 0, 0.5), pair(0, 1, 0.5), pair(0, 0, 0.5)];
        let accepted = assign(&scored, 0.2, AssignmentPolicy::OneToOne);
        assert_eq!(indices(&accepted), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let scored = vec![pair(0, 0, 0.2), pair(1, 1, 0.21)];
        let accepted = assign(&scored, 0.2, AssignmentPolicy::OneToOne);
        assert_eq!(indices(&accepted), vec![(1, 1)]);
    }

    #[test]
    fn test_all_above_threshold_keeps_discovery_order() {
        let scored = vec![pair(0, 0, 0.3), pair(0, 1, 0.9), pair(1, 1, 0.1), pair(2, 1, 0.5)];
        let accepted = assign(&scored, 0.2, AssignmentPolicy::AllAboveThreshold);
        assert_eq!(indices(&accepted), vec![(0, 0), (0, 1), (2, 1)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(assign(&[], 0.0, AssignmentPolicy::OneToOne).is_empty());
    }
}
