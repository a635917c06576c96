use std::collections::HashMap;

use serde::Serialize;

use crate::core::types::MatchKind;
use crate::names::normalize::NormalizedName;

/// A member/result pair worth scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CandidatePair {
    pub member_index: usize,
    pub result_index: usize,
    pub match_kind: MatchKind,
}

/// Blocking index: normalized surname -> result indices, ascending
#[derive(Debug, Default)]
pub struct SurnameIndex {
    surname_to_results: HashMap<String, Vec<usize>>,
}

impl SurnameIndex {
    #[must_use]
    pub fn build(results: &[NormalizedName]) -> Self {
        let mut surname_to_results: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, name) in results.iter().enumerate() {
            if let Some(surname) = name.surname() {
                surname_to_results
                    .entry(surname.to_string())
                    .or_default()
                    .push(idx);
            }
        }
        Self { surname_to_results }
    }

    /// Result indices sharing `surname`, empty if none
    #[must_use]
    pub fn block(&self, surname: &str) -> &[usize] {
        self.surname_to_results
            .get(surname)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct surnames
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.surname_to_results.len()
    }
}

/// Finds candidate pairs between normalized members and results
pub struct CandidateFinder<'a> {
    members: &'a [NormalizedName],
    results: &'a [NormalizedName],
    index: SurnameIndex,
}

impl<'a> CandidateFinder<'a> {
    #[must_use]
    pub fn new(members: &'a [NormalizedName], results: &'a [NormalizedName]) -> Self {
        Self {
            members,
            results,
            index: SurnameIndex::build(results),
        }
    }

    #[must_use]
    pub fn index(&self) -> &SurnameIndex {
        &self.index
    }

    /// All candidates, ordered by member index then result index.
    ///
    /// Only results in the member's surname block are compared, so the work
    /// is proportional to same-surname pairs rather than the full cross product.
    #[must_use]
    pub fn find_candidates(&self) -> Vec<CandidatePair> {
        let mut candidates = Vec::new();

        for (member_index, member) in self.members.iter().enumerate() {
            let Some(surname) = member.surname() else {
                continue;
            };
            for &result_index in self.index.block(surname) {
                if let Some(match_kind) = classify(member, &self.results[result_index]) {
                    candidates.push(CandidatePair {
                        member_index,
                        result_index,
                        match_kind,
                    });
                }
            }
        }

        candidates
    }
}

/// Classify two names that already share a surname.
///
/// Returns `None` when the given names are unrelated.
#[must_use]
pub fn classify(member: &NormalizedName, result: &NormalizedName) -> Option<MatchKind> {
    if member.surname() != result.surname() {
        return None;
    }
    if member.same_given_names(result) {
        Some(MatchKind::ExactName)
    } else if member.shares_given_name(result) {
        Some(MatchKind::NicknameVariant)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::normalize::normalize;

    fn names(list: &[&str]) -> Vec<NormalizedName> {
        list.iter().map(|n| normalize(n)).collect()
    }

    #[test]
    fn test_classify() {
        let william = normalize("William Smith");
        assert_eq!(
            classify(&william, &normalize("william SMITH")),
            Some(MatchKind::ExactName)
        );
        assert_eq!(
            classify(&william, &normalize("Bill Smith")),
            Some(MatchKind::NicknameVariant)
        );
        assert_eq!(classify(&william, &normalize("Robert Smith")), None);
        assert_eq!(classify(&william, &normalize("William Jones")), None);
        // A shared middle name is enough for a variant match
        assert_eq!(
            classify(&normalize("Rob Roy Smith"), &normalize("Rob Smith")),
            Some(MatchKind::NicknameVariant)
        );
        // Surname-only names are identical in their (empty) given names
        assert_eq!(
            classify(&normalize("Forte"), &normalize("FORTE")),
            Some(MatchKind::ExactName)
        );
        assert_eq!(classify(&normalize("Forte"), &normalize("Ann Forte")), None);
    }

    #[test]
    fn test_index_blocks_by_surname() {
        let results = names(&["Bill Smith", "Jane Roe", "Sue Smith"]);
        let index = SurnameIndex::build(&results);
        assert_eq!(index.block("smith"), &[0, 2]);
        assert_eq!(index.block("roe"), &[1]);
        assert!(index.block("doe").is_empty());
        assert_eq!(index.bucket_count(), 2);
    }

    #[test]
    fn test_find_candidates_in_discovery_order() {
        let members = names(&["Susan Smith", "William Smith", "John Doe"]);
        let results = names(&["Bill Smith", "Jane Roe", "Sue Smith", "Will Smith"]);
        let finder = CandidateFinder::new(&members, &results);
        let candidates = finder.find_candidates();

        let pairs: Vec<(usize, usize)> = candidates
            .iter()
            .map(|c| (c.member_index, c.result_index))
            .collect();
        assert_eq!(pairs, vec![(0, 2), (1, 0), (1, 3)]);
        assert!(candidates
            .iter()
            .all(|c| c.match_kind == MatchKind::NicknameVariant));
    }

    #[test]
    fn test_surname_only_agreement_is_discarded() {
        let members = names(&["Alice Walker"]);
        let results = names(&["Bob Walker", "Carol Walker"]);
        let finder = CandidateFinder::new(&members, &results);
        assert!(finder.find_candidates().is_empty());
    }
}
