use serde::{Deserialize, Serialize};

/// How the given names of a candidate pair relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Given-name tokens are identical
    ExactName,
    /// At least one given-name token is identical or nickname-linked, but not all
    NicknameVariant,
}

impl MatchKind {
    /// Short label used in text and TSV reports
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ExactName => "exact",
            Self::NicknameVariant => "nickname",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether the two records of a pair agree on city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityAgreement {
    Agree,
    Disagree,
    /// City scoring is off, or at least one record has no city
    Unknown,
}

impl CityAgreement {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Agree => "agree",
            Self::Disagree => "disagree",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CityAgreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How scored pairs are resolved into matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPolicy {
    /// Each member and each result takes part in at most one match
    #[default]
    OneToOne,
    /// Every pair above the threshold is kept, in order of discovery
    AllAboveThreshold,
}
