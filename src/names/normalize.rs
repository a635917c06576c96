use std::collections::BTreeSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::names::nicknames::NicknameTable;

/// Trailing tokens that say nothing about identity across rosters
const GENERATIONAL_SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv"];

/// A given-name token together with every name considered interchangeable with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GivenName {
    pub token: String,
    pub variants: BTreeSet<String>,
}

/// Canonical form of a person's name
///
/// The last token is the surname, every preceding token is a given name.
/// An empty `NormalizedName` means the input had no usable name token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedName {
    tokens: Vec<String>,
    given: Vec<GivenName>,
}

impl NormalizedName {
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn surname(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    #[must_use]
    pub fn given_names(&self) -> &[GivenName] {
        &self.given
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when the given-name tokens of both names are the same sequence
    #[must_use]
    pub fn same_given_names(&self, other: &Self) -> bool {
        self.given.len() == other.given.len()
            && self
                .given
                .iter()
                .zip(&other.given)
                .all(|(a, b)| a.token == b.token)
    }

    /// True when some given-name token of `self` is identical to, or
    /// nickname-linked with, some given-name token of `other`
    #[must_use]
    pub fn shares_given_name(&self, other: &Self) -> bool {
        self.given.iter().any(|mine| {
            other
                .given
                .iter()
                .any(|theirs| mine.variants.contains(&theirs.token))
        })
    }

    /// Title-cased tokens joined by single spaces
    #[must_use]
    pub fn display(&self) -> String {
        self.tokens
            .iter()
            .map(|t| title_case(t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Normalize a name: fold case and diacritics, tokenize, designate the
/// surname, and expand given names through the nickname table.
///
/// # Examples
///
/// ```
/// use roster_match::names::normalize::normalize;
///
/// let name = normalize("  José  O'Brien-Díaz Jr. ");
/// assert_eq!(name.tokens(), ["jose", "obrien", "diaz"]);
/// assert_eq!(name.surname(), Some("diaz"));
/// ```
#[must_use]
pub fn normalize(name: &str) -> NormalizedName {
    let mut tokens = fold_tokens(name);

    while tokens.len() > 2
        && tokens
            .last()
            .is_some_and(|t| GENERATIONAL_SUFFIXES.contains(&t.as_str()))
    {
        tokens.pop();
    }

    let table = NicknameTable::global();
    let given = tokens
        .iter()
        .take(tokens.len().saturating_sub(1))
        .map(|token| GivenName {
            token: token.clone(),
            variants: table.variants(token),
        })
        .collect();

    NormalizedName { tokens, given }
}

/// Fold free text into lowercase tokens with diacritics removed.
///
/// Apostrophes and periods are dropped, any other character that is not
/// alphanumeric separates tokens. Used for both names and cities.
#[must_use]
pub fn fold_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().flat_map(fold_word).collect()
}

/// Folded form of a city, for equality comparison
#[must_use]
pub fn fold_city(city: &str) -> String {
    fold_tokens(city).join(" ")
}

/// True when the text contains at least one token a name can be built from
#[must_use]
pub fn has_name_token(text: &str) -> bool {
    fold_tokens(text)
        .iter()
        .any(|t| t.chars().any(char::is_alphabetic))
}

fn fold_word(raw: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for c in raw.to_lowercase().nfd() {
        if is_combining_mark(c) || matches!(c, '\'' | '\u{2019}' | '`' | '.') {
            continue;
        }
        if c.is_alphanumeric() {
            current.push(c);
        } else if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }

    // Script forms that fold away entirely fall back to the raw token
    if out.is_empty() && raw.chars().any(is_combining_mark) {
        out.push(raw.to_lowercase());
    }
    out
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(head).chain(chars).collect()
}
