//! Name matching strategies used by the species lookup.
//!
//! A lookup runs an ordered list of [`MatchStrategy`] values against a [`NameIndex`] built
//! from one category's table; the first strategy that produces a record id wins.

use crate::model::species::Category;

/// Names of one category's records, in table order.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    // (id, lowercased name)
    entries: Vec<(i32, String)>,
}

impl NameIndex {
    /// Builds an index from `(id, name)` pairs, which must already be in table order.
    pub fn new(entries: Vec<(i32, String)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(id, name)| (id, name.to_lowercase()))
                .collect(),
        }
    }

    /// Whether the category has no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn exact(&self, candidate: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(_, name)| name == candidate)
            .map(|(id, _)| *id)
    }

    fn containing(&self, candidate: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(_, name)| name.contains(candidate))
            .map(|(id, _)| *id)
    }
}

/// One way of turning a candidate name into a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Case-insensitive equality with a stored name
    Exact,
    /// Plural form of a stored name: "guppies" -> "guppy", "bettas" -> "betta"
    Singular,
    /// Stored name carries the category word: "betta" -> "betta fish"
    CanonicalSuffix,
    /// First stored name, in table order, containing the candidate.
    ///
    /// This is permissive and can return an unrelated record, e.g. "tetra" finds
    /// "Neon Tetra" when no plain "Tetra" is stored.
    Substring,
}

impl MatchStrategy {
    /// Strategies in the order a lookup attempts them.
    pub const ORDERED: [MatchStrategy; 4] = [
        Self::Exact,
        Self::Singular,
        Self::CanonicalSuffix,
        Self::Substring,
    ];

    /// Attempts to match `candidate` against `index`, returning the record id on success.
    pub fn find(self, candidate: &str, category: Category, index: &NameIndex) -> Option<i32> {
        let candidate = candidate.trim().to_lowercase();
        if candidate.is_empty() {
            return None;
        }

        match self {
            Self::Exact => index.exact(&candidate),
            Self::Singular => singularize(&candidate).and_then(|c| index.exact(&c)),
            Self::CanonicalSuffix => {
                with_canonical_suffix(&candidate, category).and_then(|c| index.exact(&c))
            }
            Self::Substring => index.containing(&candidate),
        }
    }
}

/// Runs `strategies` in order and returns the first hit along with the strategy that produced it.
pub fn resolve(
    candidate: &str,
    category: Category,
    index: &NameIndex,
    strategies: &[MatchStrategy],
) -> Option<(MatchStrategy, i32)> {
    strategies
        .iter()
        .find_map(|strategy| strategy.find(candidate, category, index).map(|id| (*strategy, id)))
}

/// Singular form of a lowercased plural, or `None` if the word doesn't look plural.
pub fn singularize(candidate: &str) -> Option<String> {
    if let Some(stem) = candidate.strip_suffix("ies") {
        Some(format!("{}y", stem))
    } else {
        candidate.strip_suffix('s').map(str::to_string)
    }
}

/// Candidate with the category word appended, or `None` if it already mentions it.
pub fn with_canonical_suffix(candidate: &str, category: Category) -> Option<String> {
    let suffix = category.canonical_suffix();

    if candidate.contains(suffix) {
        None
    } else {
        Some(format!("{} {}", candidate, suffix))
    }
}
