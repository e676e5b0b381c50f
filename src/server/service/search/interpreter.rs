//! Free-text query interpretation.
//!
//! Turns a sentence such as "what is the diet of guppies?" into the category to search, a
//! candidate species name and an optional requested attribute. Nothing here touches the
//! database.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    model::species::Category,
    server::service::search::attribute::{self, Attribute},
};

static FISH_TOKENS: [&str; 4] = ["fish", "betta", "guppy", "tetra"];
static PLANT_TOKENS: [&str; 4] = ["plant", "fern", "anubias", "anacharis"];

/// Words dropped from the start of an extracted name. "s" is what remains of contractions
/// like "what's" once the apostrophe splits the word.
static LEADING_FILLER: [&str; 6] = ["the", "of", "a", "an", "s", "is"];

/// Name extraction patterns, from most to least specific.
static NAME_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(
            r"(?:about|for|what is|tell me about|show me)\s+([\w\s]+?)(?:\s+(?:fish|plant)|\?|\.|$)",
        )
        .unwrap(),
        Regex::new(r"([\w\s]+?)(?:\s+(?:fish|plant)|\?|\.|$)").unwrap(),
        Regex::new(r"([\w\s]+)").unwrap(),
    ]
});

/// Structured reading of a free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    /// Lowercased query with trailing punctuation and extra whitespace removed
    pub normalized: String,
    /// Table to search
    pub category: Category,
    /// Candidate species name with every word capitalized
    pub name: Option<String>,
    /// Attribute the query asks about, if any
    pub attribute: Option<Attribute>,
}

/// Which category words a query mentions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryHints {
    /// A fish word such as "betta" appears
    pub fish: bool,
    /// A plant word such as "fern" appears
    pub plant: bool,
}

impl CategoryHints {
    /// Scans normalized query text for fish and plant words
    pub fn detect(text: &str) -> Self {
        Self {
            fish: FISH_TOKENS.iter().any(|token| text.contains(token)),
            plant: PLANT_TOKENS.iter().any(|token| text.contains(token)),
        }
    }

    /// Plant only when plant words appear without fish words; fish in every other case,
    /// including when both or neither appear.
    pub fn resolve(self) -> Category {
        if self.plant && !self.fish {
            Category::Plant
        } else {
            Category::Fish
        }
    }
}

/// Interprets a raw query. Callers reject empty queries before getting here.
pub fn interpret(query: &str) -> Interpretation {
    let normalized = normalize(query);

    let (attribute, name_text) = match attribute::detect(&normalized) {
        Some((attribute, trigger)) => (
            Some(attribute),
            collapse_whitespace(&normalized.replace(trigger, "")),
        ),
        None => (None, normalized.clone()),
    };

    let category = CategoryHints::detect(&normalized).resolve();
    let name = extract_name(&name_text);

    Interpretation {
        normalized,
        category,
        name,
        attribute,
    }
}

/// Lowercases, strips trailing punctuation and collapses whitespace.
pub fn normalize(query: &str) -> String {
    let lowered = query.trim().to_lowercase();

    collapse_whitespace(trim_trailing_punctuation(&lowered))
}

/// Extracts a capitalized species name from query text with any attribute phrase removed.
pub fn extract_name(text: &str) -> Option<String> {
    let span = NAME_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())?;

    let mut words: Vec<&str> = trim_trailing_punctuation(span).split_whitespace().collect();

    let filler = words
        .iter()
        .take_while(|word| LEADING_FILLER.contains(*word))
        .count();
    words.drain(..filler);

    if words.is_empty() {
        return None;
    }

    Some(
        words
            .into_iter()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn trim_trailing_punctuation(text: &str) -> &str {
    text.trim_end()
        .trim_end_matches(|c: char| c.is_ascii_punctuation())
        .trim()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
