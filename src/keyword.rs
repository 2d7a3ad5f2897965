//! Normalization of free-text keyword phrases.
//!
//! Keywords collected from highlighted passages usually drag along some
//! decoration: an abbreviation in parentheses (`Markov Random Fields (MRFs)`),
//! a bibliographic reference (`object identification (Lim et al. 1993)`) or a
//! bracketed qualifier in front of the term (`[Local similarity] Adamic-Adar`).
//! [`normalize_keyword`] strips that decoration and returns it in structured
//! form next to the bare term.
//!
//! # Examples
//!
//! ```
//! use notemend::keyword::normalize_keyword;
//!
//! let normalized = normalize_keyword("Markov Random Fields (MRFs)");
//!
//! assert_eq!(normalized.term, "Markov Random Fields");
//! assert_eq!(normalized.abbreviations[0].short_form, "MRFs");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::util::levenshtein::normalized_distance;

/// Largest normalized distance between the initials of a phrase and a
/// bracketed span for the span to count as the phrase's abbreviation.
pub const DEFAULT_MAX_ABBREVIATION_DISTANCE: f64 = 0.67;

static BRACKETED_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([-\s\w]+?)\s*([\[(]\s*(.*?)\s*[)\]])").expect("bracket pattern is valid")
});

static AUTHOR_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w*\s\d{2,4}").expect("reference pattern is valid"));

static QUALIFIER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\s*(\w+)").expect("qualifier pattern is valid"));

/// Keyword normalization settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// See [`DEFAULT_MAX_ABBREVIATION_DISTANCE`].
    pub max_abbreviation_distance: f64,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        KeywordConfig {
            max_abbreviation_distance: DEFAULT_MAX_ABBREVIATION_DISTANCE,
        }
    }
}

/// A phrase and the abbreviation found next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abbreviation {
    pub long_form: String,
    pub short_form: String,
}

/// A bracketed qualifier and the word it qualifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    /// The word following the bracket.
    pub label: String,
    /// The bracket content.
    pub qualifier: String,
}

/// Result of [`normalize_keyword`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordNormalization {
    /// The phrase with references, abbreviations and qualifiers removed.
    pub term: String,
    pub abbreviations: Vec<Abbreviation>,
    pub specifications: Vec<Specification>,
}

impl KeywordNormalization {
    /// `(term, [(long_form, short_form)], [(label, qualifier)])`.
    #[allow(clippy::type_complexity)]
    pub fn into_parts(self) -> (String, Vec<(String, String)>, Vec<(String, String)>) {
        let abbreviations = self
            .abbreviations
            .into_iter()
            .map(|a| (a.long_form, a.short_form))
            .collect();
        let specifications = self
            .specifications
            .into_iter()
            .map(|s| (s.label, s.qualifier))
            .collect();

        (self.term, abbreviations, specifications)
    }
}

/// Keyword normalizer with a configurable abbreviation threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordNormalizer {
    config: KeywordConfig,
}

impl KeywordNormalizer {
    pub fn new(config: KeywordConfig) -> Self {
        KeywordNormalizer { config }
    }

    /// Normalize one keyword phrase.
    pub fn normalize(&self, raw: &str) -> KeywordNormalization {
        let folded = fold_to_ascii(&raw.replace(['\u{2014}', '\u{2013}'], "-"));
        let mut term = folded.clone();

        let mut abbreviations = Vec::new();
        for caps in BRACKETED_SUFFIX.captures_iter(&folded) {
            let prefix = &caps[1];
            let bracketed = &caps[2];
            let embraced = &caps[3];

            if is_reference(embraced) {
                term = term.replace(bracketed, "").trim().to_string();
                continue;
            }

            let initials: String = prefix
                .replace('-', " ")
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .flat_map(char::to_lowercase)
                .collect();
            if initials.is_empty() && embraced.is_empty() {
                continue;
            }

            let distance = normalized_distance(&initials, &embraced.to_lowercase());
            if distance <= self.config.max_abbreviation_distance {
                abbreviations.push(Abbreviation {
                    long_form: prefix.trim().to_string(),
                    short_form: embraced.trim().to_string(),
                });
                term = term.replace(bracketed, "").trim().to_string();
            }
        }

        let mut specifications = Vec::new();
        let scanned = term.clone();
        for caps in QUALIFIER_PREFIX.captures_iter(&scanned) {
            let qualifier = &caps[1];
            specifications.push(Specification {
                label: caps[2].trim().to_string(),
                qualifier: qualifier.trim().to_string(),
            });
            term = term.replace(&format!("[{qualifier}]"), "").trim().to_string();
        }

        KeywordNormalization {
            term: term.trim().to_string(),
            abbreviations,
            specifications,
        }
    }
}

/// Numbers, "et al" citations and "Author 1999" style spans.
fn is_reference(embraced: &str) -> bool {
    (!embraced.is_empty() && embraced.chars().all(|c| c.is_ascii_digit()))
        || embraced.contains("et al")
        || AUTHOR_YEAR.is_match(embraced)
}

/// Decompose and drop everything outside ASCII, so "Café" becomes "Cafe".
pub(crate) fn fold_to_ascii(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Normalize a keyword phrase with the default abbreviation threshold.
pub fn normalize_keyword(raw: &str) -> KeywordNormalization {
    KeywordNormalizer::default().normalize(raw)
}
