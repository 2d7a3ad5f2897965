//! Whole-note punctuation spacing.

use std::sync::LazyLock;

use regex::Regex;

static SPACE_AFTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([.,!\]?:;)}])(\w)").expect("space-after pattern is valid")
});

static SPACE_BEFORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)([({\[])").expect("space-before pattern is valid"));

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s+").expect("whitespace pattern is valid"));

/// Abbreviations split apart by the space-after rule and the form they are
/// joined back into.
const COMMON_ABBREVIATIONS: &[(&str, &str)] =
    &[("e. g.", "e.g."), ("a. k. a.", "a.k.a."), ("i. e.", "i.e.")];

/// Fix spacing around punctuation.
///
/// Inserts a space after closing punctuation that runs into a word and before
/// an opening bracket glued to a word, re-joins common dotted abbreviations and
/// collapses runs of whitespace into a single space.
pub fn normalize_spacing(text: &str) -> String {
    let mut text = SPACE_AFTER.replace_all(text, "${1} ${2}").into_owned();
    for (split, joined) in COMMON_ABBREVIATIONS {
        text = text.replace(split, joined);
    }
    let text = SPACE_BEFORE.replace_all(&text, "${1} ${2}");
    MULTI_SPACE.replace_all(&text, " ").into_owned()
}
