//! Porter stemming algorithm implementation.
//!
//! The Porter stemmer applies a series of suffix rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes, terminal y to i
//! 2. -ational to -ate, -tional to -tion, etc.
//! 3. -icate to -ic, -ative removed, etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and reduce -ll
//!
//! # Examples
//!
//! ```
//! use notemend::analysis::stem::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("ponies"), "poni");
//! assert_eq!(stemmer.stem("relational"), "relat");
//! ```

use crate::analysis::stem::Stemmer;

const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm for English.
///
/// Works on ASCII words. Words with non-ASCII characters are only lower-cased,
/// since the suffix rules are meaningless for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

fn is_consonant(word: &[u8], pos: usize) -> bool {
    match word[pos] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => pos == 0 || !is_consonant(word, pos - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences in `word[..len]`.
fn measure(word: &[u8], len: usize) -> usize {
    let mut m = 0;
    let mut i = 0;

    // Skip initial consonants
    while i < len && is_consonant(word, i) {
        i += 1;
    }

    loop {
        while i < len && !is_consonant(word, i) {
            i += 1;
        }
        if i >= len {
            return m;
        }
        while i < len && is_consonant(word, i) {
            i += 1;
        }
        m += 1;
    }
}

fn contains_vowel(word: &[u8], len: usize) -> bool {
    (0..len).any(|i| !is_consonant(word, i))
}

fn ends_double_consonant(word: &[u8], len: usize) -> bool {
    len >= 2 && word[len - 1] == word[len - 2] && is_consonant(word, len - 1)
}

/// consonant-vowel-consonant where the final consonant is not w, x or y.
fn ends_cvc(word: &[u8], len: usize) -> bool {
    len >= 3
        && is_consonant(word, len - 3)
        && !is_consonant(word, len - 2)
        && is_consonant(word, len - 1)
        && !matches!(word[len - 1], b'w' | b'x' | b'y')
}

fn replace_suffix(word: &mut Vec<u8>, suffix_len: usize, replacement: &str) {
    word.truncate(word.len() - suffix_len);
    word.extend_from_slice(replacement.as_bytes());
}

/// Rewrite the first suffix of `rules` the word ends with, if the remaining
/// stem has a measure above zero. Later rules are not tried once one matched.
fn apply_rules(word: &mut Vec<u8>, rules: &[(&str, &str)]) {
    for (suffix, replacement) in rules {
        if word.ends_with(suffix.as_bytes()) {
            if measure(word, word.len() - suffix.len()) > 0 {
                replace_suffix(word, suffix.len(), replacement);
            }
            return;
        }
    }
}

fn step1a(word: &mut Vec<u8>) {
    if word.ends_with(b"sses") || word.ends_with(b"ies") {
        word.truncate(word.len() - 2);
    } else if word.ends_with(b"s") && !word.ends_with(b"ss") {
        word.truncate(word.len() - 1);
    }
}

fn step1b(word: &mut Vec<u8>) {
    if word.ends_with(b"eed") {
        if measure(word, word.len() - 3) > 0 {
            word.truncate(word.len() - 1);
        }
        return;
    }

    let removed = if word.ends_with(b"ed") && contains_vowel(word, word.len() - 2) {
        2
    } else if word.ends_with(b"ing") && contains_vowel(word, word.len() - 3) {
        3
    } else {
        return;
    };
    word.truncate(word.len() - removed);

    let len = word.len();
    if word.ends_with(b"at") || word.ends_with(b"bl") || word.ends_with(b"iz") {
        word.push(b'e');
    } else if ends_double_consonant(word, len) {
        if !matches!(word[len - 1], b'l' | b's' | b'z') {
            word.truncate(len - 1);
        }
    } else if measure(word, len) == 1 && ends_cvc(word, len) {
        word.push(b'e');
    }
}

fn step1c(word: &mut [u8]) {
    let len = word.len();
    if word.ends_with(b"y") && contains_vowel(word, len - 1) {
        word[len - 1] = b'i';
    }
}

fn step4(word: &mut Vec<u8>) {
    for suffix in STEP4_SUFFIXES {
        if word.ends_with(suffix.as_bytes()) {
            let stem_len = word.len() - suffix.len();
            if *suffix == "ion" && !(stem_len > 0 && matches!(word[stem_len - 1], b's' | b't')) {
                return;
            }
            if measure(word, stem_len) > 1 {
                word.truncate(stem_len);
            }
            return;
        }
    }
}

fn step5(word: &mut Vec<u8>) {
    let len = word.len();
    if word.ends_with(b"e") {
        let m = measure(word, len - 1);
        if m > 1 || (m == 1 && !ends_cvc(word, len - 1)) {
            word.truncate(len - 1);
        }
    }

    let len = word.len();
    if word.ends_with(b"l") && ends_double_consonant(word, len) && measure(word, len) > 1 {
        word.truncate(len - 1);
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        if lowered.len() <= 2 || !lowered.is_ascii() {
            return lowered;
        }

        let mut bytes = lowered.into_bytes();
        step1a(&mut bytes);
        step1b(&mut bytes);
        step1c(&mut bytes);
        apply_rules(&mut bytes, STEP2_SUFFIXES);
        apply_rules(&mut bytes, STEP3_SUFFIXES);
        step4(&mut bytes);
        step5(&mut bytes);

        // Only ASCII bytes were removed or appended.
        String::from_utf8(bytes).unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
