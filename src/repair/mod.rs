//! Repair of hyphenation and spacing artifacts in extracted note text.
//!
//! Text pulled out of justified or wrapped PDF layout tends to carry two kinds
//! of damage: words broken by a line-wrap hyphen (`hello-world`) and words that
//! lost the space between them (`helloworld`). [`TextRepairer`] looks at every
//! token of a note and uses the [`Lexicon`] to decide whether removing a hyphen
//! or inserting a space turns it into real words. Cases the lexicon cannot
//! decide are left alone.
//!
//! # Examples
//!
//! ```
//! use notemend::lexicon::Lexicon;
//! use notemend::repair::repair;
//!
//! let lexicon = Lexicon::from_words(["hello", "world", "the"]);
//!
//! assert_eq!(repair("the helloworld", &lexicon, false), "the hello world");
//! ```

pub mod edit;
pub mod punctuation;
pub mod tokenizer;

use std::collections::VecDeque;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

pub use edit::{EditStrategy, RepairEdit, apply_edits};
pub use punctuation::normalize_spacing;
pub use tokenizer::{NoteToken, tokenize};

/// Repair settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairConfig {
    /// Log a warning for every token that could not be repaired.
    pub verbose: bool,
    /// How edits are written back into the note.
    pub edit_strategy: EditStrategy,
}

/// Why a token was examined but left as it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Unresolved {
    /// No split of the token yields two recognized words.
    NoDecomposition { token: String },
    /// Several splits share the best score.
    AmbiguousDecomposition {
        token: String,
        candidates: Vec<(String, String)>,
    },
}

/// Outcome of repairing one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairReport {
    /// The repaired note.
    pub text: String,
    /// Edits in the order they were recorded.
    pub edits: Vec<RepairEdit>,
    /// Tokens that were left untouched because no safe repair exists.
    pub unresolved: Vec<Unresolved>,
}

impl RepairReport {
    /// True if the note was changed in any way.
    pub fn changed(&self, original: &str) -> bool {
        self.text != original.trim()
    }
}

/// Repairs notes against a borrowed lexicon.
#[derive(Debug, Clone, Copy)]
pub struct TextRepairer<'a> {
    lexicon: &'a Lexicon,
    config: RepairConfig,
}

impl<'a> TextRepairer<'a> {
    /// Create a repairer with the default configuration.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        TextRepairer {
            lexicon,
            config: RepairConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: RepairConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &RepairConfig {
        &self.config
    }

    /// Repair `text` and return only the repaired note.
    pub fn repair(&self, text: &str) -> String {
        self.analyze(text).text
    }

    /// Repair `text` and report what was changed and what was left alone.
    pub fn analyze(&self, text: &str) -> RepairReport {
        let source = normalize_dashes(text);

        let mut edits = Vec::new();
        let mut unresolved = Vec::new();
        let mut queue: VecDeque<NoteToken> = tokenize(&source).into();

        while let Some(token) = queue.pop_front() {
            if token.text.trim().is_empty() || token.text == "-" {
                continue;
            }
            let span = token.anchor(&source);

            if token.text.contains('-') {
                let joined = token.text.replace('-', "");
                if self.lexicon.check(&joined) {
                    edits.push(RepairEdit::new(token.text, joined, span));
                    continue;
                }
            }

            if self.lexicon.check(&token.text) {
                continue;
            }

            if token.text.contains('-') {
                // Several hyphen-joined words; judge each piece on its own.
                queue.extend(token.split_hyphens(&source));
                continue;
            }

            match self.decompose(&token.text) {
                Decomposition::Split(left, right) => {
                    let replacement = format!("{left} {right}");
                    edits.push(RepairEdit::new(token.text, replacement, span));
                }
                Decomposition::None => {
                    if self.config.verbose {
                        warn!("No solution found for {}", token.text);
                    }
                    unresolved.push(Unresolved::NoDecomposition { token: token.text });
                }
                Decomposition::Ambiguous(candidates) => {
                    if self.config.verbose {
                        warn!("No unique solution found for {}", token.text);
                    }
                    unresolved.push(Unresolved::AmbiguousDecomposition {
                        token: token.text,
                        candidates,
                    });
                }
            }
        }

        let edited = apply_edits(&source, &edits, self.config.edit_strategy);
        let text = normalize_spacing(&edited).trim().to_string();

        RepairReport {
            text,
            edits,
            unresolved,
        }
    }

    /// Every split of `token` into two halves the lexicon recognizes.
    fn candidate_splits<'t>(&self, token: &'t str) -> Vec<(&'t str, &'t str)> {
        token
            .char_indices()
            .skip(1)
            .map(|(i, _)| token.split_at(i))
            .filter(|(left, right)| self.lexicon.check(left) && self.lexicon.check(right))
            .collect()
    }

    fn decompose(&self, token: &str) -> Decomposition {
        let candidates = self.candidate_splits(token);

        match candidates.as_slice() {
            [] => Decomposition::None,
            [(left, right)] => Decomposition::Split(left.to_string(), right.to_string()),
            _ => {
                // Halves that are whole known words outrank stem-only matches.
                let scores: Vec<usize> = candidates
                    .iter()
                    .map(|(left, right)| {
                        usize::from(self.lexicon.matches(left))
                            + usize::from(self.lexicon.matches(right))
                    })
                    .collect();
                let best = scores.iter().copied().max().unwrap_or(0);

                let mut winners = scores.iter().enumerate().filter(|(_, s)| **s == best);
                match (winners.next(), winners.next()) {
                    (Some((idx, _)), None) => {
                        let (left, right) = candidates[idx];
                        Decomposition::Split(left.to_string(), right.to_string())
                    }
                    _ => Decomposition::Ambiguous(
                        candidates
                            .iter()
                            .map(|(l, r)| (l.to_string(), r.to_string()))
                            .collect(),
                    ),
                }
            }
        }
    }
}

enum Decomposition {
    None,
    Split(String, String),
    Ambiguous(Vec<(String, String)>),
}

/// Replace em and en dashes by a spaced ASCII hyphen.
fn normalize_dashes(text: &str) -> String {
    text.replace(['\u{2014}', '\u{2013}'], " - ")
}

/// Repair `text` with the default edit strategy.
///
/// With `verbose` set, tokens that could not be repaired are logged at warn
/// level.
pub fn repair(text: &str, lexicon: &Lexicon, verbose: bool) -> String {
    TextRepairer::new(lexicon)
        .with_config(RepairConfig {
            verbose,
            ..RepairConfig::default()
        })
        .repair(text)
}
