//! Recorded repairs and the strategies for applying them to the source text.

use std::ops::Range;

use log::debug;
use serde::{Deserialize, Serialize};

/// How recorded edits are written back into the note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditStrategy {
    /// Replace each token at the byte range it was read from, right to left.
    #[default]
    Positional,
    /// Replace every occurrence of each fragment in the whole note, in the
    /// order the edits were recorded. Also rewrites unrelated occurrences of
    /// the same fragment.
    Literal,
}

/// A single repair: `original` becomes `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairEdit {
    pub original: String,
    pub replacement: String,
    /// Where `original` was read from in the source text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Range<usize>>,
}

impl RepairEdit {
    pub fn new<S: Into<String>, T: Into<String>>(
        original: S,
        replacement: T,
        span: Option<Range<usize>>,
    ) -> Self {
        RepairEdit {
            original: original.into(),
            replacement: replacement.into(),
            span,
        }
    }
}

/// Apply `edits` to `text` with the given strategy.
pub fn apply_edits(text: &str, edits: &[RepairEdit], strategy: EditStrategy) -> String {
    match strategy {
        EditStrategy::Positional => apply_positional(text, edits),
        EditStrategy::Literal => apply_literal(text, edits),
    }
}

fn apply_literal(text: &str, edits: &[RepairEdit]) -> String {
    edits.iter().fold(text.to_string(), |acc, edit| {
        acc.replace(&edit.original, &edit.replacement)
    })
}

fn apply_positional(text: &str, edits: &[RepairEdit]) -> String {
    let mut anchored: Vec<(&Range<usize>, &RepairEdit)> = Vec::with_capacity(edits.len());
    for edit in edits {
        match &edit.span {
            Some(span) if text.get(span.clone()) == Some(edit.original.as_str()) => {
                anchored.push((span, edit));
            }
            _ => debug!(
                "Skipping edit {:?} -> {:?}: no anchor in source text",
                edit.original, edit.replacement
            ),
        }
    }

    anchored.sort_by(|a, b| b.0.start.cmp(&a.0.start));

    let mut output = text.to_string();
    let mut limit = usize::MAX;
    for (span, edit) in anchored {
        if span.end > limit {
            debug!("Skipping overlapping edit {:?}", edit.original);
            continue;
        }
        output.replace_range(span.clone(), &edit.replacement);
        limit = span.start;
    }

    output
}
