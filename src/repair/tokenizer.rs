//! Note tokenizer that remembers where each token sits in the source text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Characters removed from a chunk before it is looked up in the lexicon.
pub const STRIPPED_PUNCTUATION: &[char] =
    &['.', ',', '!', '?', ':', ';', '(', ')', '{', '}', '[', ']'];

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("bracket pattern is valid"));

/// A whitespace-delimited unit of a note, stripped of punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteToken {
    /// Token text as looked up in the lexicon.
    pub text: String,
    /// Byte range of `text` in the source, when it is a contiguous slice of it.
    pub span: Option<Range<usize>>,
    /// Byte range of the whitespace chunk the token was read from.
    pub chunk: Range<usize>,
}

impl NoteToken {
    pub fn new<S: Into<String>>(
        text: S,
        span: Option<Range<usize>>,
        chunk: Range<usize>,
    ) -> Self {
        NoteToken {
            text: text.into(),
            span,
            chunk,
        }
    }

    /// Where `text` occurs in `source`: the recorded span, or else the first
    /// occurrence of `text` inside the token's chunk.
    pub fn anchor(&self, source: &str) -> Option<Range<usize>> {
        if let Some(span) = &self.span {
            return Some(span.clone());
        }
        if self.text.is_empty() {
            return None;
        }

        let chunk = source.get(self.chunk.clone())?;
        chunk
            .find(self.text.as_str())
            .map(|pos| self.chunk.start + pos..self.chunk.start + pos + self.text.len())
    }

    /// Split on hyphens, keeping the span of every piece.
    ///
    /// Pieces of a token without a span are located in `source` one after the
    /// other, left to right within the chunk. A piece that cannot be found
    /// keeps no span and the remaining part of the chunk.
    pub fn split_hyphens(&self, source: &str) -> Vec<NoteToken> {
        let mut pieces = Vec::new();

        match &self.span {
            Some(span) => {
                let mut offset = span.start;
                for piece in self.text.split('-') {
                    let piece_span = offset..offset + piece.len();
                    pieces.push(NoteToken::new(piece, Some(piece_span), self.chunk.clone()));
                    offset += piece.len() + 1;
                }
            }
            None => {
                let mut cursor = self.chunk.start;
                for piece in self.text.split('-') {
                    let rest = cursor..self.chunk.end;
                    let found = match source.get(rest.clone()) {
                        Some(rest) if !piece.is_empty() => rest.find(piece),
                        _ => None,
                    };
                    match found {
                        Some(pos) => {
                            let start = cursor + pos;
                            cursor = start + piece.len();
                            pieces.push(NoteToken::new(
                                piece,
                                Some(start..cursor),
                                self.chunk.clone(),
                            ));
                        }
                        None => pieces.push(NoteToken::new(piece, None, rest)),
                    }
                }
            }
        }

        pieces
    }
}

/// Tokenize `text`.
///
/// Bracketed citation fragments such as `[12]` act as separators and their
/// content is never tokenized. Each remaining whitespace-delimited chunk has
/// the characters in [`STRIPPED_PUNCTUATION`] removed; chunks that end up empty
/// are dropped.
pub fn tokenize(text: &str) -> Vec<NoteToken> {
    let mut tokens = Vec::new();
    let mut segment_start = 0;

    for bracket in BRACKETED.find_iter(text) {
        push_segment_tokens(text, segment_start..bracket.start(), &mut tokens);
        segment_start = bracket.end();
    }
    push_segment_tokens(text, segment_start..text.len(), &mut tokens);

    tokens
}

fn push_segment_tokens(text: &str, segment: Range<usize>, tokens: &mut Vec<NoteToken>) {
    let base = segment.start;
    let segment = &text[segment];

    for (offset, chunk) in whitespace_chunks(segment) {
        let stripped: String = chunk
            .chars()
            .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
            .collect();
        if stripped.is_empty() {
            continue;
        }

        let start = base + offset;
        let span = chunk
            .find(stripped.as_str())
            .map(|pos| start + pos..start + pos + stripped.len());
        tokens.push(NoteToken::new(stripped, span, start..start + chunk.len()));
    }
}

/// Maximal runs of non-whitespace characters together with their byte offset.
fn whitespace_chunks(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut rest = text;
    let mut consumed = 0;

    std::iter::from_fn(move || {
        let start = rest.find(|c: char| !c.is_whitespace())?;
        let len = rest[start..]
            .find(char::is_whitespace)
            .unwrap_or(rest.len() - start);

        let offset = consumed + start;
        let chunk = &rest[start..start + len];
        rest = &rest[start + len..];
        consumed = offset + len;

        Some((offset, chunk))
    })
}
