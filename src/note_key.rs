//! Keys attached to notes as `<key> body </key>` tags.
//!
//! Notes can be tagged with a key by wrapping them in a pseudo-XML element,
//! e.g. `<def> a graph is a pair (V, E) </def>`. The closing tag is matched
//! case-insensitively and must be on the same line as the opening tag. Notes
//! without a tag have the key `none`.

/// Key of notes that carry no tag.
pub const NO_KEY: &str = "none";

/// A note split into its key and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyedNote<'a> {
    /// Raw key as written in the opening tag.
    pub key: &'a str,
    /// Text between the tags, trimmed.
    pub body: &'a str,
}

/// Split a tagged note into key and body. Returns `None` for untagged notes.
pub fn parse_key(note: &str) -> Option<KeyedNote<'_>> {
    let rest = note.strip_prefix('<')?;
    let key_end = rest.find('>')?;
    let key = &rest[..key_end];
    let rest = &rest[key_end + 1..];

    let line = rest.split('\n').next().unwrap_or(rest);
    let closing = format!("</{}>", key.to_ascii_lowercase());
    let body_end = line.to_ascii_lowercase().rfind(&closing)?;

    Some(KeyedNote {
        key,
        body: line[..body_end].trim(),
    })
}

/// Trimmed, lower-cased key of `note`, or [`NO_KEY`].
pub fn key_of(note: &str) -> String {
    parse_key(note)
        .map(|keyed| keyed.key.trim().to_lowercase())
        .unwrap_or_else(|| NO_KEY.to_string())
}

/// Body of a tagged note, or the whole note if it has no tag.
pub fn strip_key(note: &str) -> &str {
    parse_key(note).map(|keyed| keyed.body).unwrap_or(note)
}

/// Selects notes by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFilter {
    keys: Vec<String>,
}

impl KeyFilter {
    /// Filter accepting notes whose key is one of `keys`. An empty filter
    /// accepts every note; the key `none` selects untagged notes.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        KeyFilter {
            keys: keys
                .into_iter()
                .map(|key| key.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn accepts(&self, note: &str) -> bool {
        self.is_empty() || self.keys.contains(&key_of(note))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        let keyed = parse_key("<def> a graph is a pair </def>").unwrap();

        assert_eq!(keyed.key, "def");
        assert_eq!(keyed.body, "a graph is a pair");
    }

    #[test]
    fn test_closing_tag_case_insensitive() {
        let keyed = parse_key("<Todo>check proof</TODO>").unwrap();

        assert_eq!(keyed.key, "Todo");
        assert_eq!(keyed.body, "check proof");
        assert_eq!(key_of("<Todo>check proof</TODO>"), "todo");
    }

    #[test]
    fn test_untagged_notes() {
        assert!(parse_key("plain note").is_none());
        assert!(parse_key("<def> unterminated").is_none());
        assert!(parse_key("<def> first line\n</def>").is_none());
        assert_eq!(key_of("plain note"), NO_KEY);
        assert_eq!(strip_key("plain note"), "plain note");
        assert_eq!(strip_key("<q> why? </q>"), "why?");
    }

    #[test]
    fn test_key_filter() {
        let all = KeyFilter::default();
        assert!(all.is_empty());
        assert!(all.accepts("anything"));

        let filter = KeyFilter::new(["DEF", "none"]);
        assert!(filter.accepts("<def> x </def>"));
        assert!(filter.accepts("untagged"));
        assert!(!filter.accepts("<todo> x </todo>"));
    }
}
