//! Title and author name normalization.

use crate::keyword::fold_to_ascii;

/// Upper-case the first letter of every run of letters, lower-case the rest.
///
/// Any non-letter starts a new word, so `o'neil` becomes `O'Neil` and
/// `hello-world` becomes `Hello-World`.
pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            output.push(c);
            in_word = false;
        }
    }

    output
}

/// Trim and title-case a document title.
pub fn normalize_title(title: &str) -> String {
    title_case(title.trim())
}

/// Strip accents and other non-ASCII characters from an author name, then
/// trim and title-case it.
pub fn normalize_name(name: &str) -> String {
    title_case(fold_to_ascii(name).trim())
}
