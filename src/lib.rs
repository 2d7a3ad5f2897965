//! # notemend
//!
//! Repairs the artifacts PDF text extraction leaves in highlighted notes and
//! normalizes keyword phrases.
//!
//! ## Features
//!
//! - Lexicon-gated removal of line-wrap hyphens (`hello-world` to `helloworld`)
//! - Lexicon-gated insertion of lost spaces (`helloworld` to `hello world`)
//! - Punctuation spacing cleanup
//! - Keyword normalization: abbreviations, references and qualifiers
//! - Title and author name normalization
//!
//! ## Example
//!
//! ```
//! use notemend::prelude::*;
//!
//! let lexicon = Lexicon::from_words(["hello", "world"]);
//! assert_eq!(repair("helloworld", &lexicon, false), "hello world");
//!
//! let keyword = normalize_keyword("Markov Random Fields (MRFs)");
//! assert_eq!(keyword.term, "Markov Random Fields");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod keyword;
pub mod lexicon;
pub mod names;
pub mod note_key;
pub mod repair;
pub mod util;

pub mod prelude {
    pub use crate::config::NotemendConfig;
    pub use crate::error::{NotemendError, Result};
    pub use crate::keyword::{KeywordNormalization, normalize_keyword};
    pub use crate::lexicon::{Lexicon, LexiconConfig};
    pub use crate::names::{normalize_name, normalize_title};
    pub use crate::repair::{EditStrategy, RepairConfig, RepairReport, TextRepairer, repair};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
