//! Read-only word and stem index used to decide whether a fragment is a word.
//!
//! A [`Lexicon`] holds two sets: the lower-cased surface forms of every word in
//! the source word list, and their Porter stems. [`Lexicon::check`] answers
//! "is this plausibly a word" by stem, [`Lexicon::matches`] answers "is this
//! exactly a known word". Both sets are frozen once the lexicon is built.
//!
//! On disk the index is two sorted, deduplicated, newline-delimited files
//! (`words.t` and `stems.t`). When they are missing they are derived once from
//! a raw corpus file, see [`builder::build_index`].

pub mod builder;

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use ahash::AHashSet;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::stem::{PorterStemmer, Stemmer};
use crate::error::{NotemendError, Result};

pub use builder::{IndexStats, build_index};

/// File name of the whole-word index inside a data directory.
pub const WORDS_FILE: &str = "words.t";
/// File name of the stem index inside a data directory.
pub const STEMS_FILE: &str = "stems.t";
/// File name of the raw word corpus inside a data directory.
pub const CORPUS_FILE: &str = "collected-words";

/// Locations of the lexicon index files and of the corpus they are built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Path of the stem index.
    pub stems_path: PathBuf,
    /// Path of the whole-word index.
    pub words_path: PathBuf,
    /// Raw corpus used to build the index when it does not exist yet.
    pub corpus_path: Option<PathBuf>,
}

impl LexiconConfig {
    /// Standard file layout inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        LexiconConfig {
            stems_path: dir.join(STEMS_FILE),
            words_path: dir.join(WORDS_FILE),
            corpus_path: Some(dir.join(CORPUS_FILE)),
        }
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self::in_dir("data")
    }
}

/// Immutable word and stem index.
///
/// `Lexicon` is `Send + Sync`; build it once and share it by reference with
/// every repair call.
pub struct Lexicon {
    words: AHashSet<String>,
    stems: AHashSet<String>,
    stemmer: Box<dyn Stemmer>,
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("words", &self.words.len())
            .field("stems", &self.stems.len())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl Lexicon {
    /// Build a lexicon in memory from a list of words.
    ///
    /// Words are trimmed and lower-cased; blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_words_with_stemmer(words, Box::new(PorterStemmer::new()))
    }

    /// Build a lexicon in memory with a custom stemmer.
    pub fn from_words_with_stemmer<I, S>(words: I, stemmer: Box<dyn Stemmer>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: AHashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        let stems = words.iter().map(|word| stemmer.stem(word)).collect();

        Lexicon {
            words,
            stems,
            stemmer,
        }
    }

    /// Open a prebuilt index.
    ///
    /// Both files are read as one entry per line; entries are expected to be
    /// lower-cased already.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(stems_path: P, words_path: Q) -> Result<Self> {
        let stems = read_entries(stems_path.as_ref())?;
        let words = read_entries(words_path.as_ref())?;

        debug!(
            "Opened lexicon with {} words and {} stems",
            words.len(),
            stems.len()
        );

        Ok(Lexicon {
            words,
            stems,
            stemmer: Box::new(PorterStemmer::new()),
        })
    }

    /// Open the index described by `config`, building it from the corpus first
    /// if either index file is missing.
    ///
    /// Fails with [`NotemendError::LexiconUnavailable`] when the index is
    /// missing and there is no corpus to build it from.
    pub fn load(config: &LexiconConfig) -> Result<Self> {
        if !config.stems_path.is_file() || !config.words_path.is_file() {
            let corpus = match &config.corpus_path {
                Some(corpus) if corpus.is_file() => corpus,
                Some(corpus) => {
                    return Err(NotemendError::lexicon_unavailable(format!(
                        "index files {} / {} are missing and corpus {} does not exist",
                        config.stems_path.display(),
                        config.words_path.display(),
                        corpus.display()
                    )));
                }
                None => {
                    return Err(NotemendError::lexicon_unavailable(format!(
                        "index files {} / {} are missing and no corpus is configured",
                        config.stems_path.display(),
                        config.words_path.display()
                    )));
                }
            };

            info!("Building lexicon index from {}", corpus.display());
            build_index(corpus, &config.stems_path, &config.words_path)?;
        }

        Self::open(&config.stems_path, &config.words_path)
    }

    /// True if the stem of `candidate` is a known stem.
    pub fn check(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }

        let normed = self.stemmer.stem(&candidate.to_lowercase());
        self.stems.contains(&normed)
    }

    /// True if `candidate`, lower-cased, is a known word.
    pub fn matches(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }

        self.words.contains(&candidate.to_lowercase())
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct stems.
    pub fn stem_count(&self) -> usize {
        self.stems.len()
    }
}

fn read_entries(path: &Path) -> Result<AHashSet<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = AHashSet::new();

    for line in reader.lines() {
        let line = line?;
        let entry = line.trim();
        if !entry.is_empty() {
            entries.insert(entry.to_string());
        }
    }

    Ok(entries)
}
