//! One-time derivation of the lexicon index from a raw word corpus.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::stem::{PorterStemmer, Stemmer};
use crate::error::{NotemendError, Result};

/// Counts reported by [`build_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Non-empty lines read from the corpus.
    pub corpus_lines: usize,
    /// Distinct words written.
    pub words: usize,
    /// Distinct stems written.
    pub stems: usize,
}

/// Build `words_dst` and `stems_dst` from the newline-delimited `corpus`.
///
/// Words are trimmed, lower-cased, deduplicated and sorted. Stems are derived
/// from the deduplicated words and are themselves deduplicated and sorted, so
/// the output only depends on the set of words in the corpus.
pub fn build_index<P, Q, R>(corpus: P, stems_dst: Q, words_dst: R) -> Result<IndexStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let reader = BufReader::new(File::open(corpus.as_ref())?);

    let mut corpus_lines = 0;
    let mut words = BTreeSet::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        corpus_lines += 1;
        words.insert(word.to_lowercase());
    }

    if words.is_empty() {
        return Err(NotemendError::invalid_argument(format!(
            "corpus {} contains no words",
            corpus.as_ref().display()
        )));
    }

    let stemmer = PorterStemmer::new();
    let stems: BTreeSet<String> = words.iter().map(|word| stemmer.stem(word)).collect();

    write_entries(words_dst.as_ref(), &words)?;
    write_entries(stems_dst.as_ref(), &stems)?;

    info!(
        "Wrote {} words to {} and {} stems to {}",
        words.len(),
        words_dst.as_ref().display(),
        stems.len(),
        stems_dst.as_ref().display()
    );

    Ok(IndexStats {
        corpus_lines,
        words: words.len(),
        stems: stems.len(),
    })
}

fn write_entries(path: &Path, entries: &BTreeSet<String>) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    writer.flush()?;

    Ok(())
}
