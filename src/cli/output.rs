//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{NotemendArgs, OutputFormat};
use crate::error::Result;
use crate::keyword::KeywordNormalization;
use crate::lexicon::IndexStats;
use crate::repair::{RepairEdit, Unresolved};

/// Result structure for lexicon builds.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconBuildResult {
    pub words_path: String,
    pub stems_path: String,
    pub stats: IndexStats,
}

/// Result structure for one repaired note.
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteRepair {
    pub line: usize,
    pub original: String,
    pub suggestion: String,
    pub changed: bool,
    pub edits: Vec<RepairEdit>,
    pub unresolved: Vec<Unresolved>,
}

/// Result structure for keyword normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordResult {
    pub input: String,
    #[serde(flatten)]
    pub normalized: KeywordNormalization,
}

/// Result structure for title and name normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextResult {
    pub input: String,
    pub output: String,
}

/// Plain text rendering of a result.
pub trait HumanOutput {
    fn render_human(&self, args: &NotemendArgs) -> String;
}

impl HumanOutput for LexiconBuildResult {
    fn render_human(&self, _args: &NotemendArgs) -> String {
        format!(
            "Words: {} -> {}\nStems: {} -> {}\nCorpus lines: {}",
            self.stats.words,
            self.words_path,
            self.stats.stems,
            self.stems_path,
            self.stats.corpus_lines
        )
    }
}

impl HumanOutput for NoteRepair {
    fn render_human(&self, args: &NotemendArgs) -> String {
        let mut out = format!("> line {}\nOriginal:  {}", self.line, self.original);
        if self.changed {
            out.push_str(&format!("\nSuggested: {}", self.suggestion));
        }
        if args.verbosity() > 1 {
            for edit in &self.edits {
                out.push_str(&format!("\n  edit: {:?} -> {:?}", edit.original, edit.replacement));
            }
        }
        out
    }
}

impl HumanOutput for KeywordResult {
    fn render_human(&self, _args: &NotemendArgs) -> String {
        let mut out = format!("{} => {}", self.input, self.normalized.term);
        for abbreviation in &self.normalized.abbreviations {
            out.push_str(&format!(
                "\n  abbreviation: {} = {}",
                abbreviation.short_form, abbreviation.long_form
            ));
        }
        for specification in &self.normalized.specifications {
            out.push_str(&format!(
                "\n  specification: {} [{}]",
                specification.label, specification.qualifier
            ));
        }
        out
    }
}

impl HumanOutput for TextResult {
    fn render_human(&self, _args: &NotemendArgs) -> String {
        self.output.clone()
    }
}

impl<T: HumanOutput> HumanOutput for Vec<T> {
    fn render_human(&self, args: &NotemendArgs) -> String {
        self.iter()
            .map(|item| item.render_human(args))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &NotemendArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            let rendered = result.render_human(args);
            if !rendered.is_empty() {
                println!("{rendered}");
            }
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
