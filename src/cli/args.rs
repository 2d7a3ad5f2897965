//! Command line argument parsing for the notemend CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// notemend - repair PDF note text and normalize keywords
#[derive(Parser, Debug, Clone)]
#[command(name = "notemend")]
#[command(about = "Repair hyphenation and spacing in extracted PDF notes, normalize keywords")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NotemendArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding words.t, stems.t and collected-words
    #[arg(long, env = "NOTEMEND_DATA_DIR", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NotemendArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the lexicon index from a word corpus
    #[command(name = "build-lexicon")]
    BuildLexicon(BuildLexiconArgs),

    /// Repair notes, one per line
    Repair(RepairArgs),

    /// Normalize keyword phrases
    Keyword(TextArgs),

    /// Normalize document titles
    Title(TextArgs),

    /// Normalize author names
    Name(TextArgs),
}

/// Arguments for building the lexicon
#[derive(Parser, Debug, Clone)]
pub struct BuildLexiconArgs {
    /// Newline-delimited word corpus
    #[arg(long, value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// Output path of the word index (default from configuration)
    #[arg(long, value_name = "WORDS_FILE")]
    pub words: Option<PathBuf>,

    /// Output path of the stem index (default from configuration)
    #[arg(long, value_name = "STEMS_FILE")]
    pub stems: Option<PathBuf>,
}

/// Arguments for repairing notes
#[derive(Parser, Debug, Clone)]
pub struct RepairArgs {
    /// File with one note per line (stdin if omitted)
    #[arg(value_name = "NOTES_FILE")]
    pub input: Option<PathBuf>,

    /// Only process notes with this key (repeatable, "none" for untagged notes)
    #[arg(short, long = "key", value_name = "KEY")]
    pub keys: Vec<String>,

    /// Strip <key> ... </key> tags before repairing
    #[arg(long)]
    pub remove_key: bool,

    /// Only print notes the repair changed
    #[arg(long)]
    pub diffs: bool,

    /// Replace every occurrence of a repaired fragment instead of the token itself
    #[arg(long)]
    pub literal_edits: bool,
}

/// Free text arguments, read from stdin lines when empty
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Texts to normalize
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
