//! Command implementations for the notemend CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::NotemendConfig;
use crate::error::{NotemendError, Result};
use crate::keyword::KeywordNormalizer;
use crate::lexicon::{Lexicon, LexiconConfig, build_index};
use crate::names::{normalize_name, normalize_title};
use crate::note_key::{KeyFilter, strip_key};
use crate::repair::{EditStrategy, TextRepairer};

/// Execute a CLI command.
pub fn execute_command(args: NotemendArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    match &args.command {
        Command::BuildLexicon(build_args) => build_lexicon(build_args, &config, &args),
        Command::Repair(repair_args) => repair_notes(repair_args, &config, &args),
        Command::Keyword(text_args) => normalize_keywords(text_args, &config, &args),
        Command::Title(text_args) => normalize_texts(text_args, normalize_title, &args),
        Command::Name(text_args) => normalize_texts(text_args, normalize_name, &args),
    }
}

/// Configuration file (or defaults) with command line overrides applied.
pub fn resolve_config(args: &NotemendArgs) -> Result<NotemendConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            NotemendConfig::from_file(path)?
        }
        None => NotemendConfig::default(),
    };

    if let Some(dir) = &args.data_dir {
        config.lexicon = LexiconConfig::in_dir(dir);
    }

    Ok(config)
}

fn build_lexicon(
    build_args: &BuildLexiconArgs,
    config: &NotemendConfig,
    args: &NotemendArgs,
) -> Result<()> {
    let words_path = build_args
        .words
        .clone()
        .unwrap_or_else(|| config.lexicon.words_path.clone());
    let stems_path = build_args
        .stems
        .clone()
        .unwrap_or_else(|| config.lexicon.stems_path.clone());

    let stats = build_index(&build_args.corpus, &stems_path, &words_path)?;

    output_result(
        "Lexicon built",
        &LexiconBuildResult {
            words_path: words_path.display().to_string(),
            stems_path: stems_path.display().to_string(),
            stats,
        },
        args,
    )
}

fn repair_notes(
    repair_args: &RepairArgs,
    config: &NotemendConfig,
    args: &NotemendArgs,
) -> Result<()> {
    if repair_args.keys.iter().any(|key| key.trim().is_empty()) {
        return Err(NotemendError::invalid_argument("--key must not be empty"));
    }

    let lexicon = Lexicon::load(&config.lexicon)?;
    info!(
        "Loaded lexicon with {} words and {} stems",
        lexicon.word_count(),
        lexicon.stem_count()
    );

    let mut repair_config = config.repair;
    repair_config.verbose |= args.verbose > 0;
    if repair_args.literal_edits {
        repair_config.edit_strategy = EditStrategy::Literal;
    }
    let repairer = TextRepairer::new(&lexicon).with_config(repair_config);

    let filter = KeyFilter::new(&repair_args.keys);
    if !filter.is_empty() {
        info!("Selecting notes with keys {:?}", repair_args.keys);
    }
    let notes: Vec<(usize, String)> = read_lines(repair_args.input.as_deref())?
        .into_iter()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty() && filter.accepts(line))
        .map(|(line_no, line)| {
            let note = if repair_args.remove_key {
                strip_key(&line).to_string()
            } else {
                line
            };
            (line_no, note)
        })
        .collect();

    let mut results: Vec<NoteRepair> = notes
        .par_iter()
        .map(|(line, note)| {
            let report = repairer.analyze(note);
            NoteRepair {
                line: *line,
                original: note.trim().to_string(),
                changed: report.changed(note),
                suggestion: report.text,
                edits: report.edits,
                unresolved: report.unresolved,
            }
        })
        .collect();

    if repair_args.diffs {
        results.retain(|result| result.changed);
    }

    output_result("Repaired notes", &results, args)
}

fn normalize_keywords(
    text_args: &TextArgs,
    config: &NotemendConfig,
    args: &NotemendArgs,
) -> Result<()> {
    let normalizer = KeywordNormalizer::new(config.keyword);

    let results: Vec<KeywordResult> = texts_or_stdin(text_args)?
        .into_iter()
        .map(|input| KeywordResult {
            normalized: normalizer.normalize(&input),
            input,
        })
        .collect();

    output_result("Normalized keywords", &results, args)
}

fn normalize_texts(
    text_args: &TextArgs,
    normalize: fn(&str) -> String,
    args: &NotemendArgs,
) -> Result<()> {
    let results: Vec<TextResult> = texts_or_stdin(text_args)?
        .into_iter()
        .map(|input| TextResult {
            output: normalize(&input),
            input,
        })
        .collect();

    output_result("Normalized", &results, args)
}

fn texts_or_stdin(text_args: &TextArgs) -> Result<Vec<String>> {
    if !text_args.texts.is_empty() {
        return Ok(text_args.texts.clone());
    }

    Ok(read_lines(None)?
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect())
}

/// Lines of `path`, or of stdin when no path is given.
fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    let lines = match path {
        Some(path) => BufReader::new(File::open(path)?)
            .lines()
            .collect::<io::Result<Vec<_>>>()?,
        None => io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?,
    };
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsString;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_data_dir_overrides_lexicon_paths() {
        let args = NotemendArgs::try_parse_from([
            "notemend",
            "--data-dir",
            "/srv/lexicon",
            "title",
            "x",
        ])
        .unwrap();

        let config = resolve_config(&args).unwrap();
        assert_eq!(
            config.lexicon.words_path,
            PathBuf::from("/srv/lexicon/words.t")
        );
    }

    #[test]
    fn test_read_lines_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "first\n\nthird\n").unwrap();

        assert_eq!(read_lines(Some(path.as_path())).unwrap(), vec!["first", "", "third"]);
    }

    #[test]
    fn test_repair_command_without_lexicon_fails() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, "helloworld\n").unwrap();

        let args = NotemendArgs::try_parse_from([
            OsString::from("notemend"),
            OsString::from("--data-dir"),
            dir.path().as_os_str().to_os_string(),
            OsString::from("repair"),
            notes.into_os_string(),
        ])
        .unwrap();

        assert!(matches!(
            execute_command(args),
            Err(NotemendError::LexiconUnavailable(_))
        ));
    }

    #[test]
    fn test_blank_key_is_rejected() {
        let args =
            NotemendArgs::try_parse_from(["notemend", "repair", "notes.txt", "--key", " "])
                .unwrap();

        assert!(matches!(
            execute_command(args),
            Err(NotemendError::InvalidArgument(_))
        ));
    }
}
