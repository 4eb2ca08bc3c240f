//! Command-line argument parsing for the headless driver
//!
//! Supports:
//! - Opening a file into the engine
//! - Applying a JSON script of operations
//! - Writing the result to a file or stdout
//! - Reporting misspelled words

use clap::Parser;
use std::path::PathBuf;

/// Apply editing operations to a text file
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Headless text editing engine")]
pub struct CliArgs {
    /// File to open before applying operations
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// JSON array of operations to apply, e.g. [{"op":"insert","ch":"x"}]
    #[arg(short, long, value_name = "OPS.json")]
    pub script: Option<PathBuf>,

    /// Word-per-line dictionary for spell-checking
    #[arg(short, long, value_name = "WORDS")]
    pub dictionary: Option<PathBuf>,

    /// Write the resulting text here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print misspelled words (start..end, word) after applying operations
    #[arg(long)]
    pub spell_check: bool,

    /// Override the configured undo history limit
    #[arg(long, value_name = "N")]
    pub history_limit: Option<usize>,
}

/// Where the resulting text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub input: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
    pub output: OutputTarget,
    pub spell_check: bool,
    pub history_limit: Option<usize>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.file.is_none() && self.script.is_none() {
            return Err("Nothing to do: pass a FILE and/or --script".to_string());
        }
        if self.history_limit == Some(0) {
            return Err("--history-limit must be at least 1".to_string());
        }

        let output = match self.output {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        };

        Ok(StartupConfig {
            input: self.file,
            script: self.script,
            dictionary: self.dictionary,
            output,
            spell_check: self.spell_check,
            history_limit: self.history_limit,
        })
    }
}
