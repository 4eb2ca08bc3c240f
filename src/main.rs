use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::Path;

use quill::cli::{CliArgs, OutputTarget};
use quill::io::load_dictionary;
use quill::{Dictionary, EditorConfig, EditorEngine, Operation};

/// Load the dictionary named on the command line (must exist) or the
/// configured one (falls back to an empty dictionary).
fn resolve_dictionary(explicit: Option<&Path>, config: &EditorConfig) -> Result<Dictionary> {
    if let Some(path) = explicit {
        return load_dictionary(path)
            .with_context(|| format!("Failed to load dictionary {}", path.display()));
    }

    let Some(path) = config.dictionary_path() else {
        return Ok(Dictionary::new());
    };
    match load_dictionary(&path) {
        Ok(dictionary) => Ok(dictionary),
        Err(e) => {
            tracing::warn!(
                "No dictionary loaded from {}: {}; every word will be flagged",
                path.display(),
                e
            );
            Ok(Dictionary::new())
        }
    }
}

fn main() -> Result<()> {
    quill::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    let mut config = EditorConfig::load();
    if let Some(limit) = startup.history_limit {
        config.history_limit = limit;
    }

    let dictionary = resolve_dictionary(startup.dictionary.as_deref(), &config)?;
    let mut engine = EditorEngine::from_config(&config, dictionary);

    if let Some(path) = &startup.input {
        engine.open_file(path)?;
    }

    if let Some(script) = &startup.script {
        let json = std::fs::read_to_string(script)
            .with_context(|| format!("Failed to read script {}", script.display()))?;
        let ops: Vec<Operation> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse script {}", script.display()))?;
        tracing::info!("Applying {} operations from {}", ops.len(), script.display());
        for op in ops {
            engine.execute(op)?;
        }
    }

    match &startup.output {
        OutputTarget::File(path) => engine.save_file(path)?,
        OutputTarget::Stdout => print!("{}", engine.text()),
    }

    if startup.spell_check {
        for span in engine.spell_check() {
            eprintln!(
                "{}..{}\t{}",
                span.selection.base, span.selection.end, span.word
            );
        }
    }

    Ok(())
}
