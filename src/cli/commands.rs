//! Command implementations for the keypad-words CLI.

use std::time::{Duration, Instant};

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{DictionarySource, KeypadConfig};
use crate::dictionary::DEFAULT_WORD_LIST_URL;
use crate::engine::KeypadEngine;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: KeypadArgs) -> Result<()> {
    let config = build_config(&args)?;
    let engine = KeypadEngine::from_config(config)?;

    match &args.command {
        Command::Expand(digits) => expand_digits(&engine, digits, &args),
        Command::Filter(digits) => block_on(filter_digits(&engine, digits, &args)),
        Command::Resolve(digits) => block_on(resolve_digits(&engine, digits, &args)),
    }
}

/// Dictionary loads are the only await points; one thread is enough.
fn block_on<F: Future<Output = Result<()>>>(future: F) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

/// Merge the configuration file (if any) with command line overrides.
pub fn build_config(args: &KeypadArgs) -> Result<KeypadConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            KeypadConfig::from_file(path)?
        }
        None => KeypadConfig::default(),
    };

    let dictionary = &args.dictionary;
    if let Some(path) = &dictionary.dictionary_file {
        config.dictionary = DictionarySource::File { path: path.clone() };
    } else if let Some(url) = &dictionary.dictionary_url {
        config.dictionary = DictionarySource::Url { url: url.clone() };
    } else if dictionary.remote {
        config.dictionary = DictionarySource::Url {
            url: DEFAULT_WORD_LIST_URL.to_string(),
        };
    }
    if let Some(secs) = dictionary.timeout_secs {
        config.fetch_timeout = Duration::from_secs(secs);
    }
    if dictionary.strict {
        config.strict_input = true;
    }

    config.validate()?;
    Ok(config)
}

fn expand_digits(engine: &KeypadEngine, args: &DigitsArgs, cli_args: &KeypadArgs) -> Result<()> {
    let expansion = engine.expand(&args.digits)?;
    output_expansion(
        &format!("Letter combinations for {}", args.digits),
        &expansion,
        cli_args,
    )
}

async fn filter_digits(
    engine: &KeypadEngine,
    args: &DigitsArgs,
    cli_args: &KeypadArgs,
) -> Result<()> {
    let start_time = Instant::now();
    let valid = engine.filter_valid(&args.digits).await?;
    info!("Filtered {} in {:?}", args.digits, start_time.elapsed());

    output_expansion(
        &format!("Dictionary words for {}", args.digits),
        &valid,
        cli_args,
    )
}

async fn resolve_digits(
    engine: &KeypadEngine,
    args: &DigitsArgs,
    cli_args: &KeypadArgs,
) -> Result<()> {
    let start_time = Instant::now();
    let resolution = engine.resolve(&args.digits).await?;
    info!(
        "Resolved {} into {} phrases in {:?}",
        args.digits,
        resolution.final_results.len(),
        start_time.elapsed()
    );

    output_resolution(&resolution, cli_args)
}
