//! Command line argument parsing for the keypad-words CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// keypad-words - turn phone keypad digits into words
#[derive(Parser, Debug, Clone)]
#[command(name = "keypad-words")]
#[command(about = "Turn telephone keypad digits into dictionary words and phrases")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KeypadArgs {
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

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KeypadArgs {
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

/// Options that override the configured word list.
#[derive(Args, Debug, Clone, Default)]
pub struct DictionaryArgs {
    /// Newline-delimited word list file
    #[arg(long, value_name = "FILE", env = "KEYPAD_WORDS_DICTIONARY", global = true)]
    pub dictionary_file: Option<PathBuf>,

    /// Fetch the word list from this URL
    #[arg(long, value_name = "URL", conflicts_with = "dictionary_file", global = true)]
    pub dictionary_url: Option<String>,

    /// Fetch the default remote English word list
    #[arg(long, conflicts_with_all = ["dictionary_file", "dictionary_url"], global = true)]
    pub remote: bool,

    /// Seconds to wait for the word list to load
    #[arg(long, value_name = "SECONDS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Reject characters other than 0-9
    #[arg(long, global = true)]
    pub strict: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every letter combination per run
    Expand(DigitsArgs),

    /// List the combinations that are dictionary words
    Filter(DigitsArgs),

    /// Resolve the digits into words and phrases, splitting runs as needed
    Resolve(DigitsArgs),
}

/// The digit string to work on.
#[derive(Args, Debug, Clone)]
pub struct DigitsArgs {
    /// Keypad digits, e.g. 2281
    #[arg(value_name = "DIGITS")]
    pub digits: String,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_command() {
        let args = KeypadArgs::try_parse_from([
            "keypad-words",
            "resolve",
            "2281",
            "--format",
            "json",
            "--dictionary-file",
            "words.txt",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(
            args.dictionary.dictionary_file,
            Some(PathBuf::from("words.txt"))
        );
        match args.command {
            Command::Resolve(digits) => assert_eq!(digits.digits, "2281"),
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = KeypadArgs::try_parse_from(["keypad-words", "expand", "98"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = KeypadArgs::try_parse_from(["keypad-words", "-vvv", "expand", "98"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args =
            KeypadArgs::try_parse_from(["keypad-words", "-v", "--quiet", "expand", "98"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_conflicting_dictionary_sources() {
        let result = KeypadArgs::try_parse_from([
            "keypad-words",
            "filter",
            "98",
            "--remote",
            "--dictionary-url",
            "https://example.com/words.txt",
        ]);
        assert!(result.is_err());
    }
}
