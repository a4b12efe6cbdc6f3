//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::args::{KeypadArgs, OutputFormat};
use crate::error::Result;
use crate::permutation::Expansion;
use crate::resolve::{Resolution, ResolutionTree};

/// Output a per-run expansion in the selected format.
pub fn output_expansion(message: &str, expansion: &Expansion, args: &KeypadArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            print!("{}", render_expansion(expansion));
            Ok(())
        }
        OutputFormat::Json => output_json(expansion, args),
    }
}

/// Output a resolution in the selected format.
pub fn output_resolution(resolution: &Resolution, args: &KeypadArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("Resolution:");
                print!("{}", render_tree(&resolution.valid_permutations));
                println!();
            }
            print!("{}", render_phrases(&resolution.final_results, args.verbosity() > 0));
            Ok(())
        }
        OutputFormat::Json => output_json(resolution, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &KeypadArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// One line per run: `key: candidate candidate ...`.
pub fn render_expansion(expansion: &Expansion) -> String {
    let mut out = String::new();
    match expansion.runs() {
        None => out.push_str("(empty input)\n"),
        Some(runs) => {
            for (key, candidates) in runs {
                let _ = writeln!(out, "{key}: {}", format_words(candidates));
            }
        }
    }
    out
}

/// Indented view of how each run was resolved or split.
pub fn render_tree(tree: &ResolutionTree) -> String {
    let mut out = String::new();
    match tree {
        ResolutionTree::Words(words) => {
            let _ = writeln!(out, "{}", format_words(words));
        }
        ResolutionTree::Segments(_) => write_tree(&mut out, tree, 0),
    }
    out
}

fn write_tree(out: &mut String, tree: &ResolutionTree, depth: usize) {
    let Some(children) = tree.segments() else {
        return;
    };
    let indent = "  ".repeat(depth);
    for (key, child) in children {
        match child {
            ResolutionTree::Words(words) => {
                let _ = writeln!(out, "{indent}{key}: {}", format_words(words));
            }
            ResolutionTree::Segments(_) => {
                let _ = writeln!(out, "{indent}{key}");
                write_tree(out, child, depth + 1);
            }
        }
    }
}

/// Phrases one per line, optionally preceded by a count.
pub fn render_phrases(phrases: &[String], with_summary: bool) -> String {
    let mut out = String::new();
    if with_summary {
        match phrases.len() {
            0 => out.push_str("No phrases found\n"),
            1 => out.push_str("1 phrase:\n"),
            n => {
                let _ = writeln!(out, "{n} phrases:");
            }
        }
    }
    for phrase in phrases {
        out.push_str(phrase);
        out.push('\n');
    }
    out
}

fn format_words(words: &[String]) -> String {
    if words.is_empty() {
        "(none)".to_string()
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;
    use crate::permutation::expand;
    use crate::resolve::resolve_with;

    #[test]
    fn test_render_expansion() {
        assert_eq!(
            render_expansion(&expand("213")),
            "2: A B C\n1: 1\n3: D E F\n"
        );
        assert_eq!(render_expansion(&expand("")), "(empty input)\n");
    }

    #[test]
    fn test_render_tree() {
        let words: WordSet = ["ab", "ve"].into_iter().collect();
        let resolution = resolve_with("22283", &words);
        assert_eq!(
            render_tree(&resolution.valid_permutations),
            "22: AB\n283\n  2: (none)\n  83: VE\n"
        );
    }

    #[test]
    fn test_render_phrases() {
        let phrases = vec!["AB TF".to_string(), "AB VE".to_string()];
        assert_eq!(render_phrases(&phrases, true), "2 phrases:\nAB TF\nAB VE\n");
        assert_eq!(render_phrases(&phrases, false), "AB TF\nAB VE\n");
        assert_eq!(render_phrases(&[], true), "No phrases found\n");
    }
}
