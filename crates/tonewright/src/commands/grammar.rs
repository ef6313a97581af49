//! Grammar command: likely grammar slips and passive voice.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use tonewright_core::grammar;

use super::read_prose;

/// Arguments for the `grammar` subcommand.
#[derive(Args, Debug)]
pub struct GrammarArgs {
    /// File to check (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Maximum acceptable number of grammar issues.
    #[arg(long)]
    pub max_issues: Option<usize>,
}

/// Check grammar and passive voice in a file.
#[instrument(name = "cmd_grammar", skip_all, fields(file = %args.file))]
pub fn cmd_grammar(
    args: GrammarArgs,
    global_json: bool,
    config_max_issues: Option<usize>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_issues = ?args.max_issues, "executing grammar command");

    let content = read_prose(&args.file, max_input_bytes)?;
    let max_issues = args.max_issues.or(config_max_issues);
    let report = grammar::check_grammar_full(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: {} sentences analyzed",
            args.file, report.sentence_count
        );

        if report.issues.is_empty() {
            println!("  Grammar issues: {}", "none detected".green());
        } else {
            println!("  Grammar issues: {}", report.issues.len().yellow());
            for issue in &report.issues {
                println!("    - {issue}");
            }
        }

        if report.passive_sentences.is_empty() {
            println!("  Passive voice: none detected");
        } else {
            println!("  Passive voice: {}", report.passive_sentences.len());
            for sentence in &report.passive_sentences {
                println!("    \"{}\"", sentence.dimmed());
            }
        }
    }

    if report.exceeds(max_issues) {
        bail!(
            "{} has {} grammar issues (max: {})",
            args.file,
            report.issues.len(),
            max_issues.unwrap_or_default(),
        );
    }

    Ok(())
}
