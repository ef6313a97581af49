//! Analyze command: readability, vocabulary, passive voice, suggestions.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use tonewright_core::TextAnalysis;
use tonewright_core::analysis;

use super::read_prose;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Minimum acceptable Flesch Reading Ease score (0–100).
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Analyze a file and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_score: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing analyze command");

    let content = read_prose(&args.file, max_input_bytes)?;
    let min_score = args.min_score.or(config_min_score);
    let report = analysis::analyze(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &report);
    }

    if report.below(min_score) {
        bail!(
            "{} readability score {:.1} is below minimum {:.1}",
            args.file,
            report.readability_score,
            min_score.unwrap_or_default(),
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, report: &TextAnalysis) {
    println!("{}", file.bold());

    let score = format!("{:.1}", report.readability_score);
    let score = if report.readability_score >= 60.0 {
        score.green().to_string()
    } else if report.readability_score >= 30.0 {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    };
    println!(
        "\n  {} {} ({})",
        "Readability:".cyan(),
        score,
        report.readability_level,
    );
    println!(
        "  {} {} words, {} sentences, {} paragraphs",
        "Counts:".cyan(),
        report.word_count,
        report.sentence_count,
        report.paragraph_count,
    );
    println!(
        "  {} {:.1} chars/word, {:.1} words/sentence",
        "Averages:".cyan(),
        report.average_word_length,
        report.average_sentence_length,
    );

    if !report.complex_words.is_empty() {
        println!(
            "\n  {} {}",
            "Complex words:".yellow(),
            report.complex_words.join(", ")
        );
    }

    if !report.passive_voices.is_empty() {
        println!("\n  {}", "Passive voice:".yellow());
        for sentence in &report.passive_voices {
            println!("    - {sentence}");
        }
    }

    if !report.suggestions.is_empty() {
        println!("\n  {}", "Suggestions:".cyan());
        for suggestion in &report.suggestions {
            println!("    - {suggestion}");
        }
    }
}
