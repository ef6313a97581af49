//! Enhance command: rewrite text in a requested tone.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, info, instrument};

use tonewright_core::{ToneFlag, ToneOptions, enhance};

use super::read_input_file;

/// Arguments for the `enhance` subcommand.
#[derive(Args, Debug)]
pub struct EnhanceArgs {
    /// File to rewrite (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Tones to apply (comma-separated). Omit to use the configured tones.
    #[arg(long, value_delimiter = ',', value_enum)]
    pub tone: Vec<ToneFlag>,

    /// Write the result here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct EnhanceOutput<'a> {
    text: &'a str,
    tone: ToneOptions,
}

/// Rewrite a file and print or save the result.
#[instrument(name = "cmd_enhance", skip_all, fields(file = %args.file))]
pub fn cmd_enhance(
    args: EnhanceArgs,
    global_json: bool,
    config_tone: ToneOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, tone = ?args.tone, "executing enhance command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let tone = if args.tone.is_empty() {
        config_tone
    } else {
        ToneOptions::from_flags(&args.tone)
    };
    let enhanced = enhance(&content, &tone);

    let rendered = if global_json {
        serde_json::to_string_pretty(&EnhanceOutput {
            text: &enhanced,
            tone,
        })?
    } else {
        enhanced
    };

    match args.output {
        Some(ref path) => {
            let mut body = rendered;
            if !body.ends_with('\n') {
                body.push('\n');
            }
            std::fs::write(path.as_std_path(), body)
                .with_context(|| format!("failed to write {path}"))?;
            info!(output = %path, "enhanced text written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
