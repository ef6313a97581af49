//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use tonewright_core::markdown;

pub mod analyze;
pub mod enhance;
pub mod grammar;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

/// Path that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a file (or stdin for `-`) and validate its size against the
/// configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    let mut stdin = std::io::stdin().lock();
    match max_bytes {
        // One byte past the limit is enough to detect oversize input.
        Some(max) => {
            stdin
                .by_ref()
                .take(max as u64 + 1)
                .read_to_end(&mut bytes)
                .context("failed to read stdin")?;
            if bytes.len() > max {
                anyhow::bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            stdin
                .read_to_end(&mut bytes)
                .context("failed to read stdin")?;
        }
    }
    String::from_utf8(bytes).context("stdin is not valid UTF-8")
}

/// Whether `path` names a markdown file.
pub fn is_markdown(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

/// Read input for the analysis commands, stripping markdown to prose.
pub fn read_prose(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    if is_markdown(path) {
        Ok(markdown::strip_to_prose(&content))
    } else {
        Ok(content)
    }
}
