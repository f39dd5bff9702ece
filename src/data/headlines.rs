use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Splits newline-delimited text into headlines.
///
/// Lines are returned as-is apart from a trailing `\r`. Blank lines are kept here;
/// the aggregator decides what counts as empty.
pub fn parse_headlines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Reads headlines from a file, or from stdin when `path` is `-`.
pub fn read_headlines(path: &Path) -> Result<Vec<String>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read headlines from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .context(format!("Failed to read headlines file: {}", path.display()))?
    };
    Ok(parse_headlines(&text))
}
