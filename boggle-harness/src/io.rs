//! File loading helpers for the CLI harness. The library core only ever
//! sees raw bytes/strings; all path handling lives here, at the "external
//! collaborator" layer spec.md keeps out of the core contract.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn read_board(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read board file {path:?}"))
}

pub fn read_dictionary(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary file {path:?}"))
}

pub fn read_expected_word_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read expected word list {path:?}"))?;
    Ok(text.lines().map(str::to_string).collect())
}

pub fn write_expected_word_list(path: &Path, words: &[String]) -> Result<()> {
    let mut sorted = words.to_vec();
    sorted.sort();
    let text = sorted.join("\n") + "\n";
    fs::write(path, text)
        .with_context(|| format!("failed to write expected word list {path:?}"))
}
