use anyhow::Result;
use colored::Colorize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use boggle::{parse_board_text, Coordinator};

use crate::io;

/// Runs every subdirectory of `directory` containing a `board.txt` and a
/// `dictionary.txt`. A subdirectory missing either file is silently
/// skipped — it isn't a test case. The expected word list is generated on
/// first run if absent, matching spec.md's reference-harness behavior.
pub fn run(directory: &Path, workers: Option<usize>) -> Result<()> {
    let mut passed = 0;
    let mut failed = 0;

    let mut entries: Vec<_> = fs::read_dir(directory)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    entries.sort();

    for case_dir in entries {
        let board_path = case_dir.join("board.txt");
        let dictionary_path = case_dir.join("dictionary.txt");
        if !board_path.exists() || !dictionary_path.exists() {
            continue;
        }

        let name = case_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let board_text = io::read_board(&board_path)?;
        let dictionary_text = io::read_dictionary(&dictionary_path)?;
        let board = parse_board_text(&board_text)?;

        let mut coordinator = match workers {
            Some(n) => Coordinator::new(n),
            None => Coordinator::with_default_parallelism(),
        };
        coordinator.load_dictionary_text(&dictionary_text);
        let result = coordinator.find_words(&board);

        let expected_path = case_dir.join("expected_word_list.txt");
        if !expected_path.exists() {
            io::write_expected_word_list(&expected_path, &result.words)?;
            println!("{:<30} {}", name, "generated expected word list".yellow());
            continue;
        }

        let expected: HashSet<String> = io::read_expected_word_list(&expected_path)?
            .into_iter()
            .collect();
        let found: HashSet<String> = result.words.into_iter().collect();

        if found == expected {
            println!("{:<30} {}", name, "PASS".green());
            passed += 1;
        } else {
            println!("{:<30} {}", name, "FAIL".red());
            for word in found.difference(&expected) {
                println!("  {} unexpected: {word}", "+".red());
            }
            for word in expected.difference(&found) {
                println!("  {} missing: {word}", "-".red());
            }
            failed += 1;
        }
    }

    println!();
    println!("{} passed, {} failed", passed.to_string().green(), failed.to_string().red());

    if failed > 0 {
        anyhow::bail!("{failed} test case(s) failed");
    }

    Ok(())
}
