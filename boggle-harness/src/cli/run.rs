use anyhow::Result;
use colored::Colorize;
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use boggle::{parse_board_text, Coordinator};

use crate::io;

pub fn run(
    board_path: &Path,
    dictionary_path: &Path,
    expected_path: Option<&Path>,
    workers: Option<usize>,
    baseline: bool,
) -> Result<()> {
    let board_text = io::read_board(board_path)?;
    let dictionary_text = io::read_dictionary(dictionary_path)?;
    let board = parse_board_text(&board_text)?;

    let mut coordinator = match workers {
        Some(n) => Coordinator::new(n),
        None => Coordinator::with_default_parallelism(),
    };
    coordinator.load_dictionary_text(&dictionary_text);

    println!("{board}");

    let start = Instant::now();
    let result = coordinator.find_words(&board);
    let elapsed = start.elapsed();

    println!("{:17} {}", "Workers:".green(), coordinator.worker_count());
    println!("{:17} {}", "Words found:".bright_cyan(), result.words.len());
    println!("{:17} {}", "Score:".bright_cyan(), result.score);
    println!("{:17} {}ms", "Duration:".red(), elapsed.as_millis());

    if baseline {
        let mut naive_board = board.clone();
        let baseline_result = boggle::baseline::find_words_naive(&mut naive_board, &dictionary_text);
        let trie_words: HashSet<_> = result.words.iter().cloned().collect();
        let baseline_words: HashSet<_> = baseline_result.words.into_iter().collect();

        if trie_words == baseline_words && result.score == baseline_result.score {
            println!("{}", "Baseline: agrees with trie engine".green());
        } else {
            println!("{}", "Baseline: DISAGREES with trie engine".red());
            for word in trie_words.difference(&baseline_words) {
                println!("  {} only in trie result: {word}", "-".red());
            }
            for word in baseline_words.difference(&trie_words) {
                println!("  {} only in baseline result: {word}", "-".red());
            }
        }
    }

    if let Some(expected_path) = expected_path {
        let expected: HashSet<String> = io::read_expected_word_list(expected_path)?
            .into_iter()
            .collect();
        let found: HashSet<String> = result.words.into_iter().collect();

        if found == expected {
            println!("{}", "Matches expected word list".green());
        } else {
            println!("{}", "DOES NOT match expected word list".red());
            for word in found.difference(&expected) {
                println!("  {} unexpected: {word}", "+".red());
            }
            for word in expected.difference(&found) {
                println!("  {} missing: {word}", "-".red());
            }
        }
    }

    Ok(())
}
