use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::time::Instant;

use boggle::{parse_board_text, Coordinator};

use crate::io;

pub fn run(board_path: &Path, dictionary_path: &Path, max_workers: Option<usize>) -> Result<()> {
    let board_text = io::read_board(board_path)?;
    let dictionary_text = io::read_dictionary(dictionary_path)?;
    let board = parse_board_text(&board_text)?;

    let max_workers = max_workers.unwrap_or_else(|| {
        std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    });

    println!("{:>8} {:>12} {:>10} {:>12}", "workers".blue(), "words".blue(), "score".blue(), "duration".blue());

    let mut reference: Option<(usize, u32)> = None;

    for workers in 1..=max_workers {
        let mut coordinator = Coordinator::new(workers);
        coordinator.load_dictionary_text(&dictionary_text);

        let start = Instant::now();
        let result = coordinator.find_words(&board);
        let elapsed = start.elapsed();

        let this = (result.words.len(), result.score);
        let consistent = match reference {
            None => {
                reference = Some(this);
                true
            }
            Some(r) => r == this,
        };

        let words = if consistent {
            result.words.len().to_string().green()
        } else {
            result.words.len().to_string().red()
        };

        println!(
            "{:>8} {:>12} {:>10} {:>9}ms",
            workers,
            words,
            result.score,
            elapsed.as_millis(),
        );
    }

    Ok(())
}
