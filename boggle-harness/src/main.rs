mod cli;
mod io;

use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(author, version, about = "A test harness for the boggle word-search engine.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a single board/dictionary pair and print the words found and the score.
    Run {
        /// Path to the board text file
        #[arg(short, long)]
        board: std::path::PathBuf,

        /// Path to the dictionary text file
        #[arg(short, long)]
        dictionary: std::path::PathBuf,

        /// Path to an expected-word-list file to diff the result against
        #[arg(short, long)]
        expected: Option<std::path::PathBuf>,

        /// Number of workers to shard the dictionary across (default: available parallelism)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Also run the brute-force baseline solver and cross-check it against the trie engine
        #[arg(long)]
        baseline: bool,
    },

    /// Run the same board/dictionary at every worker count in 1..=N and print a timing table.
    Bench {
        #[arg(short, long)]
        board: std::path::PathBuf,

        #[arg(short, long)]
        dictionary: std::path::PathBuf,

        /// Highest worker count to try (default: available parallelism)
        #[arg(short, long)]
        max_workers: Option<usize>,
    },

    /// Run every test case under a directory (each subdirectory with board.txt + dictionary.txt).
    Suite {
        directory: std::path::PathBuf,

        #[arg(short, long)]
        workers: Option<usize>,
    },
}

impl Command {
    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                board,
                dictionary,
                expected,
                workers,
                baseline,
            } => cli::run::run(&board, &dictionary, expected.as_deref(), workers, baseline),
            Command::Bench {
                board,
                dictionary,
                max_workers,
            } => cli::bench::run(&board, &dictionary, max_workers),
            Command::Suite { directory, workers } => cli::suite::run(&directory, workers),
        }
    }
}

fn main() {
    let args = Cli::parse();

    if let Err(error) = args.command.run() {
        eprintln!("{} {error}", "[error]".red());
        std::process::exit(1);
    }
}
