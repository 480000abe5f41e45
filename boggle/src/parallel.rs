//! Shards the dictionary across workers by first letter and fans the board
//! out to them at search time.
//!
//! Each worker owns an independent [`Trie`] (and therefore an independent
//! arena); tries never share nodes, so there is no synchronization needed
//! during either loading or searching. The only thing workers share is the
//! board's *bytes*, and each gets its own mutable copy before its search
//! starts — the sentinel-marking trick in `search.rs` requires exclusive
//! access, so a single shared mutable board is not an option.

use std::fs;
use std::thread;

use anyhow::Result;

use crate::board::Board;
use crate::dictionary::{letter_index, normalize};
use crate::search;
use crate::trie::Trie;

/// Nodes reserved per worker's arena. Sized generously for an
/// English-scale dictionary shard (~6*10^5 nodes is ample per the design
/// note), plus headroom for unusually large corpora.
const DEFAULT_ARENA_CAPACITY: usize = 1_000_000;

pub struct ResultSet {
    pub words: Vec<String>,
    pub score: u32,
}

/// Owns one [`Trie`] per worker and coordinates loading and searching
/// across them.
pub struct Coordinator {
    tries: Vec<Trie>,
}

impl Coordinator {
    /// Builds a coordinator with `worker_count` workers (clamped to at
    /// least 1), each with its own empty trie.
    pub fn new(worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        let tries = (0..worker_count)
            .map(|_| Trie::with_capacity(DEFAULT_ARENA_CAPACITY))
            .collect();
        Coordinator { tries }
    }

    /// Builds a coordinator with one worker per available hardware thread.
    pub fn with_default_parallelism() -> Self {
        let worker_count = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Coordinator::new(worker_count)
    }

    pub fn worker_count(&self) -> usize {
        self.tries.len()
    }

    /// Reads `path` line by line, normalizes each line (§4.4), and routes
    /// the surviving words to a worker based on `first_letter mod W`. A
    /// word that fails normalization is silently skipped. Failure to open
    /// the file is reported to stderr and leaves every trie untouched,
    /// matching the degrading-failure policy for `DictionaryNotFound`.
    pub fn load_dictionary(&mut self, path: &std::path::Path) {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("could not open dictionary {}: {err}", path.display());
                return;
            }
        };

        self.load_dictionary_text(&text);
    }

    /// Same as [`Coordinator::load_dictionary`] but takes the dictionary
    /// contents directly — useful for tests and for callers that already
    /// have the text in memory.
    pub fn load_dictionary_text(&mut self, text: &str) {
        let worker_count = self.tries.len();

        for line in text.lines() {
            let Some(word) = normalize(line) else {
                continue;
            };

            let first_byte = word.path_key.as_bytes()[0];
            let Some(first) = letter_index(first_byte) else {
                continue;
            };

            let worker_id = first.as_usize() % worker_count;
            if let Err(err) = self.tries[worker_id].add_word(&word.canonical, &word.path_key) {
                panic!("{err}: dictionary shard ran out of trie capacity");
            }
        }
    }

    /// Runs the search across all workers. Each worker gets its own mutable
    /// copy of `board` (cloned once per worker, up front); worker 0 runs on
    /// the calling thread while the rest run on spawned threads, joined
    /// before returning. Results are concatenated `worker 0 || worker 1 ||
    /// ...` and scores are summed.
    pub fn find_words(&mut self, board: &Board) -> ResultSet {
        let worker_count = self.tries.len();
        let mut boards: Vec<Board> = (0..worker_count).map(|_| board.clone()).collect();

        let (first_trie, rest_tries) = self.tries.split_first_mut().expect("at least one worker");
        let (first_board, rest_boards) = boards.split_first_mut().expect("at least one worker");

        let per_worker_results: Vec<(Vec<String>, u32)> = thread::scope(|scope| {
            let handles: Vec<_> = rest_tries
                .iter_mut()
                .zip(rest_boards.iter_mut())
                .map(|(trie, board)| scope.spawn(move || run_worker(board, trie)))
                .collect();

            let first_result = run_worker(first_board, first_trie);

            let mut results = Vec::with_capacity(handles.len() + 1);
            results.push(first_result);
            for handle in handles {
                results.push(handle.join().expect("worker thread should not panic"));
            }
            results
        });

        let mut words = Vec::new();
        let mut score = 0;
        for (worker_words, worker_score) in per_worker_results {
            words.extend(worker_words);
            score += worker_score;
        }

        ResultSet { words, score }
    }

}

fn run_worker(board: &mut Board, trie: &mut Trie) -> (Vec<String>, u32) {
    search::find_words(board, trie);
    search::collect(trie)
}

/// Convenience entry point matching the spec's external interface:
/// `find_words(board_bytes, width, height) -> { words, score }`, sharding
/// across `worker_count` workers.
pub fn find_words_in_board(
    dictionary_text: &str,
    board_bytes: Vec<u8>,
    width: u32,
    height: u32,
    worker_count: usize,
) -> Result<ResultSet> {
    let board = Board::new(board_bytes, width, height)?;
    let mut coordinator = Coordinator::new(worker_count);
    coordinator.load_dictionary_text(dictionary_text);
    Ok(coordinator.find_words(&board))
}
