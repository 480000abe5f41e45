//! A brute-force, single-threaded solver kept only as a didactic baseline —
//! not part of the core design, but useful as an independent cross-check
//! for the trie engine's soundness and completeness (§8 invariants).
//!
//! For each dictionary word, in order, scans the whole board for a cell
//! matching its first letter and attempts to trace the rest of the word via
//! DFS; stops at the first match (a word is reported at most once).
//! Quadratic in dictionary size and intentionally not parallelized or
//! optimized — the corpus this was distilled from keeps exactly this kind
//! of naive implementation around for the same reason.

use crate::board::{Board, NEIGHBOR_OFFSETS};
use crate::dictionary::{normalize, NormalizedWord};
use crate::parallel::ResultSet;
use crate::score::score_for_length;

/// Normalizes every line of `dictionary_text` (§4.4 rules; invalid lines are
/// skipped) and runs the naive search against `board`.
pub fn find_words_naive(board: &mut Board, dictionary_text: &str) -> ResultSet {
    let words: Vec<NormalizedWord> = dictionary_text.lines().filter_map(normalize).collect();

    let mut result = ResultSet {
        words: Vec::new(),
        score: 0,
    };

    for word in &words {
        if find_one(board, &word.path_key) {
            result.words.push(word.canonical.clone());
            result.score += score_for_length(word.canonical.len());
        }
    }

    result
}

fn find_one(board: &mut Board, path_key: &str) -> bool {
    let first = path_key.as_bytes()[0];

    for y in 0..board.height() {
        for x in 0..board.width() {
            if board.letter_at(x, y) != first {
                continue;
            }

            let saved = board.mark_visited(x, y);
            let found = trace(board, x, y, path_key.as_bytes(), 1);
            board.restore(x, y, saved);

            if found {
                return true;
            }
        }
    }

    false
}

fn trace(board: &mut Board, x: u32, y: u32, path_key: &[u8], next_index: usize) -> bool {
    if next_index == path_key.len() {
        return true;
    }

    let want = path_key[next_index];

    for (dx, dy) in NEIGHBOR_OFFSETS {
        let Some((nx, ny)) = board.neighbor(x, y, dx, dy) else {
            continue;
        };

        if board.letter_at(nx, ny) != want {
            continue;
        }

        let saved = board.mark_visited(nx, ny);
        let found = trace(board, nx, ny, path_key, next_index + 1);
        board.restore(nx, ny, saved);

        if found {
            return true;
        }
    }

    false
}
