//! The depth-first board walk, descending the trie in lock-step with the
//! board.
//!
//! Termination: recursion depth can never exceed [`MAX_WORD_LEN`]
//! ([`crate::score::MAX_WORD_LEN`]), since the trie has no path longer than
//! that, and the board's sentinel guarantees no cell appears twice on a
//! single path.

use crate::arena::NodeIndex;
use crate::board::{Board, NEIGHBOR_OFFSETS};
use crate::trie::Trie;

/// Runs the search to completion over every starting cell, in reading
/// order, mutating `board` in place (restored before returning) and
/// setting `found`/`pending` inside `trie`. Returns the number of
/// newly-found terminals.
///
/// The trie is reset before the walk, so repeated calls on the same loaded
/// dictionary are idempotent rather than returning a shrinking result set
/// (see the crate-level design notes on Open Question 1).
pub fn find_words(board: &mut Board, trie: &mut Trie) -> usize {
    trie.reset_found();

    let before = board.sentinel_count();
    debug_assert_eq!(before, 0, "board must not already have cells on a path");

    let root = trie.root();
    for y in 0..board.height() {
        for x in 0..board.width() {
            descend(board, trie, x, y, root);
        }
    }

    debug_assert_eq!(board.sentinel_count(), 0, "board must be fully restored");

    trie.collect_size(root)
}

fn descend(board: &mut Board, trie: &mut Trie, x: u32, y: u32, node: NodeIndex) {
    let letter = board.letter_at(x, y);
    if letter == crate::board::VISITED_SENTINEL {
        return; // already on this path
    }

    let child = trie.child(node, letter);
    if child.is_null() {
        return; // no matching prefix
    }

    if trie.is_terminal(child) && !trie.is_found(child) {
        trie.mark_found(node, child);
    }

    if trie.remaining(child) == 0 {
        return; // every word under this subtree has already been found
    }

    let saved = board.mark_visited(x, y);

    for (dx, dy) in NEIGHBOR_OFFSETS {
        if let Some((nx, ny)) = board.neighbor(x, y, dx, dy) {
            descend(board, trie, nx, ny, child);
        }
    }

    board.restore(x, y, saved);
}

/// Walks the trie once, collecting every found word and the aggregate
/// score. Separate from `find_words` so a caller can inspect the trie's
/// state between the search and the collection pass.
pub fn collect(trie: &Trie) -> (Vec<String>, u32) {
    let mut words = Vec::with_capacity(trie.collect_size(trie.root()));
    let mut score = 0;
    trie.collect(trie.root(), &mut words, &mut score);
    (words, score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::normalize;

    fn trie_from(words: &[&str]) -> Trie {
        let mut trie = Trie::with_capacity(4096);
        for w in words {
            let n = normalize(w).unwrap();
            trie.add_word(&n.canonical, &n.path_key).unwrap();
        }
        trie
    }

    fn board_from(rows: &[&str]) -> Board {
        let width = rows[0].len() as u32;
        let height = rows.len() as u32;
        let cells = rows.iter().flat_map(|r| r.bytes()).collect();
        Board::new(cells, width, height).unwrap()
    }

    // S1 from the spec: simple match.
    #[test]
    fn s1_simple_match() {
        let mut board = board_from(&["cat", "dog", "bay"]);
        let mut trie = trie_from(&["cat", "dog", "bay", "tag", "god"]);
        find_words(&mut board, &mut trie);
        let (mut words, score) = collect(&trie);
        words.sort();
        assert_eq!(words, vec!["bay", "cat", "dog", "god", "tag"]);
        assert_eq!(score, 5);
    }

    // S2: qu contraction.
    #[test]
    fn s2_qu_contraction() {
        let mut board = board_from(&["qoz", "ikx", "eay"]);
        let mut trie = trie_from(&["quoi", "equal"]);
        find_words(&mut board, &mut trie);
        let (words, score) = collect(&trie);
        assert_eq!(words, vec!["quoi".to_string()]);
        assert_eq!(score, 1);
    }

    // S3: no cell reuse.
    #[test]
    fn s3_no_reuse() {
        let mut board = board_from(&["aa", "aa"]);
        let mut trie = trie_from(&["aaaa", "aaaaa"]);
        find_words(&mut board, &mut trie);
        let (words, score) = collect(&trie);
        assert_eq!(words, vec!["aaaa".to_string()]);
        assert_eq!(score, 1);
    }

    // S4: duplicate paths suppressed.
    #[test]
    fn s4_duplicate_paths_suppressed() {
        let mut board = board_from(&["aba", "bab", "aba"]);
        let mut trie = trie_from(&["aba"]);
        find_words(&mut board, &mut trie);
        let (words, _) = collect(&trie);
        assert_eq!(words, vec!["aba".to_string()]);
    }

    #[test]
    fn board_is_fully_restored_after_search() {
        let mut board = board_from(&["cat", "dog", "bay"]);
        let mut trie = trie_from(&["cat", "dog", "bay", "tag", "god"]);
        find_words(&mut board, &mut trie);
        assert_eq!(board.sentinel_count(), 0);
        assert_eq!(board.letter_at(0, 0), b'c');
    }

    #[test]
    fn idempotent_across_repeated_calls() {
        let mut board = board_from(&["cat", "dog", "bay"]);
        let mut trie = trie_from(&["cat", "dog", "bay", "tag", "god"]);
        find_words(&mut board, &mut trie);
        let (mut first, first_score) = collect(&trie);
        first.sort();

        find_words(&mut board, &mut trie);
        let (mut second, second_score) = collect(&trie);
        second.sort();

        assert_eq!(first, second);
        assert_eq!(first_score, second_score);
    }
}
