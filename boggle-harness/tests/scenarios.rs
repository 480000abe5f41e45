//! End-to-end scenarios S1-S5, driven through the public library entry
//! points exactly the way `boggle-harness`'s `run` subcommand does.

use boggle::{parse_board_text, Coordinator};
use std::collections::HashSet;

fn words_of(dictionary: &str, board_text: &str, workers: usize) -> (HashSet<String>, u32) {
    let board = parse_board_text(board_text).unwrap();
    let mut coordinator = Coordinator::new(workers);
    coordinator.load_dictionary_text(dictionary);
    let result = coordinator.find_words(&board);
    (result.words.into_iter().collect(), result.score)
}

#[test]
fn s1_simple_match() {
    let (words, score) = words_of("cat\ndog\nbay\ntag\ngod\n", "cat\ndog\nbay\n", 3);
    let expected: HashSet<String> = ["cat", "dog", "bay", "tag", "god"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(words, expected);
    assert_eq!(score, 5);
}

#[test]
fn s2_qu_contraction() {
    let (words, score) = words_of("quoi\nequal\n", "qoz\nikx\neay\n", 2);
    assert_eq!(words, HashSet::from(["quoi".to_string()]));
    assert_eq!(score, 1);
}

#[test]
fn s3_no_reuse() {
    let (words, score) = words_of("aaaa\naaaaa\n", "aa\naa\n", 1);
    assert_eq!(words, HashSet::from(["aaaa".to_string()]));
    assert_eq!(score, 1);
}

#[test]
fn s4_duplicate_paths_suppressed() {
    let (words, _) = words_of("aba\n", "aba\nbab\naba\n", 4);
    assert_eq!(words, HashSet::from(["aba".to_string()]));
}

#[test]
fn s5_length_filtering() {
    let (words, _) = words_of("ab\ncat\nelephantelephant\n", "cat\nxxx\nxxx\n", 1);
    assert_eq!(words, HashSet::from(["cat".to_string()]));
}

/// S6 from the spec: a large random board and dictionary. Exercised on
/// demand only — the board/dictionary are generated in-memory since a
/// 10k x 10k board has no reason to live as a checked-in fixture.
#[test]
#[ignore]
fn s6_large_board_runs_to_completion() {
    let width: u32 = 1000;
    let height: u32 = 1000;

    let mut state: u64 = 0x2545F4914F6CDD1D;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let cells: Vec<u8> = (0..(width * height))
        .map(|_| b'a' + (next() % 26) as u8)
        .collect();
    let board = boggle::Board::new(cells, width, height).unwrap();

    let dictionary: String = (0..10_000)
        .map(|i| {
            let len = 3 + (i % 10);
            (0..len)
                .map(|_| (b'a' + (next() % 26) as u8) as char)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut coordinator = Coordinator::with_default_parallelism();
    coordinator.load_dictionary_text(&dictionary);
    let result = coordinator.find_words(&board);

    assert_eq!(board.sentinel_count(), 0);
    for word in &result.words {
        assert!(word.len() >= 3 && word.len() <= 15);
    }
}
