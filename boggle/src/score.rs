//! Length-to-score table, indexed by canonical (q-expanded) word length.

pub const MIN_WORD_LEN: usize = 3;
pub const MAX_WORD_LEN: usize = 15;

const TABLE: [u32; MAX_WORD_LEN + 1] = [
    0, 0, 0, // 0, 1, 2 - unreachable, words are at least 3 letters
    1, // 3
    1, // 4
    2, // 5
    3, // 6
    5, // 7
    11, // 8
    11, 11, 11, 11, 11, 11, 11, // 9..=15
];

/// Score for a canonical word of the given length. `len` is expected to be
/// in `[MIN_WORD_LEN, MAX_WORD_LEN]`; out-of-range lengths score 0 rather
/// than panicking, since this table only ever sees lengths the normalizer
/// already validated.
pub fn score_for_length(len: usize) -> u32 {
    TABLE.get(len).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_spec_table() {
        assert_eq!(score_for_length(3), 1);
        assert_eq!(score_for_length(4), 1);
        assert_eq!(score_for_length(5), 2);
        assert_eq!(score_for_length(6), 3);
        assert_eq!(score_for_length(7), 5);
        assert_eq!(score_for_length(8), 11);
        assert_eq!(score_for_length(15), 11);
    }

    #[test]
    fn out_of_range_is_zero() {
        assert_eq!(score_for_length(0), 0);
        assert_eq!(score_for_length(2), 0);
        assert_eq!(score_for_length(16), 0);
    }
}
