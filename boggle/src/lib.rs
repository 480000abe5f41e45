pub mod arena;
pub mod baseline;
pub mod board;
pub mod dictionary;
pub mod parallel;
pub mod score;
pub mod search;
pub mod trie;

pub use board::{parse_board_text, Board};
pub use parallel::{Coordinator, ResultSet};
