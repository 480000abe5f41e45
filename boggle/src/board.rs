//! The board the search walks.
//!
//! Holds a dense row-major buffer of `width * height` lowercase letters. The
//! search engine mutates cells in place to mark "currently on the active
//! path" (see [`Board::mark_visited`]) and restores them on unwind; outside
//! of a `find_words` call the sentinel count is always zero.

use anyhow::{anyhow, Result};
use colored::Colorize;
use std::fmt;

/// Board-relative sentinel meaning "this cell is on the current search
/// path; do not revisit".
pub const VISITED_SENTINEL: u8 = 0;

/// 8-connected neighbor offsets, in the canonical order the search walks
/// them in. The order isn't observable in results (a set), but fixing it
/// makes traversal reproducible for testing.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

#[derive(Debug, Clone)]
pub struct Board {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl Board {
    /// Builds a board from a flat row-major buffer of lowercase letters.
    /// Rejects dimensions that don't agree with the buffer length or that
    /// would overflow 32-bit indexing arithmetic.
    pub fn new(cells: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = (width as u64) * (height as u64);
        if width == 0 || height == 0 || expected != cells.len() as u64 || expected > u32::MAX as u64
        {
            return Err(anyhow!("invalid board dimensions {width}x{height}"));
        }

        Ok(Board {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Returns the letter at `(x, y)`, or the sentinel if that cell is
    /// currently on the search path.
    #[inline(always)]
    pub fn letter_at(&self, x: u32, y: u32) -> u8 {
        self.cells[self.index(x, y)]
    }

    /// Marks `(x, y)` as visited, returning the letter that was there so
    /// the caller can restore it with [`Board::restore`].
    #[inline(always)]
    pub fn mark_visited(&mut self, x: u32, y: u32) -> u8 {
        let idx = self.index(x, y);
        let saved = self.cells[idx];
        self.cells[idx] = VISITED_SENTINEL;
        saved
    }

    #[inline(always)]
    pub fn restore(&mut self, x: u32, y: u32, letter: u8) {
        let idx = self.index(x, y);
        self.cells[idx] = letter;
    }

    /// An offset `(x + dx, y + dy)` that's still on the board, or `None`.
    /// Off-board detection relies on unsigned wraparound: a negative
    /// coordinate underflows to a value far past `width`/`height`, so a
    /// single upper-bound comparison suffices.
    #[inline(always)]
    pub fn neighbor(&self, x: u32, y: u32, dx: i32, dy: i32) -> Option<(u32, u32)> {
        let nx = x.wrapping_add_signed(dx);
        let ny = y.wrapping_add_signed(dy);
        if nx < self.width && ny < self.height {
            Some((nx, ny))
        } else {
            None
        }
    }

    /// Number of cells currently marked as the sentinel. Should be zero
    /// before and after every `find_words` call.
    pub fn sentinel_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == VISITED_SENTINEL).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.letter_at(x, y);
                if c == VISITED_SENTINEL {
                    write!(f, "{}", "_".bright_black())?;
                } else {
                    write!(f, "{}", (c as char).to_string().green())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses a board from text: newlines delimit rows, width is the letter
/// count of the first row, all rows must match, non-letter bytes are
/// ignored (per the board file format, test-harness only).
pub fn parse_board_text(text: &str) -> Result<Board> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let width = rows
        .first()
        .map(|r| r.bytes().filter(u8::is_ascii_alphabetic).count())
        .unwrap_or(0) as u32;
    let height = rows.len() as u32;

    let mut cells = Vec::with_capacity((width * height) as usize);
    for row in &rows {
        for b in row.bytes() {
            if b.is_ascii_alphabetic() {
                cells.push(b.to_ascii_lowercase());
            }
        }
    }

    Board::new(cells, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> Board {
        Board::new("catdogbay".as_bytes().to_vec(), 3, 3).unwrap()
    }

    #[test]
    fn letter_at_reads_row_major() {
        let board = small_board();
        assert_eq!(board.letter_at(0, 0), b'c');
        assert_eq!(board.letter_at(2, 0), b't');
        assert_eq!(board.letter_at(0, 1), b'd');
    }

    #[test]
    fn mark_and_restore_round_trips() {
        let mut board = small_board();
        let saved = board.mark_visited(1, 1);
        assert_eq!(saved, b'o');
        assert_eq!(board.letter_at(1, 1), VISITED_SENTINEL);
        assert_eq!(board.sentinel_count(), 1);
        board.restore(1, 1, saved);
        assert_eq!(board.letter_at(1, 1), b'o');
        assert_eq!(board.sentinel_count(), 0);
    }

    #[test]
    fn neighbor_detects_off_board_via_wraparound() {
        let board = small_board();
        assert_eq!(board.neighbor(0, 0, -1, 0), None);
        assert_eq!(board.neighbor(0, 0, 1, 1), Some((1, 1)));
        assert_eq!(board.neighbor(2, 2, 1, 0), None);
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        assert!(Board::new(vec![b'a'; 4], 3, 3).is_err());
        assert!(Board::new(vec![], 0, 0).is_err());
    }

    #[test]
    fn parses_text_board() {
        let board = parse_board_text("cat\ndog\nbay\n").unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert_eq!(board.letter_at(0, 2), b'b');
    }

    #[test]
    fn width_counts_letters_not_raw_bytes_in_first_row() {
        let board = parse_board_text("c-a-t\ndog\nbay\n").unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.letter_at(0, 0), b'c');
        assert_eq!(board.letter_at(2, 0), b't');
    }
}
