//! Prefix tree over the 26-letter alphabet, stored inside an [`Arena`].
//!
//! Each node carries a `pending` count of not-yet-found terminal
//! descendants (including itself, if terminal) and a `found` latch. The
//! crucial subtlety: `pending` is decremented on the *parent* the instant a
//! terminal child is first discovered, not along the whole chain up to the
//! root. That single-step decrement is what makes
//! `if child.pending == 0 { return }` a valid "this whole subtree is
//! harvested" check (see `search.rs`).

use anyhow::Result;

use crate::arena::{Arena, NodeIndex};
use crate::dictionary::{letter_index, LetterIndex};
use crate::score::MAX_WORD_LEN;

/// `#[repr(align(64))]` is the actual cache-alignment mechanism for the
/// arena this node lives in: it forces `size_of::<TrieNode>()` up to a
/// multiple of 64 (comfortably past the `align_up(_, 16)` slot-size floor)
/// and makes `Vec<TrieNode>`'s heap buffer itself land on a 64-byte
/// boundary, since the allocator lays out `Vec<T>` per `T`'s own alignment.
#[derive(Clone)]
#[repr(align(64))]
pub struct TrieNode {
    children: [NodeIndex; LetterIndex::COUNT],
    /// Count of not-yet-found terminal descendants, this node included if
    /// it is itself terminal. Only ever touched by `add_word` (increment)
    /// and `mark_found` (single decrement on the parent).
    pending: u32,
    found: bool,
    /// Non-empty iff this node is terminal; the canonical (pre-`qu`-collapse)
    /// spelling.
    word: Option<Box<str>>,
}

const _: () = assert!(std::mem::align_of::<TrieNode>() == 64);
const _: () = assert!(std::mem::size_of::<TrieNode>().is_multiple_of(16));

impl Default for TrieNode {
    fn default() -> Self {
        TrieNode {
            children: [NodeIndex::NULL; LetterIndex::COUNT],
            pending: 0,
            found: false,
            word: None,
        }
    }
}

/// A prefix tree over an [`Arena<TrieNode>`], rooted at a fixed index.
pub struct Trie {
    arena: Arena<TrieNode>,
    root: NodeIndex,
}

impl Trie {
    /// Allocates a fresh root node in a new arena of the given capacity.
    /// `capacity` should be sized generously for the dictionary shard this
    /// trie will hold (the design note in the spec suggests ~6*10^5 nodes
    /// per shard as ample for a typical English dictionary).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arena = Arena::init(capacity);
        let root = arena.allocate().expect("fresh arena always has room for the root");
        Trie { arena, root }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Inserts `canonical` into the trie, descending along `path_key` (the
    /// already-`qu`-collapsed form). Every node visited along the insertion
    /// path gets `pending` incremented by one; the terminal node stores the
    /// canonical spelling.
    ///
    /// Preconditions (enforced by the normalizer, not re-checked here):
    /// `path_key` is non-empty, every byte is in `{a..z}`, and
    /// `canonical.len()` is in `[3, MAX_WORD_LEN]`.
    pub fn add_word(&mut self, canonical: &str, path_key: &str) -> Result<()> {
        debug_assert!(!path_key.is_empty());
        debug_assert!(canonical.len() <= MAX_WORD_LEN);

        let mut current = self.root;

        for byte in path_key.bytes() {
            let idx = letter_index(byte).expect("path_key must be pre-validated lowercase");

            self.arena.get_mut(current).pending += 1;

            let child = self.arena.get(current).children[idx.as_usize()];
            let child = if child.is_null() {
                let new_child = self.arena.allocate()?;
                self.arena.get_mut(current).children[idx.as_usize()] = new_child;
                new_child
            } else {
                child
            };

            current = child;
        }

        self.arena.get_mut(current).word = Some(canonical.into());
        Ok(())
    }

    /// The child along `letter`, or `NodeIndex::NULL` if absent. A letter
    /// byte outside `{a..z}` is treated the same as "no matching child".
    #[inline(always)]
    pub fn child(&self, node: NodeIndex, letter_byte: u8) -> NodeIndex {
        match letter_index(letter_byte) {
            Some(idx) => self.arena.get(node).children[idx.as_usize()],
            None => NodeIndex::NULL,
        }
    }

    #[inline(always)]
    pub fn remaining(&self, node: NodeIndex) -> u32 {
        self.arena.get(node).pending
    }

    #[inline(always)]
    pub fn is_terminal(&self, node: NodeIndex) -> bool {
        self.arena.get(node).word.is_some()
    }

    #[inline(always)]
    pub fn is_found(&self, node: NodeIndex) -> bool {
        self.arena.get(node).found
    }

    pub fn word(&self, node: NodeIndex) -> Option<&str> {
        self.arena.get(node).word.as_deref()
    }

    /// Marks `node`'s terminal as found and decrements `pending` on
    /// `parent`. Invoked by the search engine exactly once per terminal,
    /// the first time it's reached.
    #[inline(always)]
    pub fn mark_found(&mut self, parent: NodeIndex, node: NodeIndex) {
        self.arena.get_mut(node).found = true;
        self.arena.get_mut(parent).pending -= 1;
    }

    /// Resets `found` to `false` and `pending` back to its load-time value
    /// at every allocated node, so a fresh `find_words` call on the same
    /// loaded dictionary returns the same results as the first call
    /// (Open Question 1: repeated calls reset state up front rather than
    /// requiring a reload).
    pub fn reset_found(&mut self) {
        fn visit(arena: &mut Arena<TrieNode>, node: NodeIndex) -> u32 {
            let children: Vec<NodeIndex> = arena
                .get(node)
                .children
                .iter()
                .copied()
                .filter(|c| !c.is_null())
                .collect();

            let mut pending = 0u32;
            for child in children {
                if arena.get(child).word.is_some() {
                    arena.get_mut(child).found = false;
                    pending += 1;
                }
                pending += visit(arena, child);
            }

            arena.get_mut(node).pending = pending;
            pending
        }

        let root = self.root;
        visit(&mut self.arena, root);
    }

    /// Recursive count of `found` nodes under `node`. Used by the result
    /// assembler to pre-size its output buffer before `collect`.
    pub fn collect_size(&self, node: NodeIndex) -> usize {
        let mut count = if self.is_found(node) { 1 } else { 0 };
        for letter in 0..LetterIndex::COUNT as u8 {
            let child = self.arena.get(node).children[letter as usize];
            if !child.is_null() {
                count += self.collect_size(child);
            }
        }
        count
    }

    /// Walks `node`'s subtree in child-index order (0..26), appending every
    /// found terminal's canonical word to `out` and accumulating its score.
    pub fn collect(&self, node: NodeIndex, out: &mut Vec<String>, score: &mut u32) {
        if let Some(word) = self.word(node) {
            if self.is_found(node) {
                out.push(word.to_string());
                *score += crate::score::score_for_length(word.len());
            }
        }

        for letter in 0..LetterIndex::COUNT as u8 {
            let child = self.arena.get(node).children[letter as usize];
            if !child.is_null() {
                self.collect(child, out, score);
            }
        }
    }
}
