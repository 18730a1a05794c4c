// trie.rs - Pattern insertion into the node arena.
//
// Insertion only creates nodes and explicit edges. Suffix links and goto
// rows are left for `resolve`, which must run after the last insert.

use log::trace;

use crate::arena::{NodeArena, PatternId, StateId};
use crate::error::BuildError;
use crate::options::Options;

/// Collects patterns into a trie.
pub(crate) struct TrieBuilder {
    arena: NodeArena,
    patterns: Vec<Box<[u8]>>,
    options: Options,
    inserted: usize,
}

impl TrieBuilder {
    pub(crate) fn new(options: Options, state_limit: usize) -> TrieBuilder {
        TrieBuilder {
            arena: NodeArena::new(state_limit),
            patterns: Vec::new(),
            options,
            inserted: 0,
        }
    }

    /// Insert one pattern and return the node it ends at.
    ///
    /// The first pattern to reach a node owns it; a later identical pattern
    /// is dropped.
    pub(crate) fn insert(&mut self, pattern: &[u8]) -> Result<StateId, BuildError> {
        self.inserted += 1;
        let bytes = self.options.effective(pattern);
        if bytes.len() != pattern.len() {
            trace!(
                "pattern #{} truncated at NUL: {} of {} bytes kept",
                self.inserted - 1,
                bytes.len(),
                pattern.len()
            );
        }

        let mut state = StateId::ROOT;
        for &byte in bytes {
            state = match self.arena.node(state).child(byte) {
                Some(next) => next,
                None => self.arena.add_child(state, byte)?,
            };
        }

        let node = self.arena.node_mut(state);
        if node.pattern.is_some() {
            trace!("pattern #{} is a duplicate, ignored", self.inserted - 1);
            return Ok(state);
        }
        node.pattern = Some(PatternId::from_usize(self.patterns.len()));
        node.match_count = 1;
        self.patterns.push(bytes.into());
        Ok(state)
    }

    /// Number of `insert` calls, duplicates included.
    pub(crate) fn inserted(&self) -> usize {
        self.inserted
    }

    pub(crate) fn into_parts(self) -> (NodeArena, Vec<Box<[u8]>>) {
        (self.arena, self.patterns)
    }
}
