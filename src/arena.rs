// arena.rs - Flat node store for the sample search trie.
//
// Nodes reference each other only by `StateId`. The goto table lives
// beside the nodes as one dense `[StateId; 256]` row per node, so the
// scanner does a single indexed load per input byte.

use smallvec::SmallVec;

use crate::error::BuildError;

/// Size of the input alphabet (raw bytes).
pub const ALPHABET_LEN: usize = 256;

/// Index of a node in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    /// The fail state. Every byte leads from it to [`StateId::ROOT`].
    pub const FAIL: StateId = StateId(0);
    /// The root. Insertion and scanning start here.
    pub const ROOT: StateId = StateId(1);
    /// Largest id a real node may have.
    pub const MAX: StateId = StateId(u32::MAX - 1);
    /// Marker for a goto entry that has not been resolved yet. Out of range
    /// for every arena, so reading through it panics on the bounds check.
    pub(crate) const UNRESOLVED: StateId = StateId(u32::MAX);

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    fn from_usize(index: usize) -> StateId {
        debug_assert!(index <= StateId::MAX.as_usize());
        StateId(index as u32)
    }
}

/// Index of a pattern in the automaton's string table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternId(u32);

impl PatternId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn from_usize(index: usize) -> PatternId {
        PatternId(index as u32)
    }
}

/// A trie node. Owned by [`NodeArena`].
#[derive(Clone, Debug, Default)]
pub(crate) struct Node {
    /// Node this one was created from. `None` for the sentinels.
    pub(crate) parent: Option<StateId>,
    /// Byte on the edge from `parent`. Meaningless for the sentinels.
    pub(crate) symbol: u8,
    /// Explicit trie edges, sorted by byte.
    pub(crate) children: SmallVec<[(u8, StateId); 2]>,
    pub(crate) suffix_link: Option<StateId>,
    /// Nearest terminal node on the suffix-link chain, self excluded.
    pub(crate) next_match: Option<StateId>,
    /// Pattern ending exactly here.
    pub(crate) pattern: Option<PatternId>,
    /// Terminal nodes on the suffix-link chain, self included.
    pub(crate) match_count: u32,
}

impl Node {
    fn child_of(parent: StateId, symbol: u8) -> Node {
        Node {
            parent: Some(parent),
            symbol,
            ..Node::default()
        }
    }

    #[inline]
    pub(crate) fn child(&self, byte: u8) -> Option<StateId> {
        self.children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.children[i].1)
    }

    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.pattern.is_some()
    }
}

/// Growable store of nodes plus their goto rows.
///
/// The arena only grows. Goto rows start out [`StateId::UNRESOLVED`] and are
/// written exactly once by the resolver; after that the arena is frozen.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
    goto: Vec<StateId>,
    limit: usize,
}

impl NodeArena {
    /// Create an arena holding the two sentinels.
    ///
    /// `limit` caps the number of nodes, sentinels included, and is clamped
    /// to what `StateId` can address.
    pub(crate) fn new(limit: usize) -> NodeArena {
        let limit = limit.clamp(2, StateId::MAX.as_usize() + 1);
        let mut arena = NodeArena {
            nodes: Vec::with_capacity(2),
            goto: Vec::with_capacity(2 * ALPHABET_LEN),
            limit,
        };

        arena.nodes.push(Node::default());
        arena.goto.extend([StateId::ROOT; ALPHABET_LEN]);

        arena.nodes.push(Node {
            suffix_link: Some(StateId::FAIL),
            ..Node::default()
        });
        arena.goto.extend([StateId::UNRESOLVED; ALPHABET_LEN]);

        arena
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn node(&self, id: StateId) -> &Node {
        &self.nodes[id.as_usize()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: StateId) -> &mut Node {
        &mut self.nodes[id.as_usize()]
    }

    /// Append a child of `parent` reached by `symbol` and link the edge.
    pub(crate) fn add_child(
        &mut self,
        parent: StateId,
        symbol: u8,
    ) -> Result<StateId, BuildError> {
        if self.nodes.len() >= self.limit {
            return Err(BuildError::StateLimitExceeded { limit: self.limit });
        }
        let id = StateId::from_usize(self.nodes.len());
        self.nodes.push(Node::child_of(parent, symbol));
        self.goto.extend([StateId::UNRESOLVED; ALPHABET_LEN]);

        let children = &mut self.nodes[parent.as_usize()].children;
        match children.binary_search_by_key(&symbol, |&(b, _)| b) {
            Ok(_) => unreachable!("edge {symbol:#04x} already exists"),
            Err(at) => children.insert(at, (symbol, id)),
        }
        Ok(id)
    }

    /// Goto entry for `(id, byte)`. May be [`StateId::UNRESOLVED`] while the
    /// resolver is running.
    #[inline]
    pub(crate) fn goto(&self, id: StateId, byte: u8) -> StateId {
        self.goto[id.as_usize() * ALPHABET_LEN + byte as usize]
    }

    #[inline]
    pub(crate) fn set_goto(&mut self, id: StateId, byte: u8, next: StateId) {
        let slot = &mut self.goto[id.as_usize() * ALPHABET_LEN + byte as usize];
        debug_assert_eq!(*slot, StateId::UNRESOLVED, "goto written twice");
        *slot = next;
    }

    /// Ids in creation order, sentinels included.
    #[cfg(test)]
    pub(crate) fn ids(&self) -> impl Iterator<Item = StateId> {
        (0..self.nodes.len()).map(StateId::from_usize)
    }

    /// Heap bytes owned by the arena.
    pub(crate) fn memory_usage(&self) -> usize {
        let spilled: usize = self
            .nodes
            .iter()
            .filter(|n| n.children.spilled())
            .map(|n| n.children.capacity() * std::mem::size_of::<(u8, StateId)>())
            .sum();
        self.nodes.capacity() * std::mem::size_of::<Node>()
            + self.goto.capacity() * std::mem::size_of::<StateId>()
            + spilled
    }
}
