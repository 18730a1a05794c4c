// api.rs - Idiomatic Rust API for the sample search trie.
//
// Ties the pieces together: `TrieBuilder` inserts, `resolve` completes the
// goto table, and `FindIter` scans. Nothing is mutated after `build`.

use std::ops::Range;

use log::debug;

use crate::arena::{NodeArena, PatternId, StateId};
use crate::error::BuildError;
use crate::options::Options;
use crate::resolve::resolve;
use crate::search::{FindIter, Prefilter};
use crate::trie::TrieBuilder;

/// An Aho-Corasick automaton over a fixed set of byte patterns.
///
/// Building costs O(total pattern length x 256); a search costs
/// O(text length + number of matches). The automaton is immutable once
/// built and may be shared between threads.
///
/// # Examples
///
/// ```
/// use ahotrie::api::Automaton;
///
/// let ac = Automaton::new(["he", "she", "his", "hers"]).unwrap();
/// let found: Vec<(&[u8], usize)> = ac
///     .find("ahishers")
///     .into_iter()
///     .map(|m| m.into_pair())
///     .collect();
/// assert_eq!(
///     found,
///     vec![(&b"his"[..], 1), (&b"she"[..], 3), (&b"he"[..], 4), (&b"hers"[..], 4)]
/// );
/// ```
pub struct Automaton {
    pub(crate) arena: NodeArena,
    pub(crate) patterns: Vec<Box<[u8]>>,
    pub(crate) options: Options,
    pub(crate) prefilter: Option<Prefilter>,
}

impl Automaton {
    /// Build an automaton from `patterns` with default options.
    ///
    /// Duplicate patterns collapse into one; the first occurrence keeps its
    /// [`PatternId`].
    pub fn new<I, P>(patterns: I) -> Result<Automaton, BuildError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        AutomatonBuilder::new().build(patterns)
    }

    /// Create an [`AutomatonBuilder`] for fine-grained control over construction.
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::new()
    }

    /// Return every occurrence of every pattern in `text`.
    ///
    /// Matches are ordered by end position, and by decreasing length among
    /// matches ending at the same position. Overlapping and nested matches
    /// are all reported.
    pub fn find<T>(&self, text: &T) -> Vec<Match<'_>>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.find_iter(text).collect()
    }

    /// Lazily iterate over the matches [`Automaton::find`] would return.
    pub fn find_iter<'t, T>(&self, text: &'t T) -> FindIter<'_, 't>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        FindIter::new(self, text.as_ref())
    }

    /// Check whether any pattern occurs in `text`.
    pub fn is_match<T>(&self, text: &T) -> bool
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.find_iter(text).next().is_some()
    }

    /// Number of distinct patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Bytes of the pattern with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this automaton.
    pub fn pattern(&self, id: PatternId) -> &[u8] {
        &self.patterns[id.as_usize()]
    }

    /// Distinct patterns in insertion order, indexed by [`PatternId`].
    pub fn patterns(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.patterns.iter().map(|p| &**p)
    }

    /// Number of states, including the fail state and the root.
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }

    /// Heap memory owned by the automaton, in bytes.
    pub fn memory_usage(&self) -> usize {
        self.arena.memory_usage()
            + self.patterns.capacity() * std::mem::size_of::<Box<[u8]>>()
            + self.patterns.iter().map(|p| p.len()).sum::<usize>()
    }

    /// Options the automaton was built with.
    pub fn options(&self) -> Options {
        self.options
    }

    pub(crate) fn match_at(&self, pattern: PatternId, end: usize) -> Match<'_> {
        let bytes = self.pattern(pattern);
        Match {
            pattern: bytes,
            id: pattern,
            start: end - bytes.len(),
            end,
        }
    }
}

impl std::fmt::Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("patterns", &self.patterns.len())
            .field("states", &self.arena.len())
            .field("options", &self.options)
            .field("prefilter", &self.prefilter)
            .finish_non_exhaustive()
    }
}

// === AutomatonBuilder ===

/// Builder for an [`Automaton`] with custom options.
///
/// # Examples
///
/// ```
/// use ahotrie::api::Automaton;
///
/// let ac = Automaton::builder()
///     .nul_terminated(true)
///     .build(["ab\0cd"])
///     .unwrap();
/// assert_eq!(ac.pattern_count(), 1);
/// assert!(ac.is_match("xab"));
/// ```
#[derive(Clone, Debug)]
pub struct AutomatonBuilder {
    options: Options,
    state_limit: usize,
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        AutomatonBuilder::new()
    }
}

impl AutomatonBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        AutomatonBuilder {
            options: Options::empty(),
            state_limit: StateId::MAX.as_usize() + 1,
        }
    }

    /// Treat patterns and texts as C strings, ignoring everything from the
    /// first zero byte on.
    pub fn nul_terminated(mut self, yes: bool) -> Self {
        self.options.set(Options::NUL_TERMINATED, yes);
        self
    }

    /// Enable or disable the `memchr` skip loop at the start state.
    pub fn prefilter(mut self, yes: bool) -> Self {
        self.options.set(Options::NO_PREFILTER, !yes);
        self
    }

    /// Limit the number of states (fail state and root included). Values
    /// above what a state id can address are clamped.
    pub fn state_limit(mut self, limit: usize) -> Self {
        self.state_limit = limit;
        self
    }

    /// Set raw option flags. See [`Options`].
    pub fn option(mut self, flags: Options) -> Self {
        self.options |= flags;
        self
    }

    /// Insert `patterns` and resolve the automaton.
    pub fn build<I, P>(self, patterns: I) -> Result<Automaton, BuildError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut trie = TrieBuilder::new(self.options, self.state_limit);
        for pattern in patterns {
            trie.insert(pattern.as_ref())?;
        }
        let inserted = trie.inserted();
        let (mut arena, patterns) = trie.into_parts();

        resolve(&mut arena);
        let prefilter = Prefilter::from_root(&arena, self.options);

        debug!(
            "built automaton: {} patterns ({} distinct), {} states, prefilter {:?}",
            inserted,
            patterns.len(),
            arena.len(),
            prefilter
        );

        Ok(Automaton {
            arena,
            patterns,
            options: self.options,
            prefilter,
        })
    }
}

// === Match ===

/// One occurrence of a pattern in a text.
///
/// Borrows the pattern bytes from the [`Automaton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match<'a> {
    pattern: &'a [u8],
    id: PatternId,
    start: usize,
    end: usize,
}

impl<'a> Match<'a> {
    /// The matched pattern.
    pub fn pattern(&self) -> &'a [u8] {
        self.pattern
    }

    /// Id of the matched pattern.
    pub fn pattern_id(&self) -> PatternId {
        self.id
    }

    /// Byte offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the match (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte range of the match.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a match of the empty pattern.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The pattern as `&str`, or `None` if it is not valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.pattern).ok()
    }

    /// `(pattern, start offset)` pair.
    pub fn into_pair(self) -> (&'a [u8], usize) {
        (self.pattern, self.start)
    }
}
