// search.rs - Scanning text with a resolved automaton.
//
// One goto lookup per byte. Whenever the current state has a terminal node
// somewhere on its suffix-link chain, the chain is walked through
// `next_match` and every pattern on it is reported, nearest suffix first.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::api::{Automaton, Match};
use crate::arena::{NodeArena, StateId};
use crate::options::Options;

/// Skip loop for the root state.
///
/// At the root, every byte without a trie edge leads back to the root and
/// cannot end a match (unless the root itself is terminal, in which case no
/// prefilter is built). So the scanner may jump straight to the next byte
/// that starts some pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Prefilter {
    /// No pattern starts with any byte: nothing can match.
    Never,
    One(u8),
    Two(u8, u8),
    Three(u8, u8, u8),
}

impl Prefilter {
    /// Build a prefilter from the root's outgoing edges, if it pays off.
    pub(crate) fn from_root(arena: &NodeArena, options: Options) -> Option<Prefilter> {
        if options.contains(Options::NO_PREFILTER) {
            return None;
        }
        let root = arena.node(StateId::ROOT);
        if root.is_terminal() || root.children.len() > 3 {
            return None;
        }
        let bytes: SmallVec<[u8; 3]> = root.children.iter().map(|&(b, _)| b).collect();
        Some(match bytes[..] {
            [] => Prefilter::Never,
            [a] => Prefilter::One(a),
            [a, b] => Prefilter::Two(a, b),
            [a, b, c] => Prefilter::Three(a, b, c),
            _ => return None,
        })
    }

    /// Offset of the first candidate byte in `haystack`.
    #[inline]
    pub(crate) fn find(&self, haystack: &[u8]) -> Option<usize> {
        match *self {
            Prefilter::Never => None,
            Prefilter::One(a) => memchr::memchr(a, haystack),
            Prefilter::Two(a, b) => memchr::memchr2(a, b, haystack),
            Prefilter::Three(a, b, c) => memchr::memchr3(a, b, c, haystack),
        }
    }
}

/// Iterator over every occurrence of every pattern in a text.
///
/// Matches come grouped by end position, ascending. Within one end
/// position the longest pattern comes first. Created by
/// [`Automaton::find_iter`].
#[derive(Clone, Debug)]
pub struct FindIter<'a, 't> {
    automaton: &'a Automaton,
    text: &'t [u8],
    /// Bytes consumed so far.
    pos: usize,
    state: StateId,
    /// Next node of the match chain being reported.
    chain: Option<StateId>,
    /// End offset shared by the matches on `chain`.
    end: usize,
}

impl<'a, 't> FindIter<'a, 't> {
    pub(crate) fn new(automaton: &'a Automaton, text: &'t [u8]) -> FindIter<'a, 't> {
        FindIter {
            automaton,
            text: automaton.options.effective(text),
            pos: 0,
            state: StateId::ROOT,
            // Position 0 is collected at the root before any byte is read.
            // It only reports something when the empty pattern is present.
            chain: Some(StateId::ROOT),
            end: 0,
        }
    }

    /// Bytes of the text consumed so far.
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl<'a, 't> Iterator for FindIter<'a, 't> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Match<'a>> {
        let automaton = self.automaton;
        let arena = &automaton.arena;

        loop {
            while let Some(id) = self.chain {
                let node = arena.node(id);
                self.chain = node.next_match;
                if let Some(pattern) = node.pattern {
                    return Some(automaton.match_at(pattern, self.end));
                }
            }

            if self.pos >= self.text.len() {
                return None;
            }

            if self.state == StateId::ROOT {
                if let Some(prefilter) = automaton.prefilter {
                    match prefilter.find(&self.text[self.pos..]) {
                        Some(skip) => self.pos += skip,
                        None => {
                            self.pos = self.text.len();
                            return None;
                        }
                    }
                }
            }

            self.state = arena.goto(self.state, self.text[self.pos]);
            self.pos += 1;
            if arena.node(self.state).match_count > 0 {
                self.chain = Some(self.state);
                self.end = self.pos;
            }
        }
    }
}

impl FusedIterator for FindIter<'_, '_> {}
