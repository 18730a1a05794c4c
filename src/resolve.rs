// resolve.rs - Suffix links, match chains and the dense goto table.
//
//   link(v)    = goto(link(parent(v)), symbol(v))
//   goto(v, c) = child(v, c) if the edge exists, else goto(link(v), c)
//   goto(FAIL, c) = ROOT
//
// Both recurrences only look at strictly shallower nodes (link(v) is a
// proper suffix of v), so visiting the trie breadth-first fills every
// entry exactly once without recursion.

use std::collections::VecDeque;

use crate::arena::{NodeArena, StateId, ALPHABET_LEN};

/// Resolve every node reachable from the root. Must run after all inserts.
pub(crate) fn resolve(arena: &mut NodeArena) {
    let mut queue = VecDeque::with_capacity(arena.len());
    queue.push_back(StateId::ROOT);

    while let Some(id) = queue.pop_front() {
        if id != StateId::ROOT {
            resolve_link(arena, id);
        }
        resolve_row(arena, id);
        queue.extend(arena.node(id).children.iter().map(|&(_, child)| child));
    }
}

/// Resolved goto entry. Reading an unresolved entry here means the
/// breadth-first order was broken.
#[inline]
fn resolved_goto(arena: &NodeArena, id: StateId, byte: u8) -> StateId {
    let next = arena.goto(id, byte);
    debug_assert_ne!(
        next,
        StateId::UNRESOLVED,
        "goto({:?}, {:#04x}) read before resolution",
        id,
        byte
    );
    next
}

fn resolve_link(arena: &mut NodeArena, id: StateId) {
    let node = arena.node(id);
    debug_assert!(node.suffix_link.is_none(), "suffix link of {:?} resolved twice", id);
    let (Some(parent), symbol) = (node.parent, node.symbol) else {
        unreachable!("sentinel {:?} has no suffix link to resolve", id);
    };
    let Some(parent_link) = arena.node(parent).suffix_link else {
        unreachable!("parent {:?} of {:?} is unresolved", parent, id);
    };

    let link = resolved_goto(arena, parent_link, symbol);
    let suffix = arena.node(link);
    let next_match = if suffix.is_terminal() {
        Some(link)
    } else {
        suffix.next_match
    };
    let inherited = suffix.match_count;

    let node = arena.node_mut(id);
    node.suffix_link = Some(link);
    node.next_match = next_match;
    node.match_count += inherited;
}

fn resolve_row(arena: &mut NodeArena, id: StateId) {
    let Some(link) = arena.node(id).suffix_link else {
        unreachable!("row of {:?} resolved before its suffix link", id);
    };
    for c in 0..ALPHABET_LEN {
        let byte = c as u8;
        let next = match arena.node(id).child(byte) {
            Some(child) => child,
            None => resolved_goto(arena, link, byte),
        };
        arena.set_goto(id, byte, next);
    }
}
