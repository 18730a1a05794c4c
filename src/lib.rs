//! # ahotrie
//!
//! Aho-Corasick sample search trie over raw bytes.
//!
//! Build an automaton once from a set of sample strings, then find every
//! occurrence of every sample in any text in O(text length + matches).
//! Overlapping and nested occurrences are all reported.
//!
//! ## Quick Start
//!
//! ```rust
//! use ahotrie::prelude::*;
//!
//! let ac = Automaton::new(["a", "ab", "bab", "bc", "abc"]).unwrap();
//! let found: Vec<(&str, usize)> = ac
//!     .find("abcbab")
//!     .iter()
//!     .map(|m| (m.as_str().unwrap(), m.start()))
//!     .collect();
//! assert_eq!(
//!     found,
//!     [("a", 0), ("ab", 0), ("abc", 0), ("bc", 1), ("a", 4), ("bab", 3), ("ab", 4)]
//! );
//! ```
//!
//! For fine-grained control, use [`AutomatonBuilder`](api::AutomatonBuilder):
//!
//! ```rust
//! use ahotrie::prelude::*;
//!
//! let ac = Automaton::builder()
//!     .prefilter(false)
//!     .build([&b"\x00\x01"[..], &b"\xff"[..]])
//!     .unwrap();
//! assert!(ac.is_match(b"\x00\x01\x02"));
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`arena`] | Node store, state and pattern ids |
//! | [`trie`] | Pattern insertion |
//! | [`resolve`] | Suffix links, match chains, goto table |
//! | [`search`] | Scanning and match collection |
//! | [`api`] | `Automaton`, `AutomatonBuilder`, `Match` |
//! | [`options`] | Build option flags |
//! | [`error`] | Error type |
//!
//! ## Known Limitations
//!
//! With [`Options::NUL_TERMINATED`](options::Options::NUL_TERMINATED),
//! patterns and texts are cut at their first zero byte, so samples that
//! contain a zero byte cannot be found. Without it (the default) zero is an
//! ordinary byte.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod arena;
pub mod error;
pub mod options;
pub mod prelude;
pub mod resolve;
pub mod search;
pub mod trie;
