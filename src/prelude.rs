// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use ahotrie::prelude::*;
//!
//! let ac = Automaton::new(["needle"]).unwrap();
//! assert_eq!(ac.find("haystack needle")[0].start(), 9);
//! ```

pub use crate::api::{Automaton, AutomatonBuilder, Match};
pub use crate::arena::{PatternId, StateId};
pub use crate::error::BuildError;
pub use crate::options::Options;
pub use crate::search::FindIter;
