// error.rs - Error type for automaton construction.
//
// Scanning cannot fail; only building the trie has a recoverable error.

use std::fmt;

/// Error returned when an [`Automaton`](crate::api::Automaton) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Inserting the patterns would grow the trie past the configured
    /// number of states (sentinels included).
    StateLimitExceeded { limit: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::StateLimitExceeded { limit } => {
                write!(f, "state limit exceeded: automaton needs more than {} states", limit)
            }
        }
    }
}

impl std::error::Error for BuildError {}

impl BuildError {
    /// The limit that was hit.
    pub fn limit(&self) -> usize {
        match self {
            BuildError::StateLimitExceeded { limit } => *limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_impl() {
        let err = BuildError::StateLimitExceeded { limit: 16 };
        assert_eq!(
            format!("{}", err),
            "state limit exceeded: automaton needs more than 16 states"
        );
        assert_eq!(err.limit(), 16);
    }

    #[test]
    fn error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(BuildError::StateLimitExceeded { limit: 2 });
        assert!(err.to_string().contains("state limit"));
    }
}
