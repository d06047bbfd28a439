use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum selection length, in characters, after trimming.
pub const MIN_TERM_CHARS: usize = 3;

/// A validated user selection: trimmed, and long enough to look up.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("selection is empty after trimming")]
    Empty,
    #[error("selection is shorter than {MIN_TERM_CHARS} characters")]
    TooShort,
}

impl Term {
    /// Parse a raw selection into a Term.
    ///
    /// This is the ONLY way to construct a Term. Surrounding whitespace is
    /// trimmed; empty and sub-minimum selections are rejected so incidental
    /// clicks never reach the lookup pipeline.
    pub fn parse(raw: &str) -> Result<Self, SelectionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SelectionError::Empty);
        }
        if trimmed.chars().count() < MIN_TERM_CHARS {
            return Err(SelectionError::TooShort);
        }
        Ok(Term(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
