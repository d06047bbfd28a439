use regex::Regex;

/// A sentence-like unit: a run of non-terminator characters followed by one
/// or more terminators.
const TERMINATOR_PATTERN: &str = r"[^.!?]+[.!?]+";

/// Strategy for cutting page text into sentence-like units.
///
/// Splitting is a heuristic, not grammatical parsing; implementations can be
/// swapped without touching resolver logic.
pub trait SentenceSplitter {
    /// Split `text` into units, in document order. Trailing text with no
    /// terminator is not a unit.
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Default splitter over `.`, `!`, `?` terminator runs.
///
/// Mis-splits on abbreviations, decimals, and the like; accepted behavior.
pub struct TerminatorSplitter {
    pattern: Regex,
}

impl Default for TerminatorSplitter {
    fn default() -> Self {
        TerminatorSplitter {
            pattern: Regex::new(TERMINATOR_PATTERN).expect("terminator pattern compiles"),
        }
    }
}

impl SentenceSplitter for TerminatorSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern.find_iter(text).map(|m| m.as_str()).collect()
    }
}
