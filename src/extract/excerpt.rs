use tracing::trace;

use crate::extract::splitter::{SentenceSplitter, TerminatorSplitter};
use crate::page::PageText;
use crate::types::{Summary, Term};

/// Tokens kept on each side of the matched token.
pub const EXCERPT_RADIUS: usize = 20;

/// Extracts a bounded excerpt around a term from page text.
///
/// Pure function of the page snapshot and the term: no I/O, no mutation.
pub struct LocalExtractor<S = TerminatorSplitter> {
    splitter: S,
}

impl Default for LocalExtractor<TerminatorSplitter> {
    fn default() -> Self {
        LocalExtractor {
            splitter: TerminatorSplitter::default(),
        }
    }
}

impl<S> LocalExtractor<S>
where
    S: SentenceSplitter,
{
    pub fn new(splitter: S) -> Self {
        LocalExtractor { splitter }
    }

    /// Find the first sentence-like unit containing `term`, case-insensitive
    /// on both sides, and cut a token window around the first matching token.
    ///
    /// Returns the not-found sentinel when no unit contains the term.
    pub fn extract(&self, page: &PageText, term: &Term) -> Summary {
        let text = page.text().to_lowercase();
        let needle = term.as_str().to_lowercase();

        let Some(unit) = self
            .splitter
            .split(&text)
            .into_iter()
            .find(|unit| unit.contains(&needle))
        else {
            trace!(term = term.as_str(), "term not present in any page unit");
            return Summary::not_found_on_page(term);
        };

        let tokens: Vec<&str> = unit.split_whitespace().collect();
        // A multi-word selection never sits inside a single token; the window
        // anchors at the unit start in that case.
        let anchor = tokens
            .iter()
            .position(|token| token.contains(&needle))
            .unwrap_or(0);

        let start = anchor.saturating_sub(EXCERPT_RADIUS);
        let end = (anchor + EXCERPT_RADIUS + 1).min(tokens.len());

        Summary::page_excerpt(tokens[start..end].join(" "))
    }
}
