use serde::{Deserialize, Serialize};

use crate::types::term::Term;

/// Character budget for summary text before truncation.
pub const SUMMARY_CHAR_LIMIT: usize = 250;

/// Marker appended when summary text is cut at the character budget.
const TRUNCATION_MARKER: &str = "...";

/// Where a summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOrigin {
    Remote,
    PageExcerpt,
    NotFoundOnPage,
}

/// A displayable summary, bounded to the character budget.
///
/// Constructed only through the origin-specific constructors, which enforce
/// the bound for remote and excerpt text. The not-found sentinel embeds the
/// term verbatim and is stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    text: String,
    origin: SummaryOrigin,
}

impl Summary {
    /// Summary text obtained from the remote service.
    pub fn remote(text: impl Into<String>) -> Self {
        Summary {
            text: bounded(text.into()),
            origin: SummaryOrigin::Remote,
        }
    }

    /// Excerpt extracted from the page's own text.
    pub fn page_excerpt(text: impl Into<String>) -> Self {
        Summary {
            text: bounded(text.into()),
            origin: SummaryOrigin::PageExcerpt,
        }
    }

    /// Sentinel shown when the term appears nowhere on the page.
    pub fn not_found_on_page(term: &Term) -> Self {
        Summary {
            text: format!("Local context for \"{term}\": Not found on page."),
            origin: SummaryOrigin::NotFoundOnPage,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> SummaryOrigin {
        self.origin
    }
}

/// Cut to the first [`SUMMARY_CHAR_LIMIT`] characters plus a marker.
fn bounded(text: String) -> String {
    if text.chars().count() > SUMMARY_CHAR_LIMIT {
        let mut cut: String = text.chars().take(SUMMARY_CHAR_LIMIT).collect();
        cut.push_str(TRUNCATION_MARKER);
        cut
    } else {
        text
    }
}
