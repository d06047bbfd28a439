pub mod summary;
pub mod term;

pub use summary::{Summary, SummaryOrigin, SUMMARY_CHAR_LIMIT};
pub use term::{SelectionError, Term, MIN_TERM_CHARS};
