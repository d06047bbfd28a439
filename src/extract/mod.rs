pub mod excerpt;
pub mod splitter;

pub use excerpt::{LocalExtractor, EXCERPT_RADIUS};
pub use splitter::{SentenceSplitter, TerminatorSplitter};
