//! Two-tier summary resolution: remote first, page excerpt on failure.

use tracing::debug;

use crate::extract::{LocalExtractor, SentenceSplitter, TerminatorSplitter};
use crate::fetch::{FetchError, LookupConfig, RemoteLookup, RemoteSummaryClient};
use crate::page::PageText;
use crate::types::{Summary, Term};

pub struct SummaryResolver<R, S = TerminatorSplitter> {
    remote: R,
    local: LocalExtractor<S>,
}

impl SummaryResolver<RemoteSummaryClient, TerminatorSplitter> {
    /// Resolver over the real service with the default splitter.
    pub fn from_config(config: LookupConfig) -> Result<Self, FetchError> {
        Ok(SummaryResolver {
            remote: RemoteSummaryClient::new(config)?,
            local: LocalExtractor::default(),
        })
    }
}

impl<R, S> SummaryResolver<R, S>
where
    R: RemoteLookup,
    S: SentenceSplitter,
{
    pub fn new(remote: R, local: LocalExtractor<S>) -> Self {
        SummaryResolver { remote, local }
    }

    /// Resolve a summary for `term` against the given page snapshot.
    ///
    /// Remote knowledge wins when reachable; any fetch failure degrades to
    /// the on-page excerpt, which always produces a result (including the
    /// not-found sentinel), so resolution itself cannot fail. A remote
    /// response with no extract is a successful lookup and does not fall
    /// back.
    pub async fn resolve(&self, page: &PageText, term: &Term) -> Summary {
        match self.remote.lookup(term).await {
            Ok(summary) => summary,
            Err(err) => {
                debug!(term = term.as_str(), error = %err, "remote lookup failed; using page excerpt");
                self.local.extract(page, term)
            }
        }
    }
}
