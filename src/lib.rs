//! Selection-triggered term summaries with remote lookup and on-page fallback.
//!
//! `hypercontext-core` watches a host page's selection events, resolves a
//! bounded summary for the selected term (remote encyclopedia lookup first,
//! heuristic on-page excerpt when the service is unreachable), and drives the
//! single transient tooltip through show, pointer tracking, auto-expiry, and
//! dismissal. The host page is reached only through the [`page::PageView`]
//! and [`tooltip::TooltipSurface`] seams.
//!
//! See <https://github.com/hypercontexthq/hypercontext> for the full platform.

pub mod extract;
pub mod fetch;
pub mod page;
pub mod resolve;
pub mod store;
pub mod tooltip;
pub mod types;
pub mod watch;
