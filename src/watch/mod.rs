//! Selection-driven event loop: page events in, tooltip transitions out.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::extract::SentenceSplitter;
use crate::fetch::RemoteLookup;
use crate::page::PageView;
use crate::resolve::SummaryResolver;
use crate::tooltip::{Position, TooltipController};
use crate::types::Term;

/// User input events the watcher consumes, in the host page's dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Pointer released; may complete a selection.
    PointerRelease { x: f64, y: f64 },
    /// Key released; may complete a keyboard selection.
    KeyRelease,
    /// Pointer moved; tracked for tooltip placement.
    PointerMove { x: f64, y: f64 },
    /// Click landed on the tooltip itself.
    TooltipClick,
}

/// Watches selection triggers and drives resolution into the tooltip.
pub struct SelectionWatcher<R, S> {
    resolver: Arc<SummaryResolver<R, S>>,
    tooltip: TooltipController,
    page: Arc<dyn PageView>,
    pointer: Position,
}

impl<R, S> SelectionWatcher<R, S>
where
    R: RemoteLookup + Send + Sync + 'static,
    S: SentenceSplitter + Send + Sync + 'static,
{
    pub fn new(
        resolver: SummaryResolver<R, S>,
        tooltip: TooltipController,
        page: Arc<dyn PageView>,
    ) -> Self {
        SelectionWatcher {
            resolver: Arc::new(resolver),
            tooltip,
            page,
            pointer: Position::new(0.0, 0.0),
        }
    }

    /// Drain page events until the channel closes or `cancel` fires.
    pub async fn run(mut self, mut events: mpsc::Receiver<PageEvent>, cancel: CancellationToken) {
        loop {
            tokio::select! {
                maybe_event = events.recv() => match maybe_event {
                    Some(event) => self.handle(event),
                    None => break,
                },
                _ = cancel.cancelled() => {
                    debug!("selection watcher shutting down");
                    break;
                }
            }
        }
    }

    /// Dispatch a single event. Usable directly by embedders with their own
    /// loop.
    pub fn handle(&mut self, event: PageEvent) {
        match event {
            PageEvent::PointerRelease { x, y } => {
                self.pointer = Position::new(x, y);
                self.on_selection_trigger();
            }
            PageEvent::KeyRelease => self.on_selection_trigger(),
            PageEvent::PointerMove { x, y } => {
                self.pointer = Position::new(x, y);
                self.tooltip.track_pointer(self.pointer);
            }
            PageEvent::TooltipClick => self.tooltip.dismiss(),
        }
    }

    /// Validate the current selection and kick off resolution.
    ///
    /// Resolutions are not cancelled by later triggers: whichever finishes
    /// later shows last, and `show` replaces any predecessor outright.
    fn on_selection_trigger(&self) {
        let Some(raw) = self.page.current_selection() else {
            return;
        };
        let term = match Term::parse(&raw) {
            Ok(term) => term,
            Err(err) => {
                trace!(%err, "ignoring trivial selection");
                return;
            }
        };

        let page = self.page.visible_text();
        let resolver = Arc::clone(&self.resolver);
        let tooltip = self.tooltip.clone();
        let pointer = self.pointer;

        tokio::spawn(async move {
            let summary = resolver.resolve(&page, &term).await;
            tooltip.show(term, summary, pointer);
        });
    }
}
