use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::debug;

use super::state::{Position, Tooltip, TooltipStatus};
use crate::types::{Summary, Term};

const DEFAULT_TTL_MS: u64 = 5_000;

/// Tooltip lifetime knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// How long a tooltip stays up with no click and no superseding show.
    pub ttl_ms: u64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            ttl_ms: DEFAULT_TTL_MS,
        }
    }
}

/// Write access to the host page: mount, move, and remove the single tooltip
/// element. The embedder renders; the controller only decides.
pub trait TooltipSurface: Send + Sync {
    fn mount(&self, tooltip: &Tooltip);
    fn reposition(&self, position: Position);
    fn unmount(&self);
}

struct Inner {
    current: Option<Tooltip>,
    expiry: Option<JoinHandle<()>>,
    generation: u64,
}

/// Owns the tooltip lifecycle.
///
/// At most one tooltip exists at any time: `show` tears down any predecessor
/// under the same lock acquisition, with no intermediate yield, so two
/// tooltips cannot coexist even when resolutions finish out of order.
#[derive(Clone)]
pub struct TooltipController {
    inner: Arc<Mutex<Inner>>,
    surface: Arc<dyn TooltipSurface>,
    ttl: Duration,
}

impl TooltipController {
    pub fn new(surface: Arc<dyn TooltipSurface>, config: TooltipConfig) -> Self {
        TooltipController {
            inner: Arc::new(Mutex::new(Inner {
                current: None,
                expiry: None,
                generation: 0,
            })),
            surface,
            ttl: Duration::from_millis(config.ttl_ms),
        }
    }

    pub fn status(&self) -> TooltipStatus {
        if self.inner.lock().current.is_some() {
            TooltipStatus::Visible
        } else {
            TooltipStatus::Absent
        }
    }

    /// Current tooltip, if one is visible.
    pub fn snapshot(&self) -> Option<Tooltip> {
        self.inner.lock().current.clone()
    }

    /// Display a tooltip for `term` at the pointer, replacing any existing
    /// one first, and arm the one-shot expiry timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, term: Term, summary: Summary, pointer: Position) {
        let mut inner = self.inner.lock();
        Self::teardown(&mut inner, &self.surface);

        inner.generation = inner.generation.wrapping_add(1);
        let generation = inner.generation;

        let tooltip = Tooltip::new(term, summary, pointer.tooltip_anchor());
        debug!(term = tooltip.term.as_str(), "tooltip shown");
        self.surface.mount(&tooltip);
        inner.current = Some(tooltip);

        let controller = self.clone();
        let ttl = self.ttl;
        inner.expiry = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            controller.expire(generation);
        }));
    }

    /// Remove the tooltip, if any. Redundant calls are no-ops.
    pub fn dismiss(&self) {
        let mut inner = self.inner.lock();
        Self::teardown(&mut inner, &self.surface);
    }

    /// Track the pointer while a tooltip is visible; no-op otherwise.
    pub fn track_pointer(&self, pointer: Position) {
        let mut inner = self.inner.lock();
        if let Some(tooltip) = inner.current.as_mut() {
            tooltip.position = pointer.tooltip_anchor();
            self.surface.reposition(tooltip.position);
        }
    }

    /// Expiry path: only the generation that armed the timer may dismiss. A
    /// timer outlived by a newer `show` lands here and leaves it alone.
    fn expire(&self, generation: u64) {
        let mut inner = self.inner.lock();
        if inner.generation != generation {
            return;
        }
        Self::teardown(&mut inner, &self.surface);
    }

    fn teardown(inner: &mut Inner, surface: &Arc<dyn TooltipSurface>) {
        if inner.current.take().is_some() {
            debug!("tooltip removed");
            surface.unmount();
        }
        if let Some(expiry) = inner.expiry.take() {
            expiry.abort();
        }
    }
}
