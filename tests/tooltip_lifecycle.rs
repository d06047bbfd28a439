use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use hypercontext_core::tooltip::{
    Position, Tooltip, TooltipConfig, TooltipController, TooltipStatus, TooltipSurface,
    POINTER_OFFSET,
};
use hypercontext_core::types::{Summary, Term};

#[derive(Default)]
struct RecordingSurface {
    mounts: AtomicUsize,
    unmounts: AtomicUsize,
    last_mounted: Mutex<Option<Tooltip>>,
    repositions: Mutex<Vec<Position>>,
}

impl TooltipSurface for RecordingSurface {
    fn mount(&self, tooltip: &Tooltip) {
        self.mounts.fetch_add(1, Ordering::SeqCst);
        *self.last_mounted.lock() = Some(tooltip.clone());
    }

    fn reposition(&self, position: Position) {
        self.repositions.lock().push(position);
    }

    fn unmount(&self) {
        self.unmounts.fetch_add(1, Ordering::SeqCst);
    }
}

fn controller(surface: &Arc<RecordingSurface>) -> TooltipController {
    TooltipController::new(surface.clone(), TooltipConfig::default())
}

fn term(s: &str) -> Term {
    Term::parse(s).unwrap()
}

fn summary(s: &str) -> Summary {
    Summary::remote(s)
}

#[tokio::test]
async fn show_mounts_one_tooltip_at_the_anchor_offset() {
    let surface = Arc::new(RecordingSurface::default());
    let tooltips = controller(&surface);

    tooltips.show(term("dog"), summary("A dog."), Position::new(10.0, 20.0));

    assert_eq!(tooltips.status(), TooltipStatus::Visible);
    assert_eq!(surface.mounts.load(Ordering::SeqCst), 1);

    let shown = tooltips.snapshot().unwrap();
    assert_eq!(shown.term.as_str(), "dog");
    assert_eq!(shown.position.x, 10.0 + POINTER_OFFSET);
    assert_eq!(shown.position.y, 20.0 + POINTER_OFFSET);
}

#[tokio::test]
async fn second_show_replaces_the_first_synchronously() {
    let surface = Arc::new(RecordingSurface::default());
    let tooltips = controller(&surface);

    tooltips.show(term("first"), summary("First."), Position::new(0.0, 0.0));
    tooltips.show(term("second"), summary("Second."), Position::new(0.0, 0.0));

    // Exactly one tooltip present: two mounted, one torn down
    assert_eq!(surface.mounts.load(Ordering::SeqCst), 2);
    assert_eq!(surface.unmounts.load(Ordering::SeqCst), 1);
    assert_eq!(tooltips.status(), TooltipStatus::Visible);
    assert_eq!(tooltips.snapshot().unwrap().term.as_str(), "second");
    assert_eq!(
        surface.last_mounted.lock().as_ref().unwrap().summary.text(),
        "Second."
    );
}

#[tokio::test]
async fn dismiss_removes_and_redundant_dismiss_is_a_no_op() {
    let surface = Arc::new(RecordingSurface::default());
    let tooltips = controller(&surface);

    tooltips.show(term("dog"), summary("A dog."), Position::new(0.0, 0.0));
    tooltips.dismiss();

    assert_eq!(tooltips.status(), TooltipStatus::Absent);
    assert_eq!(surface.unmounts.load(Ordering::SeqCst), 1);

    tooltips.dismiss();
    tooltips.dismiss();
    assert_eq!(surface.unmounts.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn tooltip_expires_after_its_ttl() {
    let surface = Arc::new(RecordingSurface::default());
    let tooltips = controller(&surface);

    tooltips.show(term("dog"), summary("A dog."), Position::new(0.0, 0.0));

    tokio::time::sleep(Duration::from_millis(4_900)).await;
    assert_eq!(tooltips.status(), TooltipStatus::Visible);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(tooltips.status(), TooltipStatus::Absent);
    assert_eq!(surface.unmounts.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn superseding_show_restarts_the_clock() {
    let surface = Arc::new(RecordingSurface::default());
    let tooltips = controller(&surface);

    tooltips.show(term("first"), summary("First."), Position::new(0.0, 0.0));
    tokio::time::sleep(Duration::from_millis(4_900)).await;

    tooltips.show(term("second"), summary("Second."), Position::new(0.0, 0.0));

    // Past the first tooltip's original deadline: the second must survive
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(tooltips.status(), TooltipStatus::Visible);
    assert_eq!(tooltips.snapshot().unwrap().term.as_str(), "second");

    // And still expire on its own schedule
    tokio::time::sleep(Duration::from_millis(4_900)).await;
    assert_eq!(tooltips.status(), TooltipStatus::Absent);
}

#[tokio::test]
async fn pointer_tracking_moves_a_visible_tooltip() {
    let surface = Arc::new(RecordingSurface::default());
    let tooltips = controller(&surface);

    tooltips.show(term("dog"), summary("A dog."), Position::new(10.0, 20.0));
    tooltips.track_pointer(Position::new(100.0, 200.0));

    let shown = tooltips.snapshot().unwrap();
    assert_eq!(shown.position.x, 100.0 + POINTER_OFFSET);
    assert_eq!(shown.position.y, 200.0 + POINTER_OFFSET);
    assert_eq!(surface.repositions.lock().len(), 1);
}

#[tokio::test]
async fn pointer_tracking_is_a_no_op_while_absent() {
    let surface = Arc::new(RecordingSurface::default());
    let tooltips = controller(&surface);

    tooltips.track_pointer(Position::new(100.0, 200.0));

    assert_eq!(tooltips.status(), TooltipStatus::Absent);
    assert!(surface.repositions.lock().is_empty());
}
