//! End-to-end tests: driver, ring, and page controls on a simulated host.

#![cfg(not(target_arch = "wasm32"))]

use proptest::prelude::*;
use ringbar::widgets::RingState;
use ringbar::{
    parse_percent, AnimateOptions, AnimationDuration, AnimationError, Controls, DrawCommand,
    ProgressRing, RecordingView, RingStyle,
};
use ringbar_test::FrameHarness;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn label(view: &RecordingView) -> Option<String> {
    view.commands().into_iter().find_map(|c| match c {
        DrawCommand::Text { content, .. } => Some(content),
        _ => None,
    })
}

// =============================================================================
// Driver
// =============================================================================

#[test]
fn test_driver_fractions_monotonic_and_end_at_one() {
    let harness = FrameHarness::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let completed = Rc::new(Cell::new(0));

    let s = Rc::clone(&seen);
    let c = Rc::clone(&completed);
    harness
        .animator()
        .run(
            250.0,
            move |f| s.borrow_mut().push(f),
            Some(Box::new(move || c.set(c.get() + 1))),
        )
        .expect("run");

    harness.run_until_idle(16.0, 100);

    let seen = seen.borrow();
    assert_eq!(seen.first(), Some(&0.0));
    assert_eq!(seen.last(), Some(&1.0));
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert!(seen.iter().all(|f| (0.0..=1.0).contains(f)));
    assert_eq!(completed.get(), 1);
}

#[test]
fn test_driver_first_frame_is_zero_even_when_late() {
    let harness = FrameHarness::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    harness
        .animator()
        .run(100.0, move |f| s.borrow_mut().push(f), None)
        .expect("run");

    harness.frame_at(70.0);
    harness.frame_at(80.0);
    assert_eq!(*seen.borrow(), vec![0.0, 0.8]);
}

#[test]
fn test_driver_rejects_non_numeric_duration() {
    let err = "abc".parse::<AnimationDuration>().expect_err("not a number");
    assert!(matches!(err, AnimationError::InvalidArgument(_)));
}

// =============================================================================
// Ring
// =============================================================================

#[test]
fn test_ring_fifty_percent_scenario() {
    let harness = FrameHarness::new();
    let ring = ProgressRing::new(harness.animator(), RecordingView::default());
    let ended = Rc::new(Cell::new(0));
    let e = Rc::clone(&ended);

    assert!(!ring.status_animate());
    ring.animate(AnimateOptions::new(50.0, 1000.0).on_end(move || e.set(e.get() + 1)))
        .expect("animate");
    assert!(ring.status_animate());

    harness.frame_at(0.0);
    assert_eq!(ring.percent(), 0);
    assert_eq!(label(ring.view()).as_deref(), Some("0%"));

    harness.frame_at(500.0);
    assert_eq!(ring.percent(), 25);
    assert_eq!(label(ring.view()).as_deref(), Some("25%"));

    harness.frame_at(1200.0);
    assert_eq!(ring.percent(), 50);
    assert_eq!(ended.get(), 1);
    assert!(!ring.status_animate());

    harness.run_until_idle(16.0, 10);
    assert_eq!(ended.get(), 1);
}

#[test]
fn test_ring_invalid_duration_schedules_nothing() {
    let harness = FrameHarness::new();
    let ring = ProgressRing::new(harness.animator(), RecordingView::default());

    let err = ring
        .animate(AnimateOptions::new(50.0, 0.0))
        .expect_err("zero duration");
    assert!(matches!(err, AnimationError::InvalidArgument(_)));
    assert!(harness.is_idle());
    assert!(!ring.status_animate());
    assert!(ring.view().history().is_empty());
}

#[test]
fn test_ring_hide_unhide_during_run() {
    let harness = FrameHarness::new();
    let ring = ProgressRing::new(harness.animator(), RecordingView::default());
    ring.animate(AnimateOptions::new(100.0, 400.0)).expect("animate");
    harness.frame_at(0.0);
    harness.frame_at(200.0);

    let before: RingState = ring.state();
    ring.hide();
    assert!(ring.view().commands().is_empty());
    assert!(ring.status_hidden());
    ring.unhide();

    assert_eq!(ring.state(), before, "hide/unhide touches only the hidden flag");
    assert_eq!(ring.percent(), 50);
    assert!(ring.status_animate());

    harness.run_until_idle(100.0, 20);
    assert_eq!(ring.percent(), 100);
    assert!(!ring.status_hidden());
}

#[test]
fn test_ring_mounts_into_container() {
    let harness = FrameHarness::new();
    let ring = ProgressRing::new(harness.animator(), RecordingView::default());
    let container = RefCell::new(Vec::new());
    ring.create(&container).expect("mount");
    assert!(!container.borrow().is_empty());
}

#[test]
fn test_ring_custom_style_label() {
    let style = RingStyle::from_toml("suffix = \" pct\"").expect("style");
    let harness = FrameHarness::new();
    let ring = ProgressRing::new(harness.animator(), RecordingView::new(style));
    ring.animate(AnimateOptions::new(10.0, 100.0)).expect("animate");
    harness.run_until_idle(50.0, 10);
    assert_eq!(label(ring.view()).as_deref(), Some("10 pct"));
}

// =============================================================================
// Page flow
// =============================================================================

/// Mirrors what the browser demo does on each click.
struct Page {
    ring: ProgressRing<RecordingView>,
    controls: Rc<RefCell<Controls>>,
}

impl Page {
    fn new(harness: &FrameHarness) -> Self {
        Self {
            ring: ProgressRing::new(harness.animator(), RecordingView::default()),
            controls: Rc::new(RefCell::new(Controls::default())),
        }
    }

    fn click_start(&self, input: &str) -> Result<(), AnimationError> {
        let percent = parse_percent(input)?;
        let controls = Rc::clone(&self.controls);
        self.ring.animate(
            AnimateOptions::new(percent, 300.0)
                .on_end(move || controls.borrow_mut().animation_ended()),
        )?;
        self.controls.borrow_mut().animation_started();
        Ok(())
    }

    fn controls(&self) -> Controls {
        *self.controls.borrow()
    }
}

#[test]
fn test_page_start_disables_button_until_end() {
    let harness = FrameHarness::new();
    let page = Page::new(&harness);
    assert_eq!(page.controls(), Controls::default());

    page.click_start(" 75 ").expect("start");
    assert!(!page.controls().start_enabled);

    harness.run_until_idle(100.0, 10);
    assert!(page.controls().start_enabled);
    assert_eq!(page.ring.percent(), 75);
}

#[test]
fn test_page_invalid_input_keeps_button_enabled() {
    let harness = FrameHarness::new();
    let page = Page::new(&harness);
    for input in ["", "abc", "101", "-3"] {
        assert!(page.click_start(input).is_err(), "{input:?} accepted");
        assert!(page.controls().start_enabled);
    }
    assert!(harness.is_idle());
}

#[test]
fn test_page_hide_unhide_buttons() {
    let harness = FrameHarness::new();
    let page = Page::new(&harness);
    let mut controls = page.controls();

    page.ring.hide();
    controls.hidden();
    assert!(page.ring.status_hidden());
    assert!(!controls.hide_enabled && controls.unhide_enabled);

    page.ring.unhide();
    controls.shown();
    assert!(!page.ring.status_hidden());
    assert_eq!(controls, Controls::default());
}

proptest! {
    #[test]
    fn prop_any_accepted_run_lands_on_target(
        percent in 0.0f64..=100.0,
        duration in 1.0f64..5000.0,
        interval in 1.0f64..100.0,
    ) {
        let harness = FrameHarness::new();
        let ring = ProgressRing::new(harness.animator(), RecordingView::default());
        let ended = Rc::new(Cell::new(0));
        let e = Rc::clone(&ended);
        ring.animate(AnimateOptions::new(percent, duration).on_end(move || e.set(e.get() + 1)))
            .expect("valid request");

        harness.run_until_idle(interval, 10_000);

        prop_assert_eq!(f64::from(ring.percent()), percent.round());
        prop_assert_eq!(ended.get(), 1);
        prop_assert!(!ring.status_animate());
        let history = ring.view().history();
        prop_assert_eq!(history.first(), Some(&0));
        prop_assert!(history.windows(2).all(|w| w[0] <= w[1]));
    }
}
