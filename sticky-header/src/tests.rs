use crate::*;

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

const HEADER: &str = ".sg-sticky-header";
const HEADER_HEIGHT: u32 = 60;

#[derive(Clone, Debug)]
struct FakeElement {
    selector: String,
    top: i64,
    height: u32,
}

/// In-memory document: a flat list of elements plus recorded side effects.
#[derive(Clone, Debug, Default)]
struct FakeDom {
    elements: Vec<FakeElement>,
    scroll_top: u64,
    viewport_height: u64,
    content_height: u64,
    classes: BTreeMap<usize, BTreeSet<String>>,
    positions: BTreeMap<usize, Position>,
    padding_top: Option<u32>,
    events: Vec<(usize, EventKind)>,
}

impl FakeDom {
    fn new() -> Self {
        Self {
            viewport_height: 800,
            content_height: 10_000,
            ..Self::default()
        }
        .with_element(HEADER, 0, HEADER_HEIGHT)
    }

    fn with_element(mut self, selector: &str, top: i64, height: u32) -> Self {
        self.elements.push(FakeElement {
            selector: selector.to_string(),
            top,
            height,
        });
        self
    }

    fn has_class(&self, element: usize, class: &str) -> bool {
        self.classes
            .get(&element)
            .is_some_and(|set| set.contains(class))
    }
}

impl Dom for FakeDom {
    type Element = usize;

    fn query_selector(&self, selector: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.selector == selector)
    }

    fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    fn offset_height(&self, element: &usize) -> u32 {
        self.elements[*element].height
    }

    fn page_top(&self, element: &usize) -> i64 {
        self.elements[*element].top
    }

    fn viewport_height(&self) -> u64 {
        self.viewport_height
    }

    fn content_height(&self) -> u64 {
        self.content_height
    }

    fn add_class(&mut self, element: &usize, class: &str) {
        self.classes
            .entry(*element)
            .or_default()
            .insert(class.to_string());
    }

    fn remove_class(&mut self, element: &usize, class: &str) {
        if let Some(set) = self.classes.get_mut(element) {
            set.remove(class);
        }
    }

    fn set_position(&mut self, element: &usize, position: Position) {
        self.positions.insert(*element, position);
    }

    fn set_body_padding_top(&mut self, padding: u32) {
        self.padding_top = Some(padding);
    }

    fn dispatch_event(&mut self, event: StickyHeaderEvent<'_, usize>) {
        self.events.push((*event.header, event.kind));
    }
}

fn engine(dom: FakeDom, options: StickyHeaderOptions) -> StickyHeader<FakeDom> {
    StickyHeader::new(dom, options).unwrap()
}

fn scroll(h: &mut StickyHeader<FakeDom>, st: u64) {
    h.dom_mut().scroll_top = st;
    h.on_scroll_tick();
}

fn scroll_and_poll(h: &mut StickyHeader<FakeDom>, st: u64) {
    scroll(h, st);
    assert!(h.poll());
}

fn take_events(h: &mut StickyHeader<FakeDom>) -> Vec<EventKind> {
    core::mem::take(&mut h.dom_mut().events)
        .into_iter()
        .map(|(_, kind)| kind)
        .collect()
}

fn over(selector: Option<&str>) -> EventKind {
    EventKind::Over {
        element: selector.map(ToString::to_string),
    }
}

fn offset_y(y: u64, axis: Axis) -> EventKind {
    EventKind::OffsetY { y, axis }
}

#[test]
fn default_options_match_documented_defaults() {
    let opts = StickyHeaderOptions::default();
    assert_eq!(opts.target, ".sg-sticky-header");
    assert_eq!(opts.sticky_start, 0);
    assert_eq!(opts.offset_start, 0);
    assert!(opts.hidden);
    assert!(opts.element_on_over.is_empty());
    assert!(opts.on_offset_y.is_empty());
    assert_eq!(opts.delta, 5);
    assert_eq!(opts.poll_interval_ms, 250);

    let custom = StickyHeaderOptions::new("#nav").with_sticky_start(100);
    assert_eq!(custom.target, "#nav");
    assert_eq!(custom.sticky_start, 100);
    assert!(custom.hidden);
}

#[cfg(feature = "serde")]
#[test]
fn partial_config_is_merged_over_defaults() {
    let opts: StickyHeaderOptions =
        serde_json::from_str(r#"{"stickyStart":100,"onOffsetY":[500,1500],"hidden":false}"#)
            .unwrap();
    assert_eq!(opts.sticky_start, 100);
    assert_eq!(opts.on_offset_y, vec![500, 1500]);
    assert!(!opts.hidden);
    assert_eq!(opts.target, DEFAULT_TARGET);
    assert_eq!(opts.offset_start, 0);
    assert_eq!(opts.delta, DEFAULT_DELTA);
    assert_eq!(opts.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);

    let empty: StickyHeaderOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, StickyHeaderOptions::default());
}

#[cfg(feature = "serde")]
#[test]
fn event_kinds_serialize_with_a_type_tag() {
    let json = serde_json::to_value(offset_y(500, Axis::Down)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "type": "offsetY", "y": 500, "axis": "down" })
    );
    let json = serde_json::to_value(over(None)).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "over", "element": null }));
}

#[test]
fn missing_target_is_an_error() {
    let err = StickyHeader::new(FakeDom::new(), StickyHeaderOptions::new("#nope")).unwrap_err();
    assert_eq!(
        err,
        Error::TargetNotFound {
            selector: "#nope".to_string()
        }
    );
    assert_eq!(err.to_string(), "sticky header target `#nope` not found");
}

#[test]
fn missing_region_is_an_error() {
    let dom = FakeDom::new().with_element("#a", 200, 100);
    let opts = StickyHeaderOptions::default().with_element_on_over(["#a", "#b"]);
    let err = StickyHeader::new(dom, opts).unwrap_err();
    assert_eq!(
        err,
        Error::RegionTargetNotFound {
            selector: "#b".to_string()
        }
    );
}

#[test]
fn regions_are_measured_at_construction() {
    let dom = FakeDom::new()
        .with_element("#promo", 200, 200)
        .with_element("#above", -30, 50);
    let opts = StickyHeaderOptions::default().with_element_on_over(["#promo", "#above"]);
    let h = engine(dom, opts);

    assert_eq!(h.navbar_height(), HEADER_HEIGHT);
    assert_eq!(
        h.regions(),
        &[
            Region {
                start: 200,
                end: 400,
                target: "#promo".to_string()
            },
            Region {
                start: 0,
                end: 50,
                target: "#above".to_string()
            },
        ]
    );
}

#[test]
fn refresh_regions_picks_up_layout_changes() {
    let dom = FakeDom::new().with_element("#promo", 200, 200);
    let opts = StickyHeaderOptions::default().with_element_on_over(["#promo"]);
    let mut h = engine(dom, opts);

    h.dom_mut().elements[1].top = 1_000;
    assert_eq!(h.regions()[0].start, 200);

    h.refresh_regions().unwrap();
    assert_eq!(h.regions()[0].start, 1_000);
    assert_eq!(h.regions()[0].end, 1_200);
}

#[test]
fn header_becomes_fixed_when_scrolling_down_past_sticky_start() {
    let opts = StickyHeaderOptions::default().with_sticky_start(100);
    let mut h = engine(FakeDom::new(), opts);

    scroll_and_poll(&mut h, 50);
    assert_eq!(h.state().last_scroll_top, 50);
    assert_eq!(h.dom().positions.get(&0), Some(&Position::Relative));

    scroll(&mut h, 150);
    assert_eq!(h.dom().positions.get(&0), Some(&Position::Fixed));
    assert_eq!(h.dom().padding_top, Some(HEADER_HEIGHT));
    assert_eq!(h.state().position, Some(Position::Fixed));
}

#[test]
fn position_only_switches_when_crossing_sticky_start() {
    let opts = StickyHeaderOptions::default().with_sticky_start(100);
    let mut h = engine(FakeDom::new(), opts);

    scroll_and_poll(&mut h, 150);
    assert_eq!(h.state().position, Some(Position::Fixed));

    // Moving up but still past the threshold keeps the header fixed.
    scroll(&mut h, 120);
    assert_eq!(h.state().position, Some(Position::Fixed));
    assert_eq!(h.dom().padding_top, Some(HEADER_HEIGHT));

    scroll(&mut h, 90);
    assert_eq!(h.state().position, Some(Position::Relative));
    assert_eq!(h.dom().padding_top, Some(0));
}

#[test]
fn position_is_not_rewritten_while_unchanged() {
    let opts = StickyHeaderOptions::default().with_sticky_start(100);
    let mut h = engine(FakeDom::new(), opts);

    scroll(&mut h, 150);
    h.dom_mut().padding_top = None;
    scroll(&mut h, 160);
    assert_eq!(h.dom().padding_top, None);
}

#[test]
fn region_overlap_reports_enter_and_leave() {
    let dom = FakeDom::new().with_element("#promo", 200, 200);
    let opts = StickyHeaderOptions::default().with_element_on_over(["#promo"]);
    let mut h = engine(dom, opts);

    scroll(&mut h, 300);
    assert_eq!(take_events(&mut h), vec![over(Some("#promo"))]);
    assert_eq!(h.state().over.as_deref(), Some("#promo"));

    scroll(&mut h, 350);
    scroll(&mut h, 400);
    assert!(take_events(&mut h).is_empty());

    scroll(&mut h, 450);
    assert_eq!(take_events(&mut h), vec![over(None)]);
    assert_eq!(h.state().over, None);

    scroll(&mut h, 500);
    assert!(take_events(&mut h).is_empty());
}

#[test]
fn overlap_without_prior_region_is_silent() {
    let dom = FakeDom::new().with_element("#promo", 200, 200);
    let opts = StickyHeaderOptions::default().with_element_on_over(["#promo"]);
    let mut h = engine(dom, opts);

    scroll(&mut h, 50);
    assert!(take_events(&mut h).is_empty());
}

#[test]
fn overlapping_regions_resolve_to_the_first_listed() {
    let dom = FakeDom::new()
        .with_element("#a", 200, 200)
        .with_element("#b", 300, 200);
    let opts = StickyHeaderOptions::default().with_element_on_over(["#a", "#b"]);
    let mut h = engine(dom, opts);

    scroll(&mut h, 350);
    assert_eq!(take_events(&mut h), vec![over(Some("#a"))]);

    scroll(&mut h, 450);
    assert_eq!(take_events(&mut h), vec![over(Some("#b"))]);

    scroll(&mut h, 350);
    assert_eq!(take_events(&mut h), vec![over(Some("#a"))]);
}

#[test]
fn events_carry_the_header() {
    let dom = FakeDom::new().with_element("#promo", 200, 200);
    let opts = StickyHeaderOptions::default().with_element_on_over(["#promo"]);
    let mut h = engine(dom, opts);

    scroll(&mut h, 300);
    let (header, kind) = h.dom().events[0].clone();
    assert_eq!(header, *h.header());
    assert_eq!(kind.name(), "sticky-header-over");
}

#[test]
fn breakpoints_fire_once_per_bracket_when_scrolling_down() {
    let opts = StickyHeaderOptions::default().with_on_offset_y([500, 1500]);
    let mut h = engine(FakeDom::new(), opts);

    scroll(&mut h, 600);
    assert_eq!(take_events(&mut h), vec![offset_y(500, Axis::Down)]);

    // Still inside [500, 1500) and still moving down relative to the last evaluation.
    scroll(&mut h, 800);
    assert!(take_events(&mut h).is_empty());

    h.poll();
    take_events(&mut h);

    scroll(&mut h, 1600);
    assert_eq!(take_events(&mut h), vec![offset_y(1500, Axis::Down)]);
    assert_eq!(
        h.state().breakpoint,
        Some(CrossedBreakpoint {
            y: 1500,
            axis: Axis::Down
        })
    );
}

#[test]
fn breakpoint_direction_flip_fires_again() {
    let opts = StickyHeaderOptions::default().with_on_offset_y([500, 1500]);
    let mut h = engine(FakeDom::new(), opts);

    scroll_and_poll(&mut h, 600);
    take_events(&mut h);

    scroll(&mut h, 450);
    assert_eq!(take_events(&mut h), vec![offset_y(500, Axis::Up)]);

    scroll(&mut h, 400);
    assert!(take_events(&mut h).is_empty());
}

#[test]
fn breakpoints_are_skipped_when_offset_is_unchanged() {
    let opts = StickyHeaderOptions::default().with_on_offset_y([0, 500]);
    let mut h = engine(FakeDom::new(), opts);

    scroll(&mut h, 0);
    assert!(take_events(&mut h).is_empty());
    assert!(h.state().breakpoint.is_none());
}

#[test]
fn empty_breakpoints_and_regions_are_a_valid_configuration() {
    let mut h = engine(FakeDom::new(), StickyHeaderOptions::default());
    scroll(&mut h, 600);
    scroll(&mut h, 10);
    assert!(take_events(&mut h).is_empty());
}

#[test]
fn find_breakpoint_uses_half_open_brackets() {
    let ys = [500, 1500];

    assert_eq!(find_breakpoint(&ys, 499, Axis::Down), None);
    assert_eq!(find_breakpoint(&ys, 500, Axis::Down), Some(500));
    assert_eq!(find_breakpoint(&ys, 1499, Axis::Down), Some(500));
    assert_eq!(find_breakpoint(&ys, 1500, Axis::Down), Some(1500));
    assert_eq!(find_breakpoint(&ys, 9000, Axis::Down), Some(1500));

    assert_eq!(find_breakpoint(&ys, 0, Axis::Up), Some(500));
    assert_eq!(find_breakpoint(&ys, 500, Axis::Up), Some(500));
    assert_eq!(find_breakpoint(&ys, 501, Axis::Up), Some(1500));
    assert_eq!(find_breakpoint(&ys, 1500, Axis::Up), Some(1500));
    assert_eq!(find_breakpoint(&ys, 1501, Axis::Up), None);

    assert_eq!(find_breakpoint(&[], 100, Axis::Down), None);
    assert_eq!(find_breakpoint(&[], 100, Axis::Up), None);
}

#[test]
fn unsorted_breakpoints_do_not_panic() {
    let ys = [1500, 500, 900];
    for st in [0, 499, 500, 700, 900, 1500, 2000] {
        let _ = find_breakpoint(&ys, st, Axis::Down);
        let _ = find_breakpoint(&ys, st, Axis::Up);
    }

    let opts = StickyHeaderOptions::default().with_on_offset_y(ys);
    assert!(!opts.breakpoints_sorted());
    let mut h = engine(FakeDom::new(), opts);
    scroll_and_poll(&mut h, 700);
    scroll_and_poll(&mut h, 100);
}

#[test]
fn find_region_is_inclusive_and_first_match() {
    let regions = [
        Region {
            start: 200,
            end: 400,
            target: "#a".to_string(),
        },
        Region {
            start: 400,
            end: 600,
            target: "#b".to_string(),
        },
    ];
    assert_eq!(find_region(&regions, 199), None);
    assert_eq!(find_region(&regions, 200), Some(0));
    assert_eq!(find_region(&regions, 400), Some(0));
    assert_eq!(find_region(&regions, 401), Some(1));
    assert_eq!(find_region(&regions, 601), None);
    assert_eq!(find_region(&[], 0), None);
}

#[test]
fn hide_and_show_classes_follow_direction() {
    let mut h = engine(FakeDom::new(), StickyHeaderOptions::default());

    scroll_and_poll(&mut h, 300);
    assert!(h.dom().has_class(0, CLASS_UP));
    assert!(!h.dom().has_class(0, CLASS_DOWN));
    assert_eq!(take_events(&mut h), vec![EventKind::Start]);
    assert_eq!(h.state().sticky_phase, StickyPhase::Start);

    scroll_and_poll(&mut h, 200);
    assert!(h.dom().has_class(0, CLASS_DOWN));
    assert!(!h.dom().has_class(0, CLASS_UP));
    // Still below the header height: the header stays sticky.
    assert!(take_events(&mut h).is_empty());

    scroll_and_poll(&mut h, 10);
    assert_eq!(take_events(&mut h), vec![EventKind::End]);
    assert_eq!(h.state().sticky_phase, StickyPhase::End);

    scroll_and_poll(&mut h, 400);
    scroll_and_poll(&mut h, 800);
    assert_eq!(take_events(&mut h), vec![EventKind::Start]);
}

#[test]
fn classes_never_toggle_when_hiding_is_disabled() {
    let opts = StickyHeaderOptions::default().with_hidden(false);
    let mut h = engine(FakeDom::new(), opts);

    for st in [300, 200, 10, 900, 20] {
        scroll_and_poll(&mut h, st);
    }
    assert!(h.dom().classes.is_empty());
    assert_eq!(
        take_events(&mut h),
        vec![
            EventKind::Start,
            EventKind::End,
            EventKind::Start,
            EventKind::End
        ]
    );
}

#[test]
fn header_is_not_shown_again_at_page_bottom() {
    let mut dom = FakeDom::new();
    dom.content_height = 1_700;
    let mut h = engine(dom, StickyHeaderOptions::default());

    scroll_and_poll(&mut h, 900);
    assert!(h.dom().has_class(0, CLASS_UP));

    // 920 + 800 reaches the end of the content: moving up there keeps the header hidden.
    scroll_and_poll(&mut h, 950);
    scroll_and_poll(&mut h, 920);
    assert!(h.dom().has_class(0, CLASS_UP));
    assert!(!h.dom().has_class(0, CLASS_DOWN));

    scroll_and_poll(&mut h, 850);
    assert!(h.dom().has_class(0, CLASS_DOWN));
}

#[test]
fn small_movements_are_ignored_by_the_debounced_evaluation() {
    let mut h = engine(FakeDom::new(), StickyHeaderOptions::default());

    scroll_and_poll(&mut h, 100);
    take_events(&mut h);
    let classes = h.dom().classes.clone();

    scroll_and_poll(&mut h, 103);
    assert_eq!(h.state().last_scroll_top, 100);
    assert_eq!(h.dom().classes, classes);
    assert!(take_events(&mut h).is_empty());

    // Accumulated movement past the delta is classified.
    scroll_and_poll(&mut h, 94);
    assert_eq!(h.state().last_scroll_top, 94);
    assert!(h.dom().has_class(0, CLASS_DOWN));
}

#[test]
fn offset_start_overrides_a_smaller_header_height() {
    let opts = StickyHeaderOptions::default().with_offset_start(500);
    let mut h = engine(FakeDom::new(), opts);
    assert_eq!(h.hide_threshold(), 500);

    scroll_and_poll(&mut h, 300);
    assert_eq!(take_events(&mut h), vec![EventKind::End]);
    assert!(h.dom().has_class(0, CLASS_DOWN));

    scroll_and_poll(&mut h, 600);
    assert_eq!(take_events(&mut h), vec![EventKind::Start]);
    assert!(h.dom().has_class(0, CLASS_UP));
}

#[test]
fn poll_only_evaluates_after_a_scroll() {
    let mut h = engine(FakeDom::new(), StickyHeaderOptions::default());
    assert!(!h.poll());

    scroll(&mut h, 300);
    assert!(h.state().did_scroll);
    assert!(h.poll());
    assert!(!h.state().did_scroll);
    assert!(!h.poll());
}

#[test]
fn last_scroll_top_only_moves_on_evaluation() {
    let mut h = engine(FakeDom::new(), StickyHeaderOptions::default());

    scroll(&mut h, 300);
    scroll(&mut h, 500);
    assert_eq!(h.state().last_scroll_top, 0);

    h.poll();
    assert_eq!(h.state().last_scroll_top, 500);
}
