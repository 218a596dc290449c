use alloc::vec::Vec;
use core::fmt;

use crate::scan::resolve_regions;
use crate::{
    Axis, CLASS_DOWN, CLASS_UP, CrossedBreakpoint, Dom, EngineState, Error, EventKind, Position,
    Region, StickyHeaderEvent, StickyHeaderOptions, StickyPhase, find_breakpoint, find_region,
};

/// A headless sticky header engine.
///
/// The engine holds no timers or listeners of its own. An adapter drives it:
/// - `on_scroll_tick` on every scroll notification (region/breakpoint checks and the immediate
///   position switch)
/// - `poll` on a fixed interval (`options.poll_interval_ms`), which runs the heavier
///   hide/show classification only when a scroll happened since the last poll
///
/// All DOM access goes through the injected [`Dom`] capability.
pub struct StickyHeader<D: Dom> {
    options: StickyHeaderOptions,
    dom: D,
    header: D::Element,
    navbar_height: u32,
    regions: Vec<Region>,
    state: EngineState,
}

impl<D: Dom> StickyHeader<D> {
    /// Resolves the header and measures the configured regions.
    ///
    /// Fails with [`Error::TargetNotFound`] when `options.target` matches nothing and with
    /// [`Error::RegionTargetNotFound`] when an `element_on_over` selector matches nothing.
    pub fn new(dom: D, options: StickyHeaderOptions) -> Result<Self, Error> {
        let header = dom
            .query_selector(&options.target)
            .ok_or_else(|| Error::TargetNotFound {
                selector: options.target.clone(),
            })?;
        let navbar_height = dom.offset_height(&header);
        let regions = resolve_regions(&dom, &options.element_on_over)?;
        if !options.breakpoints_sorted() {
            shwarn!(
                breakpoints = ?options.on_offset_y,
                "on_offset_y is not sorted; breakpoint brackets are unspecified"
            );
        }
        shdebug!(
            selector = %options.target,
            navbar_height,
            regions = regions.len(),
            breakpoints = options.on_offset_y.len(),
            "StickyHeader::new"
        );
        Ok(Self {
            options,
            dom,
            header,
            navbar_height,
            regions,
            state: EngineState::default(),
        })
    }

    pub fn options(&self) -> &StickyHeaderOptions {
        &self.options
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn header(&self) -> &D::Element {
        &self.header
    }

    /// Header height captured at construction.
    pub fn navbar_height(&self) -> u32 {
        self.navbar_height
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn into_dom(self) -> D {
        self.dom
    }

    /// Offset above which the hide/show classification treats the header as scrolled past.
    pub fn hide_threshold(&self) -> u64 {
        self.options.offset_start.max(self.navbar_height as u64)
    }

    /// Re-measures the configured regions against the current layout.
    ///
    /// Regions are otherwise measured once, at construction. On error the previous regions are
    /// kept.
    pub fn refresh_regions(&mut self) -> Result<(), Error> {
        self.regions = resolve_regions(&self.dom, &self.options.element_on_over)?;
        Ok(())
    }

    /// Handles one scroll notification.
    pub fn on_scroll_tick(&mut self) {
        self.state.did_scroll = true;
        let st = self.dom.scroll_top();
        shtrace!(st, last = self.state.last_scroll_top, "on_scroll_tick");

        self.check_overlap(st);
        self.check_breakpoint(st);
        self.switch_position(st);
    }

    /// Runs the debounced evaluation if a scroll happened since the last poll.
    ///
    /// Returns `true` when an evaluation ran.
    pub fn poll(&mut self) -> bool {
        if !self.state.did_scroll {
            return false;
        }
        self.evaluate_scroll_state();
        self.state.did_scroll = false;
        true
    }

    /// Classifies the movement since the last evaluation: hide/show classes and `start`/`end`.
    ///
    /// Movements of at most `options.delta` pixels are ignored and leave `last_scroll_top`
    /// untouched, so small moves accumulate until they exceed the delta.
    pub fn evaluate_scroll_state(&mut self) {
        let st = self.dom.scroll_top();
        let last = self.state.last_scroll_top;
        if last.abs_diff(st) <= self.options.delta {
            return;
        }

        let threshold = self.hide_threshold();
        if st > last && st > threshold {
            if self.options.hidden {
                self.dom.remove_class(&self.header, CLASS_DOWN);
                self.dom.add_class(&self.header, CLASS_UP);
            }
            if self.state.sticky_phase != StickyPhase::Start {
                self.state.sticky_phase = StickyPhase::Start;
                self.emit(EventKind::Start);
            }
        } else {
            let at_bottom =
                st.saturating_add(self.dom.viewport_height()) >= self.dom.content_height();
            if self.options.hidden && !at_bottom {
                self.dom.remove_class(&self.header, CLASS_UP);
                self.dom.add_class(&self.header, CLASS_DOWN);
            }
            if st < threshold && self.state.sticky_phase != StickyPhase::End {
                self.state.sticky_phase = StickyPhase::End;
                self.emit(EventKind::End);
            }
        }

        self.state.last_scroll_top = st;
    }

    /// Reports a change of the overlapped region.
    pub fn check_overlap(&mut self, st: u64) {
        match find_region(&self.regions, st) {
            Some(i) => {
                let target = &self.regions[i].target;
                if self.state.over.as_ref() == Some(target) {
                    return;
                }
                let target = target.clone();
                self.state.over = Some(target.clone());
                self.emit(EventKind::Over {
                    element: Some(target),
                });
            }
            None => {
                if self.state.over.take().is_some() {
                    self.emit(EventKind::Over { element: None });
                }
            }
        }
    }

    /// Reports the breakpoint bracket reached by the move from `last_scroll_top` to `st`.
    pub fn check_breakpoint(&mut self, st: u64) {
        let last = self.state.last_scroll_top;
        if st == last {
            return;
        }
        let axis = Axis::between(last, st);
        let Some(y) = find_breakpoint(&self.options.on_offset_y, st, axis) else {
            return;
        };
        let crossed = CrossedBreakpoint { y, axis };
        if self.state.breakpoint == Some(crossed) {
            return;
        }
        self.state.breakpoint = Some(crossed);
        self.emit(EventKind::OffsetY { y, axis });
    }

    /// Switches between `fixed` and `relative` positioning around `sticky_start`.
    ///
    /// Fixed only when moving down past `sticky_start`, relative only once the offset is back
    /// under it. Anything else leaves the position alone.
    pub fn switch_position(&mut self, st: u64) {
        let sticky_start = self.options.sticky_start;
        if st > self.state.last_scroll_top && st > sticky_start {
            if self.state.position != Some(Position::Fixed) {
                let height = self.dom.offset_height(&self.header);
                self.dom.set_position(&self.header, Position::Fixed);
                self.dom.set_body_padding_top(height);
                self.state.position = Some(Position::Fixed);
                shtrace!(st, height, "header fixed");
            }
        } else if st < sticky_start && self.state.position != Some(Position::Relative) {
            self.dom.set_position(&self.header, Position::Relative);
            self.dom.set_body_padding_top(0);
            self.state.position = Some(Position::Relative);
            shtrace!(st, "header relative");
        }
    }

    fn emit(&mut self, kind: EventKind) {
        shtrace!(event = kind.name(), "emit");
        self.dom.dispatch_event(StickyHeaderEvent {
            header: &self.header,
            kind,
        });
    }
}

impl<D: Dom> fmt::Debug for StickyHeader<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyHeader")
            .field("options", &self.options)
            .field("navbar_height", &self.navbar_height)
            .field("regions", &self.regions)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
