use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Selector used when no `target` is configured.
pub const DEFAULT_TARGET: &str = ".sg-sticky-header";
/// Movement (in pixels) at or below which the debounced evaluation ignores a scroll.
pub const DEFAULT_DELTA: u64 = 5;
/// Cadence of the debounced evaluation.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Configuration for [`crate::StickyHeader`].
///
/// Every field has a default, so a partial configuration is merged over
/// [`StickyHeaderOptions::default`]. With `feature = "serde"`, this type deserializes from a
/// camelCase object (`stickyStart`, `onOffsetY`, ...) and missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct StickyHeaderOptions {
    /// Selector of the header element to control.
    pub target: String,
    /// Scroll offset after which the header switches to `position: fixed`.
    pub sticky_start: u64,
    /// Minimum offset before hide/show classification starts.
    ///
    /// The header height wins when it is larger.
    pub offset_start: u64,
    /// Enables the `up`/`down` class toggling that hides the header on scroll-down.
    pub hidden: bool,
    /// Selectors of the page regions to report overlap with, in priority order.
    pub element_on_over: Vec<String>,
    /// Breakpoints to report crossings of. Expected to be non-decreasing.
    pub on_offset_y: Vec<u64>,
    pub delta: u64,
    pub poll_interval_ms: u64,
}

impl Default for StickyHeaderOptions {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            sticky_start: 0,
            offset_start: 0,
            hidden: true,
            element_on_over: Vec::new(),
            on_offset_y: Vec::new(),
            delta: DEFAULT_DELTA,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl StickyHeaderOptions {
    /// Creates default options targeting `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_sticky_start(mut self, sticky_start: u64) -> Self {
        self.sticky_start = sticky_start;
        self
    }

    pub fn with_offset_start(mut self, offset_start: u64) -> Self {
        self.offset_start = offset_start;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_element_on_over<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.element_on_over = selectors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_on_offset_y(mut self, breakpoints: impl IntoIterator<Item = u64>) -> Self {
        self.on_offset_y = breakpoints.into_iter().collect();
        self
    }

    pub fn with_delta(mut self, delta: u64) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_poll_interval_ms(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Returns `true` when `on_offset_y` is non-decreasing.
    ///
    /// Unsorted breakpoints are accepted, but bracket matching is only meaningful on sorted input.
    pub fn breakpoints_sorted(&self) -> bool {
        self.on_offset_y.windows(2).all(|w| w[0] <= w[1])
    }
}
