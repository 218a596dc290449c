use alloc::string::String;

/// Class added to the header while it is hidden (scrolling down).
pub const CLASS_UP: &str = "up";
/// Class added to the header while it is shown (scrolling up).
pub const CLASS_DOWN: &str = "down";

/// Vertical scroll direction of the movement that triggered a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Down,
    Up,
}

impl Axis {
    /// Direction of a move from `from` to `to`. A move to the same offset counts as `Up`.
    pub fn between(from: u64, to: u64) -> Self {
        if to > from { Self::Down } else { Self::Up }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
        }
    }
}

/// CSS `position` applied to the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    Relative,
    Fixed,
}

impl Position {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Fixed => "fixed",
        }
    }
}

/// Last sticky notification raised by the debounced evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StickyPhase {
    #[default]
    None,
    Start,
    End,
}

/// A vertical page range derived from an element's layout.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Top of the element relative to the page body.
    pub start: u64,
    /// `start` plus the element's rendered height.
    pub end: u64,
    /// The selector the region was resolved from; reported in `over` notifications.
    pub target: String,
}

impl Region {
    /// Both bounds are inclusive.
    pub fn contains(&self, offset: u64) -> bool {
        offset >= self.start && offset <= self.end
    }
}

/// A breakpoint value paired with the direction it was reached from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossedBreakpoint {
    pub y: u64,
    pub axis: Axis,
}

/// Payload of a notification, without the header reference.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum EventKind {
    /// The header entered its sticky (compact) mode.
    Start,
    /// The header left its sticky mode.
    End,
    /// The overlapped region changed. `None` means the header left every region.
    Over { element: Option<String> },
    /// A breakpoint was reached.
    OffsetY { y: u64, axis: Axis },
}

impl EventKind {
    /// The DOM event name listeners subscribe to.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "sticky-header-start",
            Self::End => "sticky-header-end",
            Self::Over { .. } => "sticky-header-over",
            Self::OffsetY { .. } => "sticky-header-offset-y",
        }
    }
}

/// A notification raised by the engine, carrying a reference to the controlled header.
#[derive(Debug)]
pub struct StickyHeaderEvent<'a, E> {
    pub header: &'a E,
    pub kind: EventKind,
}

impl<E> StickyHeaderEvent<'_, E> {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}
