use alloc::string::String;

use crate::{CrossedBreakpoint, Position, StickyPhase};

/// Mutable bookkeeping owned by a [`crate::StickyHeader`].
///
/// Read it through [`crate::StickyHeader::state`]. With `feature = "serde"`, this type implements
/// `Serialize`/`Deserialize`, which is handy for debugging overlays and snapshot tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    /// Offset recorded by the last debounced evaluation that saw real movement.
    pub last_scroll_top: u64,
    /// Set by every scroll tick, cleared by the next poll.
    pub did_scroll: bool,
    pub sticky_phase: StickyPhase,
    /// Selector of the region currently overlapped.
    pub over: Option<String>,
    pub breakpoint: Option<CrossedBreakpoint>,
    /// `None` until the first position switch.
    pub position: Option<Position>,
}
