//! A headless sticky header engine.
//!
//! For host-driving utilities (fixed-interval polling, disposal, a `web-sys` binding), see the
//! `sticky-header-adapter` crate.
//!
//! The engine watches the page scroll offset and derives four independent states from it:
//! - sticky on/off (`position: fixed` past a threshold, with matching body padding)
//! - hidden on/off (`up`/`down` header classes on scroll-down/up)
//! - the page region the scroll offset currently overlaps
//! - the last offset breakpoint reached, with its direction
//!
//! Every transition is reported as a named notification (`sticky-header-start`,
//! `sticky-header-end`, `sticky-header-over`, `sticky-header-offset-y`).
//!
//! It is UI-agnostic. A host layer is expected to provide a [`Dom`] implementation and to call
//! [`StickyHeader::on_scroll_tick`] on scroll and [`StickyHeader::poll`] on a fixed interval.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dom;
mod engine;
mod error;
mod options;
mod scan;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use dom::Dom;
pub use engine::StickyHeader;
pub use error::Error;
pub use options::{DEFAULT_DELTA, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TARGET, StickyHeaderOptions};
pub use scan::{find_breakpoint, find_region};
pub use state::EngineState;
pub use types::{
    Axis, CLASS_DOWN, CLASS_UP, CrossedBreakpoint, EventKind, Position, Region, StickyHeaderEvent,
    StickyPhase,
};
