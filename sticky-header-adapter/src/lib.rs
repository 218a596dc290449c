//! Host-driving utilities for the `sticky-header` crate.
//!
//! The `sticky-header` crate is UI-agnostic and holds no timers or listeners. This crate provides
//! the small pieces a host needs to drive it:
//!
//! - A fixed-cadence [`Interval`] driven by host timestamps
//! - A [`Driver`] that forwards scroll notifications, polls on the interval and can be disposed
//! - With `feature = "web"`, a `web-sys` binding (`web::WebDom`, `web::mount`)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod driver;
mod interval;

#[cfg(feature = "web")]
pub mod web;


pub use driver::Driver;
pub use interval::Interval;
