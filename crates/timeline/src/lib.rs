// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Folio project*
//!
//! This crate lays out the Gantt-style career timeline.  It's platform
//! independent: it works out where things go (as fractions of the timeline)
//! and frontends turn that into pixels or CSS percentages.
//!
//! The engine is responsible for:
//!
//! - Working out the timeline's date range
//! - Ordering positions (newest first) and placing their bars
//! - Placing the year labels along the time axis
//! - Tracking hover and highlighted milestones, and emitting events
//!

pub mod engine;

pub use engine::*;
