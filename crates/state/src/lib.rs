// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Folio project*
//!
//! This crate keeps track of which positions (and which of their
//! achievements) are expanded, and mirrors that to the URL's query string so
//! that any view can be bookmarked or shared.
//!
//! The query string holds two parameters:
//!
//! - `position`: comma separated IDs of the open positions
//! - `achievement`: comma separated IDs of the open achievements (across all
//!   open positions), optionally namespaced as `position:achievement`
//!
//! It also parses and formats the site's routes.
//!

mod error;
mod expanded;
mod query;
mod route;
mod sync;

pub use error::*;
pub use expanded::*;
pub use query::*;
pub use route::*;
pub use sync::*;
