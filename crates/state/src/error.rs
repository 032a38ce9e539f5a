// SPDX-License-Identifier: MIT

//!
//! Errors
//!

use folio_core::IdError;
use thiserror::Error;

/// Errors that can occur reading or writing the query string
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Invalid query string: {0}")]
    QueryDecode(#[from] serde_urlencoded::de::Error),

    #[error("Unable to write query string: {0}")]
    QueryEncode(#[from] serde_urlencoded::ser::Error),
}

/// Errors that can occur parsing a route
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Invalid ID in route: {0}")]
    Id(#[from] IdError),

    #[error(transparent)]
    State(#[from] StateError),
}
