//! Error types for the router.

use thiserror::Error;

use crate::router::RoutePath;

/// Failures the router handles on its own.
///
/// Nothing here ever reaches a view: navigation is fire-and-forget, so the
/// router logs these and keeps the current location unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RouterError {
    /// The requested path is not in the route table.
    #[error("Unknown route: {0}")]
    UnknownRoute(RoutePath),
}
