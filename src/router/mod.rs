//! The Router collaborator: message types, client, actor, and test mock.
//!
//! # Main Components
//!
//! - [`RoutePath`] - Newtype for router paths, with the app's known routes.
//! - [`NavigationRequest`] - Message carried on the router channel.
//! - [`RouterClient`] - Fire-and-forget capability injected into views.
//! - [`RouterActor`] - Sequential message loop that owns the current location.
//! - [`RouterError`] - Failures the router logs and absorbs itself.
//!
//! # Testing
//!
//! See the [`mock`] module for a recording router that asserts exactly which
//! paths a view requested, without spawning the real actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod mock;

pub use actor::*;
pub use client::*;
pub use error::*;

use crate::navigation::EntryState;

/// A path understood by the router (e.g. `"/orders"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath(String);

impl RoutePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The site root ("continue shopping" destination).
    pub fn home() -> Self {
        Self::new("/")
    }

    /// The orders listing.
    pub fn orders() -> Self {
        Self::new("/orders")
    }

    /// The COD order confirmation view itself.
    pub fn order_confirmation() -> Self {
        Self::new("/order-confirmation")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Message sent to the router to request a route change.
///
/// # Architecture Note
/// Unlike a request/response actor message, there is deliberately no
/// `respond_to` channel here: navigation is fire-and-forget. The sender never
/// observes completion or failure; whatever happens next (including an
/// unknown path) is the router's concern alone.
#[derive(Debug)]
pub enum NavigationRequest {
    Navigate {
        path: RoutePath,
        /// Entry state the initiating call attaches for the destination view.
        state: Option<EntryState>,
        /// Raw query string for the destination location.
        search: Option<String>,
    },
}
