use tokio::sync::mpsc;
use tracing::debug;

use crate::navigation::EntryState;
use crate::router::{NavigationRequest, RoutePath};

/// The navigation capability injected into views.
///
/// # Architecture Note
/// A view never talks to the router actor directly; it holds a cheap clone of
/// this client and calls [`navigate_to`](RouterClient::navigate_to) in direct
/// response to a user gesture. The send is non-blocking and its result is
/// intentionally discarded: the only way it fails is a closed channel, which
/// means the router (and with it the app) is already shutting down.
#[derive(Clone)]
pub struct RouterClient {
    sender: mpsc::UnboundedSender<NavigationRequest>,
}

impl RouterClient {
    pub fn new(sender: mpsc::UnboundedSender<NavigationRequest>) -> Self {
        Self { sender }
    }

    /// Requests navigation to `path`. Fire-and-forget.
    pub fn navigate_to(&self, path: RoutePath) {
        debug!(path = %path, "Requesting navigation");
        let _ = self.sender.send(NavigationRequest::Navigate {
            path,
            state: None,
            search: None,
        });
    }

    /// Requests navigation to `path`, attaching entry state and a query
    /// string for the destination view. Fire-and-forget.
    ///
    /// This is what a checkout flow uses to hand the confirmation view its
    /// order identifier.
    pub fn navigate_with_state(
        &self,
        path: RoutePath,
        state: Option<EntryState>,
        search: Option<String>,
    ) {
        debug!(path = %path, has_state = state.is_some(), "Requesting navigation with state");
        let _ = self
            .sender
            .send(NavigationRequest::Navigate { path, state, search });
    }
}
