//! The router actor: sole owner and mutator of the current location.

use std::collections::HashSet;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::navigation::{EntryState, NavigationContext};
use crate::router::{NavigationRequest, RoutePath, RouterClient, RouterError};

/// The active route plus the context the destination view reads.
///
/// Published on a `watch` channel so the app (and tests) can observe where
/// the router currently is without asking it.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub path: RoutePath,
    pub context: NavigationContext,
}

/// The router's message loop.
///
/// # Concurrency Model
/// One tokio task, sequential processing, no locks: the actor alone owns the
/// current [`Location`], so views only ever see immutable snapshots. The loop
/// exits when every [`RouterClient`] has been dropped.
pub struct RouterActor {
    receiver: mpsc::UnboundedReceiver<NavigationRequest>,
    location: watch::Sender<Location>,
    routes: HashSet<RoutePath>,
}

impl RouterActor {
    /// Creates the actor, a client for it, and a receiver observing the
    /// current location. The initial location is the site root with an empty
    /// context.
    pub fn new() -> (Self, RouterClient, watch::Receiver<Location>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let initial = Location {
            path: RoutePath::home(),
            context: NavigationContext::empty(),
        };
        let (location, location_rx) = watch::channel(initial);

        let routes = [
            RoutePath::home(),
            RoutePath::orders(),
            RoutePath::order_confirmation(),
        ]
        .into_iter()
        .collect();

        let actor = Self {
            receiver,
            location,
            routes,
        };
        (actor, RouterClient::new(sender), location_rx)
    }

    /// Runs the message loop until the channel closes.
    pub async fn run(mut self) {
        info!(routes = self.routes.len(), "Router started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                NavigationRequest::Navigate { path, state, search } => {
                    debug!(path = %path, "Navigate");
                    match self.transition(path, state, search) {
                        Ok(location) => {
                            info!(path = %location.path, "Navigated");
                        }
                        Err(e) => {
                            // The sender fired and forgot; this stays here.
                            warn!(error = %e, "Navigation rejected");
                        }
                    }
                }
            }
        }

        info!("Router shutdown");
    }

    /// Resolves `path` against the route table and installs the new location.
    fn transition(
        &mut self,
        path: RoutePath,
        state: Option<EntryState>,
        search: Option<String>,
    ) -> Result<Location, RouterError> {
        if !self.routes.contains(&path) {
            return Err(RouterError::UnknownRoute(path));
        }

        let location = Location {
            path,
            context: NavigationContext { state, search },
        };
        // Receivers may all be gone (e.g. during shutdown); that's fine.
        let _ = self.location.send(location.clone());
        Ok(location)
    }
}
