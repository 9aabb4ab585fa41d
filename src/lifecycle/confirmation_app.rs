use tokio::sync::watch;
use tracing::{error, info};

use crate::router::{Location, RouterActor, RouterClient};
use crate::view::ConfirmationView;

/// The runtime orchestrator for the confirmation flow.
///
/// `ConfirmationApp` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the router actor
/// - **Dependency Wiring**: Injecting the router client into the view
///
/// # Example
///
/// ```ignore
/// let app = ConfirmationApp::new();
///
/// // A checkout flow lands the shopper on the confirmation route:
/// app.router_client.navigate_with_state(
///     RoutePath::order_confirmation(),
///     Some(EntryState::with_order_id("order_1")),
///     None,
/// );
///
/// // The view renders from whatever context the router installed:
/// let screen = app.view.render(&app.current_location().context);
///
/// // Gracefully shut down when done
/// app.shutdown().await?;
/// ```
pub struct ConfirmationApp {
    /// Client for requesting navigation (what a checkout flow would hold).
    pub router_client: RouterClient,

    /// The confirmation view, wired to the same router.
    pub view: ConfirmationView,

    /// Observer of the router's current location.
    location: watch::Receiver<Location>,

    /// Task handle for the running router actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl ConfirmationApp {
    /// Creates the app with the router actor running.
    ///
    /// The router starts at the site root with an empty navigation context.
    pub fn new() -> Self {
        let (actor, router_client, location) = RouterActor::new();
        let handle = tokio::spawn(actor.run());
        let view = ConfirmationView::new(router_client.clone());

        Self {
            router_client,
            view,
            location,
            handle,
        }
    }

    /// Snapshot of the router's current location.
    pub fn current_location(&self) -> Location {
        self.location.borrow().clone()
    }

    /// Waits until the router moves, then returns the new location.
    pub async fn next_location(&mut self) -> Result<Location, String> {
        self.location
            .changed()
            .await
            .map_err(|e| format!("Router task gone: {:?}", e))?;
        Ok(self.location.borrow().clone())
    }

    /// Gracefully shuts down the app.
    ///
    /// Dropping the view and the client closes the router's channel; the
    /// actor detects that and exits its loop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down confirmation app...");

        drop(self.view);
        drop(self.router_client);

        if let Err(e) = self.handle.await {
            error!("Router task failed: {:?}", e);
            return Err(format!("Router task failed: {:?}", e));
        }

        info!("Shutdown complete.");
        Ok(())
    }
}

impl Default for ConfirmationApp {
    fn default() -> Self {
        Self::new()
    }
}
