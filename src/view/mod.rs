//! The COD order confirmation view.
//!
//! # Architecture Note
//! The view carries no state of its own: each render derives a
//! [`ConfirmationScreen`] from the [`NavigationContext`] the router supplied,
//! and the two user actions are outbound fire-and-forget commands on an
//! injected [`RouterClient`]. There is no loading state and no error state
//! because the view has no asynchronous data dependency at all.

use tracing::debug;

use crate::navigation::NavigationContext;
use crate::resolver::resolve_order_id;
use crate::router::{RoutePath, RouterClient};

/// Render model for the confirmation screen.
///
/// Plain data: layout, styling, and iconography are the frontend's business.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationScreen {
    pub title: String,
    pub caption: String,
    /// The "Order ID: ..." line. Omitted when no displayable identifier was
    /// resolved; the rest of the order panel is unaffected.
    pub order_id_line: Option<String>,
    /// Delivery-readiness guidance. Always shown, identifier or not.
    pub guidance: Vec<String>,
    /// Labels for the two always-enabled actions, in gesture order.
    pub actions: [String; 2],
}

/// The confirmation view: one render function, two navigation triggers.
pub struct ConfirmationView {
    router: RouterClient,
}

impl ConfirmationView {
    pub fn new(router: RouterClient) -> Self {
        Self { router }
    }

    /// Derives the screen for the given context.
    ///
    /// Invokes the resolver exactly once. A resolved identifier that is empty
    /// produces no "Order ID" line, same as an absent one.
    pub fn render(&self, ctx: &NavigationContext) -> ConfirmationScreen {
        let resolved = resolve_order_id(ctx);
        debug!(order_id_present = resolved.is_present(), "Rendering confirmation");

        let order_id_line = resolved.display_id().map(|id| format!("Order ID: {}", id));

        ConfirmationScreen {
            title: "Order Placed Successfully!".to_string(),
            caption: "Thank you for shopping with us.".to_string(),
            order_id_line,
            guidance: vec![
                "Your order will be delivered within 3-5 business days.".to_string(),
                "Please keep the exact cash amount ready at delivery.".to_string(),
            ],
            actions: ["View Orders".to_string(), "Continue Shopping".to_string()],
        }
    }

    /// Requests navigation to the orders listing. Always enabled.
    pub fn view_orders(&self) {
        debug!("View Orders pressed");
        self.router.navigate_to(RoutePath::orders());
    }

    /// Requests navigation to the site root. Always enabled.
    pub fn continue_shopping(&self) {
        debug!("Continue Shopping pressed");
        self.router.navigate_to(RoutePath::home());
    }
}
