//! # Mock Router
//!
//! Utilities for testing views in isolation.
//!
//! Use [`create_mock_router`] to get a [`RouterClient`] and the receiving end
//! of its channel. The client is indistinguishable from one wired to the real
//! actor, so a view under test fires its triggers normally while the test
//! inspects exactly which paths were requested, in order.

use tokio::sync::mpsc;

use crate::router::{NavigationRequest, RoutePath, RouterClient};

/// Creates a recording router client and the receiver for its requests.
///
/// # Testing Strategy
/// Navigation is fire-and-forget, so there is nothing to stub on the response
/// side; asserting behavior means asserting the *requests*. We hand the view a
/// real `RouterClient` whose channel we control, then drain the channel and
/// compare paths. No real routing side effects are involved.
pub fn create_mock_router() -> (RouterClient, mpsc::UnboundedReceiver<NavigationRequest>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (RouterClient::new(sender), receiver)
}

/// Helper to verify that the next recorded request is a navigation, returning
/// its path.
pub async fn expect_navigate(
    receiver: &mut mpsc::UnboundedReceiver<NavigationRequest>,
) -> Option<RoutePath> {
    match receiver.recv().await {
        Some(NavigationRequest::Navigate { path, .. }) => Some(path),
        None => None,
    }
}

/// Asserts that no further navigation was requested.
pub fn expect_no_navigation(receiver: &mut mpsc::UnboundedReceiver<NavigationRequest>) {
    match receiver.try_recv() {
        Err(mpsc::error::TryRecvError::Empty) | Err(mpsc::error::TryRecvError::Disconnected) => {}
        Ok(request) => panic!("Unexpected navigation request: {:?}", request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_router_records_requests_in_order() {
        let (client, mut receiver) = create_mock_router();

        client.navigate_to(RoutePath::orders());
        client.navigate_to(RoutePath::home());

        assert_eq!(
            expect_navigate(&mut receiver).await,
            Some(RoutePath::orders())
        );
        assert_eq!(
            expect_navigate(&mut receiver).await,
            Some(RoutePath::home())
        );
        expect_no_navigation(&mut receiver);
    }
}
