use cod_confirmation::lifecycle::ConfirmationApp;
use cod_confirmation::navigation::EntryState;
use cod_confirmation::router::RoutePath;

/// Full end-to-end integration test with the real router actor.
/// This tests the entire confirmation flow working together.
#[tokio::test]
async fn test_full_confirmation_flow() {
    let mut app = ConfirmationApp::new();

    // The router starts at the site root with an empty context.
    let start = app.current_location();
    assert_eq!(start.path, RoutePath::home());
    assert!(start.context.state.is_none());

    // A checkout flow lands the shopper on the confirmation route,
    // attaching the freshly placed order's id as entry state.
    app.router_client.navigate_with_state(
        RoutePath::order_confirmation(),
        Some(EntryState::with_order_id("order_1")),
        None,
    );

    let location = app.next_location().await.expect("Router should transition");
    assert_eq!(location.path, RoutePath::order_confirmation());

    // The view renders from the context the router installed.
    let screen = app.view.render(&location.context);
    assert_eq!(screen.order_id_line.as_deref(), Some("Order ID: order_1"));
    assert_eq!(
        screen.guidance,
        vec![
            "Your order will be delivered within 3-5 business days.".to_string(),
            "Please keep the exact cash amount ready at delivery.".to_string(),
        ]
    );

    // The shopper taps "View Orders"; the router moves to the listing.
    app.view.view_orders();
    let location = app.next_location().await.expect("Router should transition");
    assert_eq!(location.path, RoutePath::orders());
    // The orders route carries no entry state for the destination.
    assert!(location.context.state.is_none());

    // Graceful shutdown
    app.shutdown().await.expect("Failed to shutdown app");
}

/// The router absorbs unknown routes: nothing moves and the view never
/// hears about it.
#[tokio::test]
async fn test_unknown_route_is_absorbed_by_router() {
    let mut app = ConfirmationApp::new();

    app.router_client
        .navigate_with_state(RoutePath::order_confirmation(), None, Some("?id=XYZ".into()));
    let confirmation = app.next_location().await.unwrap();
    assert_eq!(confirmation.path, RoutePath::order_confirmation());

    // An unknown path is rejected inside the router; the location stays put.
    app.router_client.navigate_to(RoutePath::new("/checkout/retry"));

    // A subsequent valid request still works, proving the loop survived.
    app.view.continue_shopping();
    let location = app.next_location().await.unwrap();
    assert_eq!(location.path, RoutePath::home());

    // The confirmation context built from the query fallback rendered fine.
    let screen = app.view.render(&confirmation.context);
    assert_eq!(screen.order_id_line.as_deref(), Some("Order ID: XYZ"));

    app.shutdown().await.unwrap();
}

/// Entry state round-trips through serde with its recognized wire shape
/// (`orderId`) and arbitrary extra fields intact.
#[tokio::test]
async fn test_entry_state_wire_shape() {
    let raw = serde_json::json!({
        "orderId": "ORD-9",
        "campaign": "festive-sale",
    });

    let state: EntryState = serde_json::from_value(raw).expect("Failed to parse entry state");
    assert_eq!(state.order_id.as_deref(), Some("ORD-9"));
    assert_eq!(
        state.extra.get("campaign").and_then(|v| v.as_str()),
        Some("festive-sale")
    );

    // A state without the recognized field still parses; the resolver just
    // falls through to the query string.
    let bare: EntryState = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(bare.order_id.is_none());
}
