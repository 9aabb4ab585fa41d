use cod_confirmation::navigation::{EntryState, NavigationContext};
use cod_confirmation::router::mock::{create_mock_router, expect_navigate, expect_no_navigation};
use cod_confirmation::router::RoutePath;
use cod_confirmation::view::ConfirmationView;

/// View test: Real ConfirmationView with a recording router.
///
/// Pattern: View + Mock
/// - Real view (tests render derivation and trigger dispatch)
/// - Recording router client (captures requested paths, no real routing)
#[tokio::test]
async fn test_view_shows_order_id_and_triggers_navigation() {
    let (router, mut requests) = create_mock_router();
    let view = ConfirmationView::new(router);

    // state = { orderId: "ORD-9" }, search = ""
    let ctx = NavigationContext {
        state: Some(EntryState::with_order_id("ORD-9")),
        search: Some(String::new()),
    };

    let screen = view.render(&ctx);
    assert_eq!(screen.order_id_line.as_deref(), Some("Order ID: ORD-9"));
    assert_eq!(screen.actions[0], "View Orders");
    assert_eq!(screen.actions[1], "Continue Shopping");

    // Clicking "View Orders" requests /orders
    view.view_orders();
    assert_eq!(
        expect_navigate(&mut requests).await,
        Some(RoutePath::orders())
    );

    // Clicking "Continue Shopping" requests /
    view.continue_shopping();
    assert_eq!(expect_navigate(&mut requests).await, Some(RoutePath::home()));

    expect_no_navigation(&mut requests);
}

/// state = undefined, search = "?id=XYZ" → the query fallback supplies the id.
#[tokio::test]
async fn test_view_falls_back_to_query_string() {
    let (router, _requests) = create_mock_router();
    let view = ConfirmationView::new(router);

    let ctx = NavigationContext::with_search("?id=XYZ");
    let screen = view.render(&ctx);

    assert_eq!(screen.order_id_line.as_deref(), Some("Order ID: XYZ"));
}

/// state = undefined, search = undefined → no "Order ID" line, but the
/// delivery guidance is still shown: absence is a valid terminal state.
#[tokio::test]
async fn test_view_without_any_order_id() {
    let (router, mut requests) = create_mock_router();
    let view = ConfirmationView::new(router);

    let screen = view.render(&NavigationContext::empty());

    assert!(screen.order_id_line.is_none());
    assert!(!screen.guidance.is_empty());
    assert!(!screen.title.is_empty());

    // Rendering alone must not navigate.
    expect_no_navigation(&mut requests);
}

/// Rendering is a pure function of the context: same input, same screen,
/// and repeated triggers dispatch one request each, in gesture order.
#[tokio::test]
async fn test_render_is_deterministic_and_triggers_are_ordered() {
    let (router, mut requests) = create_mock_router();
    let view = ConfirmationView::new(router);

    let ctx = NavigationContext {
        state: Some(EntryState::with_order_id("order_42")),
        search: Some("?id=IGNORED".to_string()),
    };

    let first = view.render(&ctx);
    let second = view.render(&ctx);
    assert_eq!(first, second);
    // The structured state id wins over the query string.
    assert_eq!(first.order_id_line.as_deref(), Some("Order ID: order_42"));

    view.continue_shopping();
    view.view_orders();
    view.continue_shopping();

    assert_eq!(expect_navigate(&mut requests).await, Some(RoutePath::home()));
    assert_eq!(
        expect_navigate(&mut requests).await,
        Some(RoutePath::orders())
    );
    assert_eq!(expect_navigate(&mut requests).await, Some(RoutePath::home()));
    expect_no_navigation(&mut requests);
}
