//! Cart flow tests: mutation, clamping, totals, and the count badge.

use axum::http::StatusCode;

use masala_table_integration_tests::{TestClient, body_text};

/// Add a sample-menu item through the menu endpoint, metadata included.
async fn add_item(client: &mut TestClient, id: &str, price: &str, delta: &str) {
    let response = client
        .post_form(
            "/cart/add",
            &[
                ("id", id),
                ("delta", delta),
                ("name", id),
                ("price", price),
                ("image", "https://example.com/dish.jpg"),
                ("is_veg", "true"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_add_returns_stepper_and_triggers_badge_update() {
    let mut client = TestClient::new();
    let response = client
        .post_form(
            "/cart/add",
            &[
                ("id", "starters-paneer-tikka"),
                ("delta", "1"),
                ("name", "Paneer Tikka"),
                ("price", "₹249"),
                ("image", "https://example.com/paneer.jpg"),
                ("is_veg", "true"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );

    let body = body_text(response).await;
    assert!(body.contains("stepper-qty"));
    assert!(body.contains(">1</span>"));
}

#[tokio::test]
async fn test_cart_persists_across_requests_via_session_cookie() {
    let mut client = TestClient::new();
    add_item(&mut client, "starters-paneer-tikka", "₹249", "2").await;
    add_item(&mut client, "starters-masala-papad", "₹40", "1").await;

    let badge = body_text(client.get("/cart/count").await).await;
    assert!(badge.contains(">3</span>"));

    let cart_page = body_text(client.get("/cart").await).await;
    assert!(cart_page.contains("starters-paneer-tikka"));
    assert!(cart_page.contains("starters-masala-papad"));
}

#[tokio::test]
async fn test_free_delivery_when_subtotal_reaches_threshold() {
    let mut client = TestClient::new();
    // 249 * 2 + 40 = 538 >= 499
    add_item(&mut client, "starters-paneer-tikka", "₹249", "2").await;
    add_item(&mut client, "starters-masala-papad", "₹40", "1").await;

    let body = body_text(client.get("/cart").await).await;
    assert!(body.contains("₹538"));
    assert!(body.contains("FREE"));
    assert!(body.contains("You got FREE delivery!"));
}

#[tokio::test]
async fn test_flat_fee_and_progress_below_threshold() {
    let mut client = TestClient::new();
    add_item(&mut client, "beverages-filter-coffee", "₹100", "1").await;

    let body = body_text(client.get("/cart").await).await;
    // subtotal 100, fee 40, total 140, 399 to free delivery
    assert!(body.contains("₹100"));
    assert!(body.contains("₹40"));
    assert!(body.contains("₹140"));
    assert!(body.contains("₹399"));
    assert!(body.contains("Almost there!"));
}

#[tokio::test]
async fn test_quantity_clamps_at_zero_and_empties_cart() {
    let mut client = TestClient::new();
    add_item(&mut client, "starters-paneer-tikka", "₹249", "2").await;

    // Over-decrement: clamps at zero and removes the line
    let response = client
        .post_form(
            "/cart/update",
            &[("id", "starters-paneer-tikka"), ("delta", "-5")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Your cart is empty"));

    let badge = body_text(client.get("/cart/count").await).await;
    assert!(!badge.contains("badge-number"));
}

#[tokio::test]
async fn test_remove_deletes_line_unconditionally() {
    let mut client = TestClient::new();
    add_item(&mut client, "starters-paneer-tikka", "₹249", "3").await;
    add_item(&mut client, "starters-masala-papad", "₹40", "1").await;

    let response = client
        .post_form("/cart/remove", &[("id", "starters-paneer-tikka")])
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(!body.contains("starters-paneer-tikka"));
    assert!(body.contains("starters-masala-papad"));

    let badge = body_text(client.get("/cart/count").await).await;
    assert!(badge.contains(">1</span>"));
}

#[tokio::test]
async fn test_update_fragment_rerenders_summary_out_of_band() {
    let mut client = TestClient::new();
    add_item(&mut client, "starters-paneer-tikka", "₹249", "1").await;

    let response = client
        .post_form(
            "/cart/update",
            &[("id", "starters-paneer-tikka"), ("delta", "1")],
        )
        .await;
    let body = body_text(response).await;

    // Main swap target plus the two out-of-band regions
    assert!(body.contains("id=\"cart-items\""));
    assert!(body.contains("id=\"delivery-banner\" hx-swap-oob=\"true\""));
    assert!(body.contains("id=\"order-summary\""));
    // 249 * 2 = 498: one rupee short of free delivery
    assert!(body.contains("₹498"));
    assert!(body.contains("₹1"));
}

#[tokio::test]
async fn test_add_without_metadata_is_rejected() {
    let mut client = TestClient::new();
    let response = client
        .post_form(
            "/cart/add",
            &[("id", "starters-paneer-tikka"), ("delta", "1")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was persisted
    let body = body_text(client.get("/cart").await).await;
    assert!(body.contains("Your cart is empty"));
}
