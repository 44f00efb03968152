//! Checkout tests: validation feedback, deep-link handoff, location assist.

use axum::http::{StatusCode, header};

use masala_table_integration_tests::{TestClient, body_text};

const VALID_DETAILS: &[(&str, &str)] = &[
    ("name", "Asha Rao"),
    ("address", "12 MG Road, Bengaluru"),
    ("mobile", "9876543210"),
];

/// Put 249 x 2 + 40 = 538 rupees of food in the cart (free delivery).
async fn fill_cart(client: &mut TestClient) {
    for (id, price, delta) in [
        ("starters-paneer-tikka", "₹249", "2"),
        ("starters-masala-papad", "₹40", "1"),
    ] {
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
}

fn location_of(response: &axum::http::Response<axum::body::Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("redirect location")
        .to_string()
}

#[tokio::test]
async fn test_order_redirects_to_whatsapp_deep_link() {
    let mut client = TestClient::new();
    fill_cart(&mut client).await;

    let response = client.post_form("/checkout/order", VALID_DETAILS).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = location_of(&response);
    assert!(location.starts_with("https://wa.me/919108695696?text="));
    // The encoded message carries the customer name and the bold total
    assert!(location.contains("Asha%20Rao"));
    assert!(location.contains("%E2%82%B9538")); // ₹538
    assert!(location.contains("FREE"));
}

#[tokio::test]
async fn test_order_via_htmx_uses_hx_redirect() {
    let mut client = TestClient::new();
    fill_cart(&mut client).await;

    let response = client.post_form_hx("/checkout/order", VALID_DETAILS).await;
    assert_eq!(response.status(), StatusCode::OK);

    let redirect = response
        .headers()
        .get("HX-Redirect")
        .and_then(|v| v.to_str().ok())
        .expect("HX-Redirect header");
    assert!(redirect.starts_with("https://wa.me/919108695696?text="));
}

#[tokio::test]
async fn test_pay_redirects_to_upi_deep_link() {
    let mut client = TestClient::new();
    fill_cart(&mut client).await;

    let response = client.post_form("/checkout/pay", VALID_DETAILS).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    assert_eq!(
        location_of(&response),
        "upi://pay?pa=9108695696@jupiteraxis&am=538&cu=INR&tn=Order%20from%20Masala%20Table"
    );
}

#[tokio::test]
async fn test_missing_fields_block_checkout_with_named_messages() {
    let mut client = TestClient::new();
    fill_cart(&mut client).await;

    let response = client
        .post_form("/checkout/order", &[("mobile", "9876543210")])
        .await;
    // Expected user feedback, not an error response
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Please enter your name"));
    assert!(body.contains("Please enter your delivery address"));
}

#[tokio::test]
async fn test_invalid_mobile_blocks_both_actions() {
    let mut client = TestClient::new();
    fill_cart(&mut client).await;

    for path in ["/checkout/order", "/checkout/pay"] {
        let response = client
            .post_form(
                path,
                &[
                    ("name", "Asha Rao"),
                    ("address", "12 MG Road"),
                    ("mobile", "98765abcde"),
                ],
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("Please enter a valid 10-digit mobile number"));
        assert!(!body.contains("wa.me"));
    }
}

#[tokio::test]
async fn test_checkout_with_empty_cart_redirects_to_cart() {
    let mut client = TestClient::new();

    let response = client.post_form("/checkout/order", VALID_DETAILS).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), "/cart");
}

#[tokio::test]
async fn test_location_assist_appends_coordinates_to_address() {
    let mut client = TestClient::new();

    let response = client
        .post_form(
            "/cart/location",
            &[
                ("address", "12 MG Road"),
                ("latitude", "12.9716"),
                ("longitude", "77.5946"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Location added to address!"));
    // Additive: the typed address is still there, coordinates follow
    assert!(body.contains("12 MG Road"));
    assert!(body.contains("📍 Current Location:"));
    assert!(body.contains("Lat: 12.971600, Long: 77.594600"));
    assert!(body.contains("https://maps.google.com/?q=12.9716,77.5946"));
}

#[tokio::test]
async fn test_location_failures_leave_address_untouched() {
    let mut client = TestClient::new();

    let cases = [
        ("permission-denied", "allow location access"),
        ("position-unavailable", "information unavailable"),
        ("timeout", "timed out"),
        ("unsupported", "enter your address manually"),
        ("something-else", "unknown error"),
    ];

    for (code, expected) in cases {
        let response = client
            .post_form(
                "/cart/location",
                &[("address", "12 MG Road"), ("error", code)],
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(expected), "failure code {code}");
        // No out-of-band textarea swap on failure
        assert!(!body.contains("hx-swap-oob"));
    }
}
