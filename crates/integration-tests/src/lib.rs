//! Integration tests for Masala Table.
//!
//! The tests drive the real storefront router in-process with
//! `tower::ServiceExt::oneshot`, carrying the session cookie across
//! requests so the per-browser cart behaves as it does in a browser.
//!
//! # Test Categories
//!
//! - `storefront_pages` - Page rendering and the dietary filter
//! - `cart_flow` - Cart mutation, totals, and the count badge
//! - `checkout_flow` - Validation feedback, deep links, location assist

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use masala_table_storefront::catalog::Catalog;
use masala_table_storefront::config::{OrderChannelConfig, StorefrontConfig};
use masala_table_storefront::state::AppState;
use masala_table_storefront::{middleware, routes};

/// Menu document used by the tests.
///
/// Prices are chosen to exercise the free-delivery threshold from both
/// sides: 249 x 2 + 40 crosses it, a single 100 stays under it.
pub const SAMPLE_MENU: &str = r#"{
    "categories": [
        {
            "name": "Starters",
            "items": [
                {
                    "name": "Paneer Tikka",
                    "description": "Marinated cottage cheese grilled to perfection",
                    "price": "₹249",
                    "image": "https://example.com/paneer.jpg",
                    "isVeg": true,
                    "featured": true
                },
                {
                    "name": "Masala Papad",
                    "description": "Crisp papad topped with onion and tomato",
                    "price": "₹40",
                    "image": "https://example.com/papad.jpg",
                    "isVeg": true
                },
                {
                    "name": "Chicken Wings",
                    "description": "Crispy wings tossed in BBQ sauce",
                    "price": "₹299",
                    "image": "https://example.com/wings.jpg",
                    "isVeg": false
                }
            ]
        },
        {
            "name": "Beverages",
            "items": [
                {
                    "name": "Filter Coffee",
                    "description": "Strong south-Indian filter coffee",
                    "price": "₹100",
                    "image": "https://example.com/coffee.jpg",
                    "isVeg": true
                }
            ]
        }
    ]
}"#;

/// Build a test configuration without touching the environment.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().expect("valid address"),
        port: 3000,
        base_url: "http://localhost:3000".to_string(),
        ordering: OrderChannelConfig {
            whatsapp_number: "919108695696".to_string(),
            upi_vpa: "9108695696@jupiteraxis".to_string(),
        },
        sentry_dsn: None,
    }
}

/// In-process client over the storefront router.
///
/// Remembers the session cookie between requests, so a sequence of
/// calls sees one per-browser cart.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// Client over the sample menu.
    #[must_use]
    pub fn new() -> Self {
        Self::with_menu(SAMPLE_MENU)
    }

    /// Client over a custom menu document.
    ///
    /// # Panics
    ///
    /// Panics if the menu document is malformed.
    #[must_use]
    pub fn with_menu(menu_json: &str) -> Self {
        let config = test_config();
        let catalog = Catalog::from_json(menu_json).expect("test menu parses");
        let state = AppState::new(config.clone(), catalog);

        let app = Router::new()
            .merge(routes::routes())
            .layer(middleware::create_session_layer(&config))
            .with_state(state);

        Self { app, cookie: None }
    }

    /// GET a path.
    pub async fn get(&mut self, path: &str) -> Response<Body> {
        let request = self
            .request_builder("GET", path)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// POST a urlencoded form.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let request = self
            .request_builder("POST", path)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(encode_form(fields)))
            .expect("valid request");
        self.send(request).await
    }

    /// POST a urlencoded form as HTMX would (with the `HX-Request` header).
    pub async fn post_form_hx(&mut self, path: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let request = self
            .request_builder("POST", path)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .header("HX-Request", "true")
            .body(Body::from(encode_form(fields)))
            .expect("valid request");
        self.send(request).await
    }

    fn request_builder(&self, method: &str, path: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie.clone());
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> Response<Body> {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        // Remember the session cookie for subsequent requests.
        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE)
            && let Ok(raw) = set_cookie.to_str()
            && let Some(pair) = raw.split(';').next()
        {
            self.cookie = Some(pair.to_string());
        }

        response
    }
}

/// Read a response body to a string.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Encode form fields as `application/x-www-form-urlencoded`.
fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
