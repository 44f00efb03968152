//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page
//! GET  /health          - Health check
//! GET  /menu            - Menu page (?filter=all|veg|nonveg)
//!
//! # Cart (HTMX fragments)
//! GET  /cart            - Cart page
//! POST /cart/add        - Quantity change from the menu (stepper fragment)
//! POST /cart/update     - Quantity change from the cart (cart_items fragment)
//! POST /cart/remove     - Remove item (cart_items fragment)
//! GET  /cart/count      - Cart count badge (fragment)
//! POST /cart/location   - Location-assist result (address fragment)
//!
//! # Checkout handoff
//! POST /checkout/order  - Validate, then redirect to the WhatsApp deep link
//! POST /checkout/pay    - Validate, then redirect to the UPI deep link
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod menu;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::filters;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route("/location", post(cart::location_assist))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/order", post(checkout::order))
        .route("/pay", post(checkout::pay))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Menu page
        .route("/menu", get(menu::show))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout handoff
        .nest("/checkout", checkout_routes())
        // Custom 404 page
        .fallback(not_found)
}

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
struct NotFoundTemplate;

/// Render the custom 404 page.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate)
}
