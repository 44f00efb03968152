//! Checkout handoff routes.
//!
//! There is no payment or order backend. A valid checkout navigates the
//! shopper to an external deep link: a pre-filled WhatsApp chat for
//! ordering, or a UPI payment URI for paying. Validation failures are
//! expected user feedback and render as a notice fragment, never as an
//! error response.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::pricing::OrderTotals;
use crate::cart::store::SessionCartStore;
use crate::checkout::{CheckoutForm, validate};
use crate::links::{upi_payment_link, whatsapp_order_link};
use crate::state::AppState;

/// Checkout notice fragment template: validation feedback.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_notice.html")]
pub struct CheckoutNoticeTemplate {
    pub messages: Vec<String>,
}

/// Navigate the browser to `url`.
///
/// HTMX requests get an `HX-Redirect` header (the fragment machinery
/// must not swap a foreign page into the DOM); plain form posts get an
/// ordinary redirect.
fn navigate(headers: &HeaderMap, url: &str) -> Response {
    if headers.contains_key("HX-Request") {
        (AppendHeaders([("HX-Redirect", url.to_string())]), ()).into_response()
    } else {
        Redirect::to(url).into_response()
    }
}

/// Hand the order off to WhatsApp.
#[instrument(skip(state, session, headers))]
pub async fn order(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<CheckoutForm>,
) -> Response {
    let cart = SessionCartStore::new(session).load().await;
    if cart.is_empty() {
        return navigate(&headers, "/cart");
    }

    match validate(&form) {
        Ok(details) => {
            let totals = OrderTotals::for_cart(&cart);
            let link = whatsapp_order_link(&state.config().ordering, &details, &cart, &totals);
            tracing::info!(total = %totals.total, "Order handed off to WhatsApp");
            navigate(&headers, &link)
        }
        Err(errors) => CheckoutNoticeTemplate {
            messages: errors.iter().map(ToString::to_string).collect(),
        }
        .into_response(),
    }
}

/// Hand the payment off to a UPI app.
#[instrument(skip(state, session, headers))]
pub async fn pay(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<CheckoutForm>,
) -> Response {
    let cart = SessionCartStore::new(session).load().await;
    if cart.is_empty() {
        return navigate(&headers, "/cart");
    }

    match validate(&form) {
        Ok(_) => {
            let totals = OrderTotals::for_cart(&cart);
            let link = upi_payment_link(&state.config().ordering, &totals);
            tracing::info!(total = %totals.total, "Payment handed off to UPI");
            navigate(&headers, &link)
        }
        Err(errors) => CheckoutNoticeTemplate {
            messages: errors.iter().map(ToString::to_string).collect(),
        }
        .into_response(),
    }
}
