//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page
//! reloads. Fragments that change the cart also re-render the
//! free-delivery banner and order summary as out-of-band swaps and
//! fire a `cart-updated` trigger for the count badge.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use masala_table_core::ItemId;

use crate::cart::pricing::OrderTotals;
use crate::cart::store::SessionCartStore;
use crate::cart::{Cart, ItemMetadata};
use crate::error::Result;
use crate::filters;
use crate::location::{GeolocationOptions, LocationFailure, LocationFix, append_to_address};

use super::menu::MenuItemView;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image: String,
    pub is_veg: bool,
}

/// Cart display data for templates: lines plus computed totals.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub is_empty: bool,
    pub subtotal: String,
    pub delivery_fee: String,
    pub free_delivery: bool,
    pub total: String,
    pub to_free_delivery: String,
    pub progress_percent: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let totals = OrderTotals::for_cart(cart);
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    id: item.id.to_string(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price.to_string(),
                    line_total: item.line_total().to_string(),
                    image: item.image.clone(),
                    is_veg: item.is_veg,
                })
                .collect(),
            item_count: cart.item_count(),
            is_empty: cart.is_empty(),
            subtotal: totals.subtotal.to_string(),
            delivery_fee: totals.delivery_fee.to_string(),
            free_delivery: totals.free_delivery(),
            total: totals.total.to_string(),
            to_free_delivery: totals.to_free_delivery.to_string(),
            progress_percent: totals.progress_percent(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Quantity-change form data.
///
/// The metadata fields are present when posted from the menu, where the
/// item may not yet be in the cart; the cart page posts only id and
/// delta since its lines always exist.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    pub id: String,
    pub delta: i32,
    pub name: Option<String>,
    /// Display-formatted price, e.g. `"₹249"`.
    pub price: Option<String>,
    pub image: Option<String>,
    pub is_veg: Option<bool>,
}

impl UpdateQuantityForm {
    fn metadata(&self) -> Option<ItemMetadata> {
        Some(ItemMetadata {
            name: self.name.clone()?,
            price_display: self.price.clone()?,
            image: self.image.clone()?,
            is_veg: self.is_veg?,
        })
    }
}

/// Remove-from-cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub id: String,
}

/// Location-assist form data: a fix or a failure code, plus the
/// address text as currently typed.
#[derive(Debug, Deserialize)]
pub struct LocationAssistForm {
    #[serde(default)]
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub error: Option<LocationFailure>,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub geo: GeolocationOptions,
}

/// Cart items fragment template (for HTMX), with banner and summary
/// re-rendered out-of-band.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Menu stepper fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/menu_stepper.html")]
pub struct MenuStepperTemplate {
    pub item: MenuItemView,
}

/// Location assist fragment template (for HTMX).
///
/// On success the address textarea is replaced out-of-band with the
/// appended coordinates; on failure only the notice renders and the
/// address is left untouched.
#[derive(Template, WebTemplate)]
#[template(path = "partials/location_assist.html")]
pub struct LocationAssistTemplate {
    pub notice: String,
    pub updated: bool,
    pub address: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Response {
    let cart = SessionCartStore::new(session).load().await;

    CartShowTemplate {
        cart: CartView::from(&cart),
        geo: GeolocationOptions::default(),
    }
    .into_response()
}

/// Change an item's quantity from the menu (HTMX).
///
/// Creates the line from the posted metadata when the item is not yet
/// in the cart. Returns the re-rendered stepper and triggers a badge
/// update.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<UpdateQuantityForm>) -> Result<Response> {
    let id = ItemId::new(form.id.clone());
    let metadata = form.metadata();
    let cart = SessionCartStore::new(session)
        .set_quantity(&id, form.delta, metadata.as_ref())
        .await?;

    let item = MenuItemView {
        quantity: cart.quantity(&id),
        id: form.id,
        name: form.name.unwrap_or_default(),
        description: String::new(),
        price: form.price.unwrap_or_default(),
        image: form.image.unwrap_or_default(),
        is_veg: form.is_veg.unwrap_or_default(),
    };

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        MenuStepperTemplate { item },
    )
        .into_response())
}

/// Update a line's quantity from the cart page (HTMX).
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateQuantityForm>) -> Result<Response> {
    let id = ItemId::new(form.id.clone());
    let metadata = form.metadata();
    let cart = SessionCartStore::new(session)
        .set_quantity(&id, form.delta, metadata.as_ref())
        .await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveForm>) -> Result<Response> {
    let id = ItemId::new(form.id);
    let cart = SessionCartStore::new(session).remove(&id).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = SessionCartStore::new(session).load().await;
    CartCountTemplate {
        count: cart.item_count(),
    }
}

/// Handle a location-assist result (HTMX).
///
/// The browser posts either coordinates or a classified failure code.
/// Failures are expected shopper-side conditions, not server errors.
#[instrument(skip_all)]
pub async fn location_assist(Form(form): Form<LocationAssistForm>) -> impl IntoResponse {
    match (form.latitude, form.longitude) {
        (Some(latitude), Some(longitude)) => {
            let fix = LocationFix {
                latitude,
                longitude,
            };
            LocationAssistTemplate {
                notice: "Location added to address! You can edit if needed.".to_string(),
                updated: true,
                address: append_to_address(&form.address, &fix),
            }
        }
        _ => {
            let failure = form.error.unwrap_or(LocationFailure::Unknown);
            LocationAssistTemplate {
                notice: failure.user_message().to_string(),
                updated: false,
                address: form.address,
            }
        }
    }
}
