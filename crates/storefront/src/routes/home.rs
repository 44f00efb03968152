//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog::MenuItem;
use crate::filters;
use crate::state::AppState;

/// Contact email shown in the contact section.
const CONTACT_EMAIL: &str = "hello@masalatable.in";

/// Instagram handle shown in the contact section.
const INSTAGRAM_HANDLE: &str = "masalatable";

/// Dish display data for the signature-dishes section.
#[derive(Clone)]
pub struct DishView {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub is_veg: bool,
}

/// Contact links for the landing page.
#[derive(Clone)]
pub struct ContactView {
    pub phone_display: String,
    pub phone_href: String,
    pub whatsapp_url: String,
    pub email: String,
    pub instagram_handle: String,
    pub instagram_url: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Dishes flagged as featured in the menu document.
    pub signature_dishes: Vec<DishView>,
    pub contact: ContactView,
}

impl From<&MenuItem> for DishView {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            image: item.image.clone(),
            is_veg: item.is_veg,
        }
    }
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let whatsapp_number = &state.config().ordering.whatsapp_number;

    HomeTemplate {
        signature_dishes: state
            .catalog()
            .featured_items()
            .into_iter()
            .map(DishView::from)
            .collect(),
        contact: ContactView {
            phone_display: format!("+{whatsapp_number}"),
            phone_href: format!("tel:+{whatsapp_number}"),
            whatsapp_url: format!("https://wa.me/{whatsapp_number}"),
            email: CONTACT_EMAIL.to_string(),
            instagram_handle: format!("@{INSTAGRAM_HANDLE}"),
            instagram_url: format!("https://instagram.com/{INSTAGRAM_HANDLE}"),
        },
    }
}
