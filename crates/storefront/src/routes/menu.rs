//! Menu page: catalog browsing with dietary filter and quantity steppers.
//!
//! The dietary filter is server-side: `?filter=veg` re-renders the page
//! with only matching items. Quantity changes post to the cart routes
//! and swap the item's stepper fragment in place.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::store::SessionCartStore;
use crate::catalog::{Category, DietFilter, MenuItem};
use crate::filters;
use crate::state::AppState;

/// Menu item display data for templates, including the shopper's
/// current quantity for the stepper.
#[derive(Clone)]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub is_veg: bool,
    pub quantity: u32,
}

/// Category display data for templates.
#[derive(Clone)]
pub struct CategoryView {
    pub name: String,
    pub slug: String,
    pub items: Vec<MenuItemView>,
}

/// Menu page query parameters.
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    #[serde(default)]
    pub filter: DietFilter,
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub categories: Vec<CategoryView>,
    /// Active filter as its query-string value.
    pub filter: &'static str,
    /// Cart badge count.
    pub count: u32,
    pub whatsapp_url: String,
}

fn item_view(item: &MenuItem, quantity: u32) -> MenuItemView {
    MenuItemView {
        id: item.id.to_string(),
        name: item.name.clone(),
        description: item.description.clone(),
        price: item.price.to_string(),
        image: item.image.clone(),
        is_veg: item.is_veg,
        quantity,
    }
}

fn category_views(
    categories: &[Category],
    filter: DietFilter,
    cart: &crate::cart::Cart,
) -> Vec<CategoryView> {
    categories
        .iter()
        .filter_map(|category| {
            let items: Vec<MenuItemView> = category
                .items
                .iter()
                .filter(|item| filter.matches(item.is_veg))
                .map(|item| item_view(item, cart.quantity(&item.id)))
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(CategoryView {
                    name: category.name.clone(),
                    slug: category.slug.clone(),
                    items,
                })
            }
        })
        .collect()
}

/// Display the menu page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MenuQuery>,
) -> impl IntoResponse {
    let cart = SessionCartStore::new(session).load().await;

    MenuTemplate {
        categories: category_views(state.catalog().categories(), query.filter, &cart),
        filter: query.filter.as_str(),
        count: cart.item_count(),
        whatsapp_url: format!(
            "https://wa.me/{}",
            state.config().ordering.whatsapp_number
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Cart, ItemMetadata};
    use crate::catalog::Catalog;
    use masala_table_core::ItemId;

    const SAMPLE: &str = r#"{
        "categories": [
            {
                "name": "Starters",
                "items": [
                    {
                        "name": "Paneer Tikka",
                        "description": "Grilled cottage cheese",
                        "price": "₹249",
                        "image": "https://example.com/paneer.jpg",
                        "isVeg": true
                    },
                    {
                        "name": "Chicken Wings",
                        "description": "Crispy wings",
                        "price": "₹299",
                        "image": "https://example.com/wings.jpg",
                        "isVeg": false
                    }
                ]
            },
            {
                "name": "Desserts",
                "items": [
                    {
                        "name": "Gulab Jamun",
                        "description": "Milk dumplings in syrup",
                        "price": "₹99",
                        "image": "https://example.com/gulab.jpg",
                        "isVeg": true
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_filter_drops_items_and_empty_categories() {
        let catalog = Catalog::from_json(SAMPLE).expect("sample parses");
        let cart = Cart::default();

        let all = category_views(catalog.categories(), DietFilter::All, &cart);
        assert_eq!(all.len(), 2);
        assert_eq!(all.first().expect("starters").items.len(), 2);

        let veg = category_views(catalog.categories(), DietFilter::Veg, &cart);
        assert_eq!(veg.first().expect("starters").items.len(), 1);

        // Desserts has no non-veg items, so the whole category disappears.
        let nonveg = category_views(catalog.categories(), DietFilter::NonVeg, &cart);
        assert_eq!(nonveg.len(), 1);
        assert_eq!(nonveg.first().expect("starters").name, "Starters");
    }

    #[test]
    fn test_views_carry_cart_quantities() {
        let catalog = Catalog::from_json(SAMPLE).expect("sample parses");
        let mut cart = Cart::default();
        cart.set_quantity(
            &ItemId::new("starters-paneer-tikka"),
            2,
            Some(&ItemMetadata {
                name: "Paneer Tikka".to_string(),
                price_display: "₹249".to_string(),
                image: String::new(),
                is_veg: true,
            }),
        )
        .expect("valid add");

        let views = category_views(catalog.categories(), DietFilter::All, &cart);
        let starters = views.first().expect("starters");
        let paneer = starters
            .items
            .iter()
            .find(|i| i.id == "starters-paneer-tikka")
            .expect("present");
        assert_eq!(paneer.quantity, 2);
        assert_eq!(paneer.price, "₹249");

        let wings = starters
            .items
            .iter()
            .find(|i| i.id == "starters-chicken-wings")
            .expect("present");
        assert_eq!(wings.quantity, 0);
    }
}
