//! Menu catalog loaded from a JSON document at startup.
//!
//! The menu is static configuration data, not database content: a
//! single `content/menu.json` file holds every category and item. It is
//! parsed once at startup into an in-memory [`Catalog`] shared across
//! handlers.
//!
//! Item ids are derived as `<category-slug>-<item-slug>` and double as
//! the cart's catalog keys, so the same dish keeps the same id across
//! restarts as long as its name and category are unchanged.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use masala_table_core::{ItemId, Rupees};

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// On-disk shape of the menu document.
#[derive(Debug, Deserialize)]
struct MenuDocument {
    categories: Vec<CategoryDoc>,
}

#[derive(Debug, Deserialize)]
struct CategoryDoc {
    name: String,
    items: Vec<MenuItemDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MenuItemDoc {
    name: String,
    description: String,
    /// Display-formatted price, e.g. `"₹249"`.
    price: String,
    image: String,
    is_veg: bool,
    #[serde(default)]
    featured: bool,
}

/// One orderable dish.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Rupees,
    pub image: String,
    pub is_veg: bool,
    pub featured: bool,
}

/// A named group of dishes.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub slug: String,
    pub items: Vec<MenuItem>,
}

/// Dietary filter for the menu view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietFilter {
    #[default]
    All,
    Veg,
    NonVeg,
}

impl DietFilter {
    /// Whether an item with the given veg flag passes the filter.
    #[must_use]
    pub const fn matches(self, is_veg: bool) -> bool {
        match self {
            Self::All => true,
            Self::Veg => is_veg,
            Self::NonVeg => !is_veg,
        }
    }

    /// Query-string value for this filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Veg => "veg",
            Self::NonVeg => "nonveg",
        }
    }
}

/// In-memory menu catalog shared across handlers.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Arc<Vec<Category>>,
}

impl Catalog {
    /// Load the catalog from `<content_dir>/menu.json`.
    ///
    /// A missing file is a warned-and-empty condition so a fresh
    /// checkout still boots; a present-but-malformed file is a startup
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file exists but cannot be read or
    /// parsed.
    pub fn load(content_dir: &Path) -> Result<Self, CatalogError> {
        let path = content_dir.join("menu.json");
        if !path.exists() {
            tracing::warn!("Menu document does not exist: {:?}", path);
            return Ok(Self::empty());
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(
            categories = catalog.categories.len(),
            items = catalog.item_count(),
            "Menu catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON document string.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the document is malformed.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let doc: MenuDocument =
            serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let categories = doc
            .categories
            .into_iter()
            .map(|category| {
                let slug = slugify(&category.name);
                let items = category
                    .items
                    .into_iter()
                    .map(|item| build_item(&slug, item))
                    .collect();
                Category {
                    name: category.name,
                    slug,
                    items,
                }
            })
            .collect();

        Ok(Self {
            categories: Arc::new(categories),
        })
    }

    /// An empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            categories: Arc::new(Vec::new()),
        }
    }

    /// All categories in menu order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a single item by its catalog key.
    #[must_use]
    pub fn find_item(&self, id: &ItemId) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| &item.id == id)
    }

    /// Items flagged for the landing page, in menu order.
    #[must_use]
    pub fn featured_items(&self) -> Vec<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|item| item.featured)
            .collect()
    }

    /// Total number of items across all categories.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

/// Build a [`MenuItem`] from its document form, deriving the id.
///
/// An unparseable price is a content bug; the item is kept at ₹0 and
/// logged rather than aborting startup over one bad row.
fn build_item(category_slug: &str, doc: MenuItemDoc) -> MenuItem {
    let id = ItemId::new(format!("{category_slug}-{}", slugify(&doc.name)));
    let price = Rupees::parse_display(&doc.price).unwrap_or_else(|e| {
        tracing::error!(item = %doc.name, error = %e, "Bad price in menu document");
        Rupees::ZERO
    });
    MenuItem {
        id,
        name: doc.name,
        description: doc.description,
        price,
        image: doc.image,
        is_veg: doc.is_veg,
        featured: doc.featured,
    }
}

/// Lowercase a name into a URL- and key-safe slug.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}
