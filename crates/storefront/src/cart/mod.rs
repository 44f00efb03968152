//! Cart state and mutation rules.
//!
//! The cart is an ordered list of line items keyed by catalog id. All
//! mutation goes through [`Cart::set_quantity`] and [`Cart::remove`];
//! quantities are clamped at zero and an item that reaches zero is
//! removed from the list, never stored at zero.
//!
//! The persisted form is a plain JSON array of lines with the fields
//! `id`, `name`, `price`, `quantity`, `image`, `isVeg`, so a saved
//! cart round-trips byte-for-byte.

pub mod pricing;
pub mod store;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use masala_table_core::{ItemId, MoneyError, Rupees};

/// Cart mutation errors.
#[derive(Debug, Error)]
pub enum CartError {
    /// A positive quantity was requested for an item not yet in the
    /// cart, without the metadata needed to create its line.
    #[error("unknown item {0} added without metadata")]
    UnknownItem(ItemId),

    /// The metadata's display price could not be parsed.
    #[error("invalid price for item {id}: {source}")]
    InvalidPrice {
        id: ItemId,
        #[source]
        source: MoneyError,
    },
}

/// One catalog entry plus its chosen quantity.
///
/// Invariant: `quantity >= 1` while the line is present in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Rupees,
    pub quantity: u32,
    pub image: String,
    pub is_veg: bool,
}

impl LineItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Rupees {
        self.unit_price * self.quantity
    }
}

/// Metadata needed to create a line the first time an item is added.
///
/// The price is the display-formatted string shown on the menu
/// (e.g. `"₹249"`); it is parsed by stripping non-digit characters.
#[derive(Debug, Clone)]
pub struct ItemMetadata {
    pub name: String,
    pub price_display: String,
    pub image: String,
    pub is_veg: bool,
}

/// An ordered list of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Total item count: the sum of all quantities.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Current quantity for an item, 0 if absent.
    #[must_use]
    pub fn quantity(&self, id: &ItemId) -> u32 {
        self.items
            .iter()
            .find(|item| &item.id == id)
            .map_or(0, |item| item.quantity)
    }

    /// Add `delta` to an item's quantity, clamping the result at zero.
    ///
    /// A result of zero removes the item. A positive result for an item
    /// not yet in the cart requires `metadata` to construct the line.
    /// Returns the item's new quantity.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if a new line is needed but `metadata` is
    /// missing or carries an unparseable price. The cart is unchanged
    /// on error.
    pub fn set_quantity(
        &mut self,
        id: &ItemId,
        delta: i32,
        metadata: Option<&ItemMetadata>,
    ) -> Result<u32, CartError> {
        let current = self.quantity(id);
        let next = u32::try_from(i64::from(current) + i64::from(delta)).unwrap_or(0);

        if next == 0 {
            self.remove(id);
            return Ok(0);
        }

        if let Some(existing) = self.items.iter_mut().find(|item| &item.id == id) {
            existing.quantity = next;
            return Ok(next);
        }

        let metadata = metadata.ok_or_else(|| CartError::UnknownItem(id.clone()))?;
        let unit_price =
            Rupees::parse_display(&metadata.price_display).map_err(|source| {
                CartError::InvalidPrice {
                    id: id.clone(),
                    source,
                }
            })?;
        self.items.push(LineItem {
            id: id.clone(),
            name: metadata.name.clone(),
            unit_price,
            quantity: next,
            image: metadata.image.clone(),
            is_veg: metadata.is_veg,
        });
        Ok(next)
    }

    /// Delete an item unconditionally. A no-op if the item is absent.
    pub fn remove(&mut self, id: &ItemId) {
        self.items.retain(|item| &item.id != id);
    }
}
