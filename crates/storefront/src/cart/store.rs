//! Session-backed cart persistence.
//!
//! The cart is the sole persisted entity: a JSON array of line items
//! held under a single session key, scoped per browser by the session
//! cookie. Both the menu and cart views go through this store rather
//! than touching the session directly, so there is exactly one
//! ownership boundary around persisted cart state.
//!
//! A single writer is assumed (one tab); concurrent edits from
//! multiple tabs are not reconciled and the last write wins.

use thiserror::Error;
use tower_sessions::Session;

use masala_table_core::ItemId;

use super::{Cart, CartError, ItemMetadata};

/// Session key holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Cart store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The session layer failed to load or persist.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// The requested mutation was rejected; persisted state untouched.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Per-browser cart store backed by the request's session.
pub struct SessionCartStore {
    session: Session,
}

impl SessionCartStore {
    /// Wrap the request's session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Read the persisted cart.
    ///
    /// An absent or malformed value yields an empty cart; corrupted
    /// state is never surfaced as an error to the shopper.
    pub async fn load(&self) -> Cart {
        self.session
            .get::<Cart>(CART_KEY)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Discarding malformed cart state");
                None
            })
            .unwrap_or_default()
    }

    /// Overwrite the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Session` if the session cannot be written.
    pub async fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        self.session.insert(CART_KEY, cart).await?;
        Ok(())
    }

    /// Load, apply a quantity delta, and persist.
    ///
    /// Returns the updated cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Cart` if the mutation is rejected (unknown
    /// item without metadata, bad price) and `StoreError::Session` if
    /// the session cannot be written. Persisted state is untouched on
    /// either error.
    pub async fn set_quantity(
        &self,
        id: &ItemId,
        delta: i32,
        metadata: Option<&ItemMetadata>,
    ) -> Result<Cart, StoreError> {
        let mut cart = self.load().await;
        cart.set_quantity(id, delta, metadata)?;
        self.save(&cart).await?;
        Ok(cart)
    }

    /// Load, delete an item unconditionally, and persist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Session` if the session cannot be written.
    pub async fn remove(&self, id: &ItemId) -> Result<Cart, StoreError> {
        let mut cart = self.load().await;
        cart.remove(id);
        self.save(&cart).await?;
        Ok(cart)
    }
}
