//! Order pricing rules.
//!
//! Delivery is free at or above a fixed subtotal; below it a flat fee
//! applies. Both values are business constants, not configuration.

use masala_table_core::Rupees;

use super::Cart;

/// Subtotal at or above which delivery is free.
pub const FREE_DELIVERY_THRESHOLD: Rupees = Rupees::new(499);

/// Flat delivery fee below the free-delivery threshold.
pub const DELIVERY_FEE: Rupees = Rupees::new(40);

/// Computed totals for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Rupees,
    pub delivery_fee: Rupees,
    pub total: Rupees,
    /// Amount still needed to reach free delivery (zero once reached).
    /// Display-only; drives the progress banner.
    pub to_free_delivery: Rupees,
}

impl OrderTotals {
    /// Compute totals for a cart.
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Self {
        let subtotal: Rupees = cart.items().iter().map(super::LineItem::line_total).sum();
        let delivery_fee = if subtotal >= FREE_DELIVERY_THRESHOLD {
            Rupees::ZERO
        } else {
            DELIVERY_FEE
        };
        Self {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
            to_free_delivery: FREE_DELIVERY_THRESHOLD.saturating_sub(subtotal),
        }
    }

    /// Whether the delivery fee is waived.
    #[must_use]
    pub const fn free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }

    /// Progress towards free delivery as a percentage, capped at 100.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let percent = self.subtotal.amount() * 100 / FREE_DELIVERY_THRESHOLD.amount();
        percent.min(100)
    }
}
