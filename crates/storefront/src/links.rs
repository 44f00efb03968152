//! Outbound deep-link construction for order handoff.
//!
//! There is no order backend: placing an order opens a pre-filled
//! WhatsApp chat with the restaurant, and paying opens a UPI deep link
//! in whatever payment app claims the `upi://` scheme. Both are
//! fire-and-forget navigations; no confirmation ever flows back.

use std::fmt::Write as _;

use crate::cart::Cart;
use crate::cart::pricing::OrderTotals;
use crate::checkout::DeliveryDetails;
use crate::config::OrderChannelConfig;

/// Brand name used in the order header and payment note.
pub const BRAND_NAME: &str = "Masala Table";

/// Dietary marker prefixed to each order line.
#[must_use]
pub const fn diet_marker(is_veg: bool) -> &'static str {
    if is_veg { "🟢" } else { "🔴" }
}

/// Build the formatted order text for the WhatsApp message.
///
/// The `*...*` spans render bold in WhatsApp.
#[must_use]
pub fn order_message(details: &DeliveryDetails, cart: &Cart, totals: &OrderTotals) -> String {
    let mut message = format!("*New Order from {BRAND_NAME}*\n\n");

    message.push_str("*Customer Details:*\n");
    let _ = writeln!(message, "Name: {}", details.name);
    let _ = writeln!(message, "Mobile: {}", details.mobile);
    if let Some(email) = &details.email {
        let _ = writeln!(message, "Email: {email}");
    }
    let _ = writeln!(message, "Address: {}", details.address);
    if let Some(instructions) = &details.instructions {
        let _ = writeln!(message, "Instructions: {instructions}");
    }

    message.push_str("\n*Order Items:*\n");
    for item in cart.items() {
        let _ = writeln!(
            message,
            "{} {} x {} - {}",
            diet_marker(item.is_veg),
            item.name,
            item.quantity,
            item.line_total()
        );
    }

    message.push_str("\n*Order Summary:*\n");
    let _ = writeln!(message, "Subtotal: {}", totals.subtotal);
    if totals.free_delivery() {
        message.push_str("Delivery: FREE\n");
    } else {
        let _ = writeln!(message, "Delivery: {}", totals.delivery_fee);
    }
    let _ = writeln!(message, "*Total: {}*", totals.total);

    message
}

/// Build the `wa.me` link that opens the pre-filled chat.
#[must_use]
pub fn whatsapp_order_link(
    channels: &OrderChannelConfig,
    details: &DeliveryDetails,
    cart: &Cart,
    totals: &OrderTotals,
) -> String {
    let message = order_message(details, cart, totals);
    format!(
        "https://wa.me/{}?text={}",
        channels.whatsapp_number,
        urlencoding::encode(&message)
    )
}

/// Build the UPI payment deep link for the computed total.
///
/// `pa` is the payee VPA, `am` the amount in whole rupees, `cu` the
/// fixed currency code, `tn` the transaction note.
#[must_use]
pub fn upi_payment_link(channels: &OrderChannelConfig, totals: &OrderTotals) -> String {
    let note = format!("Order from {BRAND_NAME}");
    format!(
        "upi://pay?pa={}&am={}&cu=INR&tn={}",
        channels.upi_vpa,
        totals.total.amount(),
        urlencoding::encode(&note)
    )
}
