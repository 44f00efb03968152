//! Delivery-details validation for checkout.
//!
//! Both outbound actions (WhatsApp order, UPI payment) require a name,
//! a delivery address, and a ten-digit mobile number. Validation
//! failures block the action and come back as user-facing messages;
//! they are expected input feedback, never logged as errors.

use serde::Deserialize;
use thiserror::Error;

use masala_table_core::{Email, MobileNumber};

/// Raw checkout form data as submitted by the browser.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub instructions: String,
}

/// Validated delivery details, ready for message construction.
#[derive(Debug, Clone)]
pub struct DeliveryDetails {
    pub name: String,
    pub address: String,
    pub mobile: MobileNumber,
    pub email: Option<Email>,
    pub instructions: Option<String>,
}

/// A user-facing validation failure naming the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your delivery address")]
    MissingAddress,
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,
    #[error("Please enter a valid email address or leave it empty")]
    InvalidEmail,
}

/// Validate a checkout form.
///
/// All failures are collected so the shopper sees every offending
/// field at once rather than fixing them one by one.
///
/// # Errors
///
/// Returns the list of validation failures, in field order.
pub fn validate(form: &CheckoutForm) -> Result<DeliveryDetails, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push(ValidationError::MissingName);
    }

    let address = form.address.trim();
    if address.is_empty() {
        errors.push(ValidationError::MissingAddress);
    }

    // The field is sanitized as the user types, but the raw submission
    // is still validated: exactly ten digits, nothing else.
    let mobile = match MobileNumber::parse(form.mobile.trim()) {
        Ok(mobile) => Some(mobile),
        Err(_) => {
            errors.push(ValidationError::InvalidMobile);
            None
        }
    };

    let email = match form.email.trim() {
        "" => None,
        raw => match Email::parse(raw) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push(ValidationError::InvalidEmail);
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    let mobile = mobile.ok_or_else(|| vec![ValidationError::InvalidMobile])?;
    let instructions = match form.instructions.trim() {
        "" => None,
        raw => Some(raw.to_string()),
    };

    Ok(DeliveryDetails {
        name: name.to_string(),
        address: address.to_string(),
        mobile,
        email,
        instructions,
    })
}
