//! Core types for Masala Table.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;
pub mod phone;

pub use email::{Email, EmailError};
pub use id::ItemId;
pub use money::{MoneyError, Rupees};
pub use phone::{MobileNumber, MobileNumberError};
