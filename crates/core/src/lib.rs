//! Masala Table Core - Shared types library.
//!
//! This crate provides the domain types used across the Masala Table
//! components:
//! - `storefront` - Public-facing ordering site
//! - `integration-tests` - HTTP-level tests over the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no templating.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for catalog keys, rupee amounts, mobile
//!   numbers, and email addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
