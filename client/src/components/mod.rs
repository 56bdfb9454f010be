//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and data tables while reading shared state
//! from Leptos context providers.

pub mod loading;
pub mod navbar;
pub mod product_card;
pub mod user_table;
