//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `admin`, `products`) so individual
//! pages can depend on small focused models with plain, testable transitions.

pub mod admin;
pub mod auth;
pub mod products;
