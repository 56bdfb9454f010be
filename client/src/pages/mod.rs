//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control lives in the route guards, not the pages.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod products;
pub mod register;
