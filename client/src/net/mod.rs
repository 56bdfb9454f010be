//! Networking modules for the external REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies their failures, and
//! `types` defines the JSON schema shared with the API.

pub mod api;
pub mod error;
pub mod types;
