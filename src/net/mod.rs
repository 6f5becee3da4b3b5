//! Networking modules for the chat backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the sign-in / join calls and validates their form input;
//! `types` defines the shared wire and storage schema.

pub mod api;
pub mod types;
