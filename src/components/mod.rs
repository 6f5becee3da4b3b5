//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components fill the main shell's slots and read/write the shared session
//! from Leptos context providers.

pub mod default_view;
pub mod message_prompt;
pub mod private_message;
pub mod profile_view;
pub mod right_side;
pub mod user_search;
