//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `main_shell` hosts every three-slot route.

pub mod home;
pub mod join;
pub mod main_shell;
pub mod sign_in;
