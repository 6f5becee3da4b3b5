//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Each model is a plain struct wrapped in an `RwSignal` by `App`.

pub mod session;
