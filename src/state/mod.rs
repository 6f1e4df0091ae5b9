//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `latest`) so components can depend on
//! small focused models. Transitions are pure functions on plain structs and
//! return explicit side-effect lists; the view and network layers run those
//! effects after the signal update commits.

pub mod chat;
pub mod latest;
