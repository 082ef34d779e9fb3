//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session lives in a single `AuthState` provided as an `RwSignal`
//! context; persistence is a separate flat localStorage layer so the state
//! type itself stays pure and natively testable.

pub mod auth;
pub mod token_store;
