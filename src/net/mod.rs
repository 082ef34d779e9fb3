//! HTTP layer: the API chokepoint, wire types, and the normalized error.

pub mod api;
pub mod error;
pub mod types;
