//! Small presentation helpers shared across pages and components.

pub mod money;
