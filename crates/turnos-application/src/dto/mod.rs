//! Data Transfer Objects (DTOs) for layer boundary crossing
//!
//! DTOs carry the JSON wire format. They keep field names and text formats of
//! the public API stable while the domain types evolve.

pub mod cliente;
pub mod turno;

// Re-export commonly used DTOs
pub use cliente::*;
pub use turno::*;
