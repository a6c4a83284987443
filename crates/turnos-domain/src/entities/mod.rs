//! Core domain entities with business logic and validation
//!
//! - `cliente`: Client aggregate
//! - `turno`: Appointment aggregate, embedding a client snapshot

mod cliente;
mod turno;

pub use cliente::*;
pub use turno::*;
