//! Turnos Application Layer
//!
//! Implements the booking use cases by orchestrating domain entities through
//! the repository contracts. Services are stateless and receive their
//! repositories by constructor injection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Application Layer                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Services          │ DTOs                              │ Errors          │
//! │  ─────────         │ ────                              │ ──────          │
//! │  ClienteService    │ ClienteRequest / ClienteResponse  │ ApplicationError│
//! │  TurnoService      │ TurnoRequest / TurnoResponse      │                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ depends on
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Layer                                     │
//! │  Entities, Value Objects, Repository Traits, RequestContext             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Non-Goals
//!
//! - HTTP handling (belongs in `turnos-api`)
//! - Query execution (belongs in `turnos-persistence`)

pub mod dto;
pub mod errors;
pub mod services;

// Re-export commonly used types
pub use dto::*;
pub use errors::{ApplicationError, ApplicationResult};
pub use services::*;
