//! Turnos Domain Layer
//!
//! Entities, value objects and repository contracts for booking appointments
//! in a single-operator personal-care business.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Domain Layer                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  value_objects  │ TimeOfDay, PreferenciaHoraria          │
//! │  entities       │ Cliente, Turno                         │
//! │  repositories   │ ClienteRepository, TurnoRepository     │
//! │  context        │ RequestContext                         │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod context;
pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

pub use context::RequestContext;
pub use entities::{Cliente, Turno};
pub use errors::{DomainError, DomainResult, ErrorKind};
pub use repositories::{ClienteRepository, TurnoRepository};
pub use value_objects::{PreferenciaHoraria, TimeOfDay};
