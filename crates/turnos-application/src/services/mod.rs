//! Application layer services
//!
//! These services orchestrate domain entities and implement use cases.
//! All services are stateless and use constructor injection for dependencies.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Services                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ClienteService - Client validation, id assignment, upsert   │
//! │  TurnoService   - Appointment lifecycle, client resolution   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Responsibilities
//!
//! - Validate entities before any repository call
//! - Assign identifiers when absent
//! - Resolve client references into snapshots
//!
//! # Non-Goals
//!
//! - Retries (a repository failure is surfaced immediately)
//! - Slot capacity or overlap checks

mod cliente_service;
mod turno_service;

pub use cliente_service::ClienteService;
pub use turno_service::TurnoService;
