//! Turnos Persistence Layer
//!
//! Infrastructure layer providing repository implementations for clients and
//! appointments. This crate implements the repository interfaces defined in
//! `turnos-domain`.
//!
//! ## Features
//!
//! - **In-Memory Repositories**: Thread-safe in-memory implementations for testing and development
//! - **SQLite Repositories**: Persistent storage with versioned schema migrations
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Infrastructure Layer                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  memory/                    │  sqlite/                           │
//! │  ─────────                  │  ────────                          │
//! │  InMemoryClienteRepository  │  SqliteClienteRepository           │
//! │  InMemoryTurnoRepository    │  SqliteTurnoRepository             │
//! └─────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ implements
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Domain Layer                               │
//! │  ClienteRepository, TurnoRepository                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use turnos_persistence::sqlite::{open_database, SqliteClienteRepository, SqliteTurnoRepository};
//! use std::sync::Arc;
//!
//! let conn = open_database(Path::new("turnos.db"))?;
//! let clientes = Arc::new(SqliteClienteRepository::new(conn.clone()));
//! let turnos = Arc::new(SqliteTurnoRepository::new(conn));
//! ```

pub mod error;

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use error::PersistenceError;

#[cfg(feature = "memory")]
pub use memory::{InMemoryClienteRepository, InMemoryTurnoRepository, MemoryStore};

#[cfg(feature = "sqlite")]
pub use sqlite::{
    open_database, open_memory_database, SharedConnection, SqliteClienteRepository,
    SqliteTurnoRepository,
};
