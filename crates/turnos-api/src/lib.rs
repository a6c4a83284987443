#![warn(missing_docs)]

//! Turnos RESTful API
//!
//! HTTP surface for managing clients and booking appointments, with layered
//! configuration, request logging and a generated OpenAPI document.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use crate::config::ApiConfig;
pub use server::ApiServer;
pub use state::AppState;
