//! API route handlers

pub mod clientes;
pub mod health;
pub mod turnos;
