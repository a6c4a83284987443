//! SQLite Cliente Repository Implementation

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use turnos_domain::{
    errors::DomainResult, repositories::ClienteRepository, Cliente, PreferenciaHoraria,
    RequestContext,
};

use super::{with_connection, SharedConnection};
use crate::error::PersistenceError;

/// SQLite implementation of ClienteRepository
#[derive(Clone)]
pub struct SqliteClienteRepository {
    conn: SharedConnection,
}

impl SqliteClienteRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

/// Raw `cliente` columns in select order
type ClienteColumns = (String, String, String, String);

pub(crate) fn read_cliente_columns(
    row: &Row<'_>,
    offset: usize,
) -> rusqlite::Result<ClienteColumns> {
    Ok((
        row.get(offset)?,
        row.get(offset + 1)?,
        row.get(offset + 2)?,
        row.get(offset + 3)?,
    ))
}

pub(crate) fn cliente_from_columns(
    (id, nombre, telefono, preferencia): ClienteColumns,
) -> Result<Cliente, PersistenceError> {
    let preferencia_horaria = PreferenciaHoraria::parse(&preferencia)
        .map_err(|_| PersistenceError::corrupt("preferenciahoraria", preferencia))?;
    Ok(Cliente {
        id,
        nombre,
        telefono,
        preferencia_horaria,
    })
}

#[async_trait]
impl ClienteRepository for SqliteClienteRepository {
    async fn create_or_update(
        &self,
        ctx: &RequestContext,
        cliente: &Cliente,
    ) -> DomainResult<Cliente> {
        debug!(cliente_id = %cliente.id, "upserting cliente");
        let row = cliente.clone();
        with_connection(&self.conn, ctx, move |conn| {
            conn.execute(
                "INSERT INTO cliente (id, nombre, telefono, preferenciahoraria)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                     nombre = excluded.nombre,
                     telefono = excluded.telefono,
                     preferenciahoraria = excluded.preferenciahoraria",
                params![
                    row.id,
                    row.nombre,
                    row.telefono,
                    row.preferencia_horaria.as_str(),
                ],
            )?;
            Ok(row)
        })
        .await
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> DomainResult<()> {
        debug!(cliente_id = %id, "deleting cliente");
        let id = id.to_string();
        with_connection(&self.conn, ctx, move |conn| {
            conn.execute("DELETE FROM cliente WHERE id = ?1", params![id])?;
            Ok(())
        })
        .await
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: &str) -> DomainResult<Cliente> {
        debug!(cliente_id = %id, "fetching cliente");
        let id = id.to_string();
        with_connection(&self.conn, ctx, move |conn| {
            let columns = conn
                .query_row(
                    "SELECT id, nombre, telefono, preferenciahoraria FROM cliente WHERE id = ?1",
                    params![id],
                    |row| read_cliente_columns(row, 0),
                )
                .optional()?
                .ok_or_else(|| PersistenceError::not_found("cliente", &id))?;
            cliente_from_columns(columns)
        })
        .await
    }

    async fn get_all(&self, ctx: &RequestContext) -> DomainResult<Vec<Cliente>> {
        debug!("listing clientes");
        with_connection(&self.conn, ctx, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, nombre, telefono, preferenciahoraria FROM cliente ORDER BY id",
            )?;
            let rows = stmt.query_map([], |row| read_cliente_columns(row, 0))?;

            let mut clientes = Vec::new();
            for row in rows {
                clientes.push(cliente_from_columns(row?)?);
            }
            Ok(clientes)
        })
        .await
    }
}
