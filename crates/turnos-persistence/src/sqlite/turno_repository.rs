//! SQLite Turno Repository Implementation
//!
//! Only `cliente_id` is written. Every read joins `cliente`, so the
//! returned appointments carry the client's current row.

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Params, Row};
use tracing::debug;

use turnos_domain::{
    errors::{DomainError, DomainResult},
    repositories::TurnoRepository,
    RequestContext, TimeOfDay, Turno,
};

use super::cliente_repository::{cliente_from_columns, read_cliente_columns};
use super::{with_connection, SharedConnection, FECHA_COLUMN_FORMAT};
use crate::error::PersistenceError;

const SELECT_JOINED: &str = "SELECT t.id, t.fecha, t.hora,
            c.id, c.nombre, c.telefono, c.preferenciahoraria
     FROM turno t
     JOIN cliente c ON c.id = t.cliente_id";

/// SQLite implementation of TurnoRepository
#[derive(Clone)]
pub struct SqliteTurnoRepository {
    conn: SharedConnection,
}

impl SqliteTurnoRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

fn query_turnos<P: Params>(
    conn: &Connection,
    filter: &str,
    params: P,
) -> Result<Vec<Turno>, PersistenceError> {
    let sql = format!("{SELECT_JOINED} {filter} ORDER BY t.fecha, t.hora, t.id");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params, |row: &Row<'_>| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            read_cliente_columns(row, 3)?,
        ))
    })?;

    let mut turnos = Vec::new();
    for row in rows {
        let (id, fecha, hora, cliente) = row?;
        let fecha = NaiveDate::parse_from_str(&fecha, FECHA_COLUMN_FORMAT)
            .map_err(|_| PersistenceError::corrupt("fecha", fecha))?;
        let hora = TimeOfDay::parse(&hora).map_err(|_| PersistenceError::corrupt("hora", hora))?;
        turnos.push(Turno::new(id, fecha, hora, cliente_from_columns(cliente)?));
    }
    Ok(turnos)
}

#[async_trait]
impl TurnoRepository for SqliteTurnoRepository {
    async fn create_or_update(&self, ctx: &RequestContext, turno: &Turno) -> DomainResult<Turno> {
        let fecha = turno.fecha.ok_or(DomainError::ZeroDate)?;
        debug!(turno_id = %turno.id, cliente_id = %turno.cliente_id(), "upserting turno");

        let saved = turno.clone();
        with_connection(&self.conn, ctx, move |conn| {
            conn.execute(
                "INSERT INTO turno (id, fecha, hora, cliente_id)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                     fecha = excluded.fecha,
                     hora = excluded.hora,
                     cliente_id = excluded.cliente_id",
                params![
                    saved.id,
                    fecha.format(FECHA_COLUMN_FORMAT).to_string(),
                    saved.hora.to_string(),
                    saved.cliente_id(),
                ],
            )
            .map_err(|e| match PersistenceError::from(e) {
                PersistenceError::ForeignKey(_) => {
                    PersistenceError::UnknownCliente(saved.cliente_id().to_string())
                }
                other => other,
            })?;
            Ok(saved)
        })
        .await
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> DomainResult<()> {
        debug!(turno_id = %id, "deleting turno");
        let id = id.to_string();
        with_connection(&self.conn, ctx, move |conn| {
            conn.execute("DELETE FROM turno WHERE id = ?1", params![id])?;
            Ok(())
        })
        .await
    }

    async fn get_by_fecha(
        &self,
        ctx: &RequestContext,
        fecha: NaiveDate,
    ) -> DomainResult<Vec<Turno>> {
        debug!(%fecha, "listing turnos by fecha");
        let fecha = fecha.format(FECHA_COLUMN_FORMAT).to_string();
        with_connection(&self.conn, ctx, move |conn| {
            query_turnos(conn, "WHERE t.fecha = ?1", params![fecha])
        })
        .await
    }

    async fn get_all(&self, ctx: &RequestContext) -> DomainResult<Vec<Turno>> {
        debug!("listing turnos");
        with_connection(&self.conn, ctx, |conn| query_turnos(conn, "", [])).await
    }
}
