use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use crate::database::{error::ErrorExt, Connection, Result};

/// One row of the `usuarios` table.
///
/// Expected shape of the table (managed outside of this service):
///
/// ```sql
/// CREATE TABLE usuarios (
///     id             SERIAL PRIMARY KEY,
///     nombre         TEXT NOT NULL,
///     email          TEXT NOT NULL UNIQUE,
///     telefono       TEXT,
///     fecha_creacion TIMESTAMP NOT NULL DEFAULT now()
/// );
/// ```
#[derive(Debug, FromRow, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    pub fecha_creacion: NaiveDateTime,
}

impl User {
    /// All users, newest first. The id tiebreak keeps the order
    /// deterministic for rows created within the same timestamp tick.
    #[tracing::instrument(skip(conn))]
    pub async fn list(conn: &mut Connection) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"SELECT * FROM "usuarios" ORDER BY fecha_creacion DESC, id DESC"#,
        )
        .fetch_all(conn)
        .await
        .into_db_error()
    }

    #[tracing::instrument(skip(conn))]
    pub async fn by_id(conn: &mut Connection, id: i32) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(r#"SELECT * FROM "usuarios" WHERE id = $1"#)
            .bind(id)
            .fetch_optional(conn)
            .await
            .into_db_error()
    }

    /// Inserts a new user; the store assigns `id` and `fecha_creacion`.
    #[tracing::instrument(skip(conn))]
    pub async fn insert(
        conn: &mut Connection,
        nombre: &str,
        email: &str,
        telefono: Option<&str>,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO "usuarios" (nombre, email, telefono)
               VALUES ($1, $2, $3)
               RETURNING *"#,
        )
        .bind(nombre)
        .bind(email)
        .bind(telefono)
        .fetch_one(conn)
        .await
        .into_db_error()
    }

    /// Rewrites the mutable columns of one user. `id` and
    /// `fecha_creacion` never change after insert. Returns whether
    /// a row matched the given id.
    #[tracing::instrument(skip(conn))]
    pub async fn update(
        conn: &mut Connection,
        id: i32,
        nombre: &str,
        email: &str,
        telefono: Option<&str>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"UPDATE "usuarios" SET nombre = $1, email = $2, telefono = $3 WHERE id = $4"#,
        )
        .bind(nombre)
        .bind(email)
        .bind(telefono)
        .bind(id)
        .execute(conn)
        .await
        .into_db_error()?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns whether a row matched the given id.
    #[tracing::instrument(skip(conn))]
    pub async fn delete(conn: &mut Connection, id: i32) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM "usuarios" WHERE id = $1"#)
            .bind(id)
            .execute(conn)
            .await
            .into_db_error()?;

        Ok(result.rows_affected() > 0)
    }
}
