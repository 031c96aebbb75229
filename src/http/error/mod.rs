use error_stack::Report;
use thiserror::Error;
use tracing_error::SpanTrace;

use crate::database;

mod impls;

pub type Result<T> = std::result::Result<T, Error>;

/// Request-boundary error. Every variant maps to one terminal HTTP
/// response carrying the uniform envelope; the message here is the
/// exact text the client surfaces to the end user.
#[derive(Debug, Error)]
pub enum Error {
    /// `nombre` or `email` is missing or blank in a create/update body.
    #[error("Nombre y email son requeridos")]
    MissingFields,
    /// No row matches the requested id.
    #[error("Usuario no encontrado")]
    NotFound,
    /// The store rejected the write over the `email` unique constraint.
    #[error("El email ya está registrado")]
    EmailTaken,
    /// Any other store failure. Reported to the client without
    /// further classification; the report and span trace go to the
    /// server log instead.
    #[error("Error interno del servidor")]
    Database {
        report: Report<database::Error>,
        trace: SpanTrace,
    },
}
