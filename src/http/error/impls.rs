use actix_web::{body::BoxBody, http::StatusCode, HttpResponse};
use error_stack::Report;
use tracing_error::SpanTrace;

use super::Error;
use crate::{
    database::{self, ErrorExt2},
    types::form::usuarios::MissingFieldsError,
    types::Envelope,
};

impl actix_web::ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingFields => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::EmailTaken => StatusCode::BAD_REQUEST,
            Error::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if let Error::Database { report, trace } = self {
            tracing::error!("database failure while serving request:\n{report:?}\n{trace}");
        }

        HttpResponse::build(self.status_code()).json(Envelope::failure(self.to_string()))
    }
}

impl From<Report<database::Error>> for Error {
    fn from(value: Report<database::Error>) -> Self {
        if value.is_unique_violation() {
            Error::EmailTaken
        } else {
            Error::Database {
                report: value,
                trace: SpanTrace::capture(),
            }
        }
    }
}

impl From<MissingFieldsError> for Error {
    fn from(_: MissingFieldsError) -> Self {
        Error::MissingFields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn status_codes_follow_the_contract() {
        assert_eq!(Error::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(Error::EmailTaken.status_code(), StatusCode::BAD_REQUEST);

        let internal = Error::from(Report::new(database::Error::UnhealthyPool));
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unique_violations_become_email_taken() {
        let error = Error::from(Report::new(database::Error::UniqueViolation));
        assert!(matches!(error, Error::EmailTaken));
    }

    #[test]
    fn client_facing_messages() {
        assert_eq!(Error::MissingFields.to_string(), "Nombre y email son requeridos");
        assert_eq!(Error::NotFound.to_string(), "Usuario no encontrado");
        assert_eq!(Error::EmailTaken.to_string(), "El email ya está registrado");

        let internal = Error::from(Report::new(database::Error::UnhealthyPool));
        assert_eq!(internal.to_string(), "Error interno del servidor");
    }
}
