use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};

use crate::types::Envelope;

// Extractor failures happen before any handler runs, so without
// these the client would get actix's plain-text error bodies
// instead of the envelope.

/// JSON body extractor config: malformed bodies answer 400 with
/// the uniform envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response =
            HttpResponse::BadRequest().json(Envelope::failure("Cuerpo de la petición inválido"));
        InternalError::from_response(err, response).into()
    })
}

/// Path extractor config: non-numeric ids answer 400 with the
/// uniform envelope.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(Envelope::failure("Identificador inválido"));
        InternalError::from_response(err, response).into()
    })
}
