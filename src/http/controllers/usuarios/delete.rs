use actix_web::{web, HttpResponse};

use crate::{http::Error, schema::User, types::Envelope, App};

#[tracing::instrument]
pub async fn delete(app: web::Data<App>, path: web::Path<i32>) -> Result<HttpResponse, Error> {
    let mut conn = app.db_conn().await?;
    let matched = User::delete(&mut *conn, *path).await?;
    if !matched {
        return Err(Error::NotFound);
    }

    Ok(HttpResponse::Ok().json(Envelope::message("Usuario eliminado exitosamente")))
}
