use actix_web::{web, HttpResponse};

use crate::{http::Error, schema::User, types::Envelope, App};

#[tracing::instrument]
pub async fn list(app: web::Data<App>) -> Result<HttpResponse, Error> {
    let mut conn = app.db_conn().await?;
    let usuarios = User::list(&mut *conn).await?;

    Ok(HttpResponse::Ok().json(Envelope::data(usuarios)))
}
