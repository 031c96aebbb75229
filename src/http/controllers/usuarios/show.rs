use actix_web::{web, HttpResponse};

use crate::{http::Error, schema::User, types::Envelope, App};

#[tracing::instrument]
pub async fn show(app: web::Data<App>, path: web::Path<i32>) -> Result<HttpResponse, Error> {
    let mut conn = app.db_conn().await?;
    let Some(usuario) = User::by_id(&mut *conn, *path).await? else {
        return Err(Error::NotFound);
    };

    Ok(HttpResponse::Ok().json(Envelope::data(usuario)))
}
