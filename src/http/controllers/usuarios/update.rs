use actix_web::{
    web::{self, Json},
    HttpResponse,
};

use crate::{
    http::Error, schema::User, types::form::usuarios::UsuarioForm, types::Envelope, App,
};

#[tracing::instrument]
pub async fn update(
    app: web::Data<App>,
    path: web::Path<i32>,
    form: Json<UsuarioForm>,
) -> Result<HttpResponse, Error> {
    let valid = form.validate()?;

    let mut conn = app.db_conn().await?;
    let matched = User::update(&mut *conn, *path, valid.nombre, valid.email, valid.telefono).await?;
    if !matched {
        return Err(Error::NotFound);
    }

    Ok(HttpResponse::Ok().json(Envelope::message("Usuario actualizado exitosamente")))
}
