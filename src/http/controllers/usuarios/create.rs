use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use serde_json::json;

use crate::{
    http::Error, schema::User, types::form::usuarios::UsuarioForm, types::Envelope, App,
};

#[tracing::instrument]
pub async fn create(app: web::Data<App>, form: Json<UsuarioForm>) -> Result<HttpResponse, Error> {
    let valid = form.validate()?;

    let mut conn = app.db_conn().await?;
    let usuario = User::insert(&mut *conn, valid.nombre, valid.email, valid.telefono).await?;

    Ok(HttpResponse::Created().json(Envelope::with_message(
        "Usuario creado exitosamente",
        json!({
            "id": usuario.id,
            "nombre": usuario.nombre,
            "email": usuario.email,
            "telefono": usuario.telefono,
        }),
    )))
}
