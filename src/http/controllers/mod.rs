use actix_web::web;

pub mod meta;
pub mod usuarios;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(meta::index))
        .route("/health", web::get().to(meta::health))
        .service(
            web::scope("/api/usuarios")
                .route("", web::get().to(usuarios::list))
                .route("", web::post().to(usuarios::create))
                .route("/{id}", web::get().to(usuarios::show))
                .route("/{id}", web::put().to(usuarios::update))
                .route("/{id}", web::delete().to(usuarios::delete)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .configure(configure)
                    .default_service(web::route().to(meta::not_found)),
            )
        };
    }

    #[tokio::test]
    async fn index_reports_service_banner() {
        let app = test_app!().await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "Servidor funcionando correctamente");
        assert_eq!(body["endpoints"]["usuarios"], "/api/usuarios");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn health_reports_ok_with_timestamp() {
        let app = test_app!().await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "OK");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn unmatched_routes_list_available_ones() {
        let app = test_app!().await;
        let req = test::TestRequest::get().uri("/api/nope").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Ruta no encontrada");
        assert!(body["availableRoutes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r == "GET /api/usuarios"));
    }
}
