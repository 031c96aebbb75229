use actix_web::HttpResponse;
use chrono::Utc;
use serde_json::json;

/// Service banner at `GET /`.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "🏦 API de Gestión de Usuarios - Banca Virtual",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "usuarios": "/api/usuarios",
            "health": "/health",
        },
        "status": "Servidor funcionando correctamente",
    }))
}

/// Liveness probe at `GET /health`.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Catch-all for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "message": "Ruta no encontrada",
        "availableRoutes": [
            "GET /",
            "GET /health",
            "GET /api/usuarios",
            "GET /api/usuarios/:id",
            "POST /api/usuarios",
            "PUT /api/usuarios/:id",
            "DELETE /api/usuarios/:id",
        ],
    }))
}
