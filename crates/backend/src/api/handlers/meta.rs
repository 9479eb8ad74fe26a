use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

/// GET /api
pub async fn api_index() -> Json<Value> {
    Json(json!({
        "name": "TomoTrip API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": available_endpoints(),
    }))
}

/// Fallback for unmatched /api paths.
pub async fn api_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "availableEndpoints": available_endpoints(),
        })),
    )
}

fn available_endpoints() -> Value {
    json!([
        "GET /health",
        "GET /api",
        "POST /api/sponsor-stores",
        "GET /api/sponsor-stores",
        "GET /api/sponsor-stores/:id",
        "PUT /api/sponsor-stores/:id",
        "POST /api/tourism-guides",
        "GET /api/tourism-guides/:id",
        "GET /api/tourism-guides/store/:storeId",
        "POST /api/experience-programs",
        "GET /api/experience-programs/store/:storeId",
        "POST /api/reservations",
        "GET /api/reservations/store/:storeId",
        "PUT /api/reservations/:id/status",
        "POST /api/reviews",
        "GET /api/reviews/store/:storeId",
        "POST /api/system/auth/register",
        "POST /api/system/auth/login",
        "POST /api/system/auth/logout",
        "GET /api/system/auth/me",
    ])
}
