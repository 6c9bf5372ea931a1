use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};

use super::AppState;
use super::envelope::Envelope;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Server is running normally",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "uptime": state.uptime().as_secs_f64(),
    }))
}

pub async fn test_endpoint() -> Json<Value> {
    Json(json!({ "message": "Test endpoint is working" }))
}

pub async fn route_not_found() -> Response {
    Envelope::fail("Route not found").respond(StatusCode::NOT_FOUND)
}
