use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api", get(api_info))
}

async fn api_info() -> Json<Value> {
    Json(json!({ "message": "Cosmos Canvas" }))
}
