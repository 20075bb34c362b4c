//! Status endpoint.

use axum::Json;
use serde_json::{json, Value};

/// `GET /` - always 200, whatever state the database is in.
pub async fn status() -> Json<Value> {
    Json(json!({ "message": "Server is online!" }))
}
