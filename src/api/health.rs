use axum::Json;
use serde::Serialize;

use crate::util::version::{version_label, APP_NAME};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        name: APP_NAME,
        version: version_label(),
    })
}
