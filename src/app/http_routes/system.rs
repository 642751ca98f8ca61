use axum::Json;
use serde::{Deserialize, Serialize};

use super::common::HandlerResult;

// ==========================================
// 系统相关接口
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub app: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        app: crate::APP_NAME.to_string(),
        version: crate::VERSION.to_string(),
    }))
}
