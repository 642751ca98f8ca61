use crate::api::error::ApiError;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

// ==========================================
// 公共工具：错误映射、处理函数返回类型
// ==========================================

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// 处理函数返回类型
pub type HandlerResult<T> = Result<Json<T>, ApiError>;

/// 将ApiError转换为 (状态码, 错误响应)
pub(super) fn map_api_error(err: &ApiError) -> (StatusCode, ErrorResponse) {
    let (status, code) = match err {
        ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
        ApiError::MatrixValidationError { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "MATRIX_VALIDATION_ERROR")
        }
        ApiError::OutOfRange(_) => (StatusCode::UNPROCESSABLE_ENTITY, "OUT_OF_RANGE"),
        ApiError::UnsupportedFormat(_) => {
            (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_FORMAT")
        }
        ApiError::ImportError(_) => (StatusCode::BAD_REQUEST, "IMPORT_ERROR"),
        ApiError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
        ApiError::Other(_) => (StatusCode::INTERNAL_SERVER_ERROR, "OTHER_ERROR"),
    };

    let details = match err {
        ApiError::MatrixValidationError { row, column, .. } => Some(serde_json::json!({
            "row": row,
            "column": column,
        })),
        _ => None,
    };

    (
        status,
        ErrorResponse {
            code: code.to_string(),
            message: err.to_string(),
            details,
        },
    )
}

/// 请求体解析失败（JSON 语法/类型错误、缺少 Content-Type 等）
pub(super) fn json_rejection(rejection: JsonRejection) -> ApiError {
    ApiError::InvalidInput(rejection.body_text())
}

/// 查询参数解析失败
pub(super) fn query_rejection(rejection: QueryRejection) -> ApiError {
    ApiError::InvalidInput(rejection.body_text())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = map_api_error(&self);
        if status.is_server_error() {
            tracing::error!(code = %body.code, error = %body.message, "请求处理失败");
        } else {
            tracing::warn!(code = %body.code, error = %body.message, "请求被拒绝");
        }
        (status, Json(body)).into_response()
    }
}
