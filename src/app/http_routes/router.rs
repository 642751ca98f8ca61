use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::state::AppState;

use super::{calculator, dashboard, model, system};

// ==========================================
// 路由装配: /health + /v1/*
// ==========================================

/// 创建应用路由（含 CORS、压缩、请求日志、上传体积限制）
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let max_upload_bytes = state.config.max_upload_bytes();

    let api_v1 = Router::new()
        // 模型说明
        .route("/model", get(model::get_model_parameters))
        .route("/model/variables", get(model::get_variable_growth))
        // 看板评估
        .route("/evaluations", post(dashboard::evaluate_upload))
        .route("/evaluations/matrix", post(dashboard::evaluate_matrix))
        // 单人计算器
        .route("/calculator", post(calculator::evaluate_worker))
        .route("/calculator/redistribution", post(calculator::evaluate_redistribution));

    Router::new()
        .route("/health", get(system::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
