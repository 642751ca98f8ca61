use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::api::{CalculatorRequest, CalculatorResponse, RedistributionRequest, RedistributionResponse};
use crate::app::state::AppState;

use super::common::{json_rejection, HandlerResult};

// ==========================================
// 单人计算器相关接口
// ==========================================

/// POST /v1/calculator
pub async fn evaluate_worker(
    State(state): State<AppState>,
    payload: Result<Json<CalculatorRequest>, JsonRejection>,
) -> HandlerResult<CalculatorResponse> {
    let Json(request) = payload.map_err(json_rejection)?;
    Ok(Json(state.calculator_api.evaluate_worker(&request).await?))
}

/// POST /v1/calculator/redistribution
pub async fn evaluate_redistribution(
    State(state): State<AppState>,
    payload: Result<Json<RedistributionRequest>, JsonRejection>,
) -> HandlerResult<RedistributionResponse> {
    let Json(request) = payload.map_err(json_rejection)?;
    Ok(Json(
        state.calculator_api.evaluate_redistribution(&request).await?,
    ))
}
