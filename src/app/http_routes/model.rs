use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::{ModelApi, ModelParameters, VariableGrowthRow};
use crate::app::state::AppState;

use super::common::{query_rejection, HandlerResult};

// ==========================================
// 模型说明相关接口
// ==========================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariableGrowthQuery {
    /// 例如 "50x21,100x21"；缺省时返回默认规模表
    pub sizes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableGrowthResponse {
    pub rows: Vec<VariableGrowthRow>,
}

/// GET /v1/model
pub async fn get_model_parameters(State(state): State<AppState>) -> HandlerResult<ModelParameters> {
    Ok(Json(state.model_api.parameters().await?))
}

/// GET /v1/model/variables
pub async fn get_variable_growth(
    State(state): State<AppState>,
    query: Result<Query<VariableGrowthQuery>, QueryRejection>,
) -> HandlerResult<VariableGrowthResponse> {
    let Query(query) = query.map_err(query_rejection)?;
    let sizes = match query.sizes.as_deref() {
        Some(raw) => ModelApi::parse_sizes(raw)?,
        None => Vec::new(),
    };

    Ok(Json(VariableGrowthResponse {
        rows: state.model_api.variable_growth(&sizes),
    }))
}
