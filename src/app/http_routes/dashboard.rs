use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::api::{ApiError, DashboardReport, EvaluationOptions};
use crate::app::state::AppState;
use crate::domain::UploadFormat;

use super::common::{json_rejection, query_rejection, HandlerResult};

// ==========================================
// 看板评估相关接口
// ==========================================

/// 上传评估的查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadQuery {
    /// 文件格式（xlsx / xls / csv）；缺省时按 filename 扩展名识别
    pub format: Option<String>,
    /// 原始文件名（仅展示用）
    pub filename: Option<String>,
    pub locale: Option<String>,
    pub group_size: Option<usize>,
    pub min_per_slot: Option<u32>,
    pub max_per_slot: Option<u32>,
}

impl UploadQuery {
    fn resolve_format(&self) -> Result<UploadFormat, ApiError> {
        let declared = self.format.as_deref().or_else(|| {
            self.filename
                .as_deref()
                .and_then(|name| name.rsplit_once('.'))
                .map(|(_, ext)| ext)
        });

        match declared {
            Some(raw) => UploadFormat::from_extension(raw)
                .ok_or_else(|| ApiError::UnsupportedFormat(raw.to_string())),
            None => Err(ApiError::InvalidInput(
                "缺少文件格式: 请提供 format 或 filename".to_string(),
            )),
        }
    }

    fn options(&self) -> EvaluationOptions {
        EvaluationOptions {
            locale: self.locale.clone(),
            group_size: self.group_size,
            min_per_slot: self.min_per_slot,
            max_per_slot: self.max_per_slot,
        }
    }
}

/// JSON 矩阵评估请求
///
/// 单元格按任意 JSON 值接收，二元校验交给矩阵校验器（带行列位置）
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixEvaluationRequest {
    pub rows: Vec<Vec<serde_json::Value>>,
    #[serde(flatten)]
    pub options: EvaluationOptions,
}

/// POST /v1/evaluations
///
/// 请求体为原始文件内容
pub async fn evaluate_upload(
    State(state): State<AppState>,
    query: Result<Query<UploadQuery>, QueryRejection>,
    body: Bytes,
) -> HandlerResult<DashboardReport> {
    let Query(query) = query.map_err(query_rejection)?;
    let format = query.resolve_format()?;
    let source_name = query
        .filename
        .clone()
        .unwrap_or_else(|| format!("upload.{}", format));

    let report = state
        .dashboard_api
        .evaluate_upload(&source_name, format, &body, &query.options())
        .await?;
    Ok(Json(report))
}

/// POST /v1/evaluations/matrix
pub async fn evaluate_matrix(
    State(state): State<AppState>,
    payload: Result<Json<MatrixEvaluationRequest>, JsonRejection>,
) -> HandlerResult<DashboardReport> {
    let Json(request) = payload.map_err(json_rejection)?;
    let report = state
        .dashboard_api
        .evaluate_json_rows(&request.rows, &request.options)
        .await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(format: Option<&str>, filename: Option<&str>) -> UploadQuery {
        UploadQuery {
            format: format.map(str::to_string),
            filename: filename.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(query(Some("CSV"), None).resolve_format().unwrap(), UploadFormat::Csv);
        assert_eq!(
            query(None, Some("Xij.week1.xlsx")).resolve_format().unwrap(),
            UploadFormat::Xlsx
        );
        // 显式 format 优先于文件名
        assert_eq!(
            query(Some("xls"), Some("Xij.csv")).resolve_format().unwrap(),
            UploadFormat::Xls
        );
        assert!(matches!(
            query(Some("pdf"), None).resolve_format(),
            Err(ApiError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            query(None, None).resolve_format(),
            Err(ApiError::InvalidInput(_))
        ));
    }
}
