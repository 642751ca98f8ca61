// ==========================================
// 护理排班可行性看板 - 看板 API
// ==========================================
// 职责: 上传矩阵 → 工时可行性 + 班次负荷 + 覆盖诊断 → 本地化结论
// 架构: API 层 → Importer (解析/校验) → Engine (纯计算)
// 说明: 每次请求独立计算，不保留任何会话状态
// ==========================================

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::config::EvaluationConfigReader;
use crate::domain::{
    AssignmentMatrix, CoverageReport, FeasibilityReport, ImportedMatrix, SlotLoadSummary,
    UploadFormat,
};
use crate::engine::{CoverageChecker, FeasibilityEvaluator, MatrixValidator, SlotLoadAggregator};
use crate::i18n;
use crate::importer::{MatrixImporter, MatrixImporterImpl};
use crate::perf::PerfGuard;

// ==========================================
// 请求参数
// ==========================================

/// 评估选项（均为可选，缺省取配置值）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOptions {
    /// 结论语言（zh-CN / en / es）
    #[serde(default)]
    pub locale: Option<String>,
    /// 负荷分组大小（默认每天班次数）
    #[serde(default)]
    pub group_size: Option<usize>,
    /// 每班次最少人数（R3）
    #[serde(default)]
    pub min_per_slot: Option<u32>,
    /// 每班次最多人数（R4）
    #[serde(default)]
    pub max_per_slot: Option<u32>,
}

// ==========================================
// 响应结构
// ==========================================

/// 本地化结论
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_feasible: bool,
    pub violation_count: usize,
    pub headline: String,
    pub notes: Vec<String>,
}

/// 看板评估结果
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub evaluation_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub source_name: Option<String>,
    pub locale: String,
    pub feasibility: FeasibilityReport,
    pub slot_load: SlotLoadSummary,
    pub coverage: Option<CoverageReport>,
    pub verdict: Verdict,
    /// 矩阵预览（原样返回，供前端表格展示）
    pub matrix: AssignmentMatrix,
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================
pub struct DashboardApi {
    importer: Arc<MatrixImporterImpl>,
    config: Arc<dyn EvaluationConfigReader>,
    default_locale: String,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    ///
    /// # 参数
    /// - importer: 矩阵导入器
    /// - config: 评估参数读取
    /// - default_locale: 请求未指定语言时使用
    pub fn new(
        importer: Arc<MatrixImporterImpl>,
        config: Arc<dyn EvaluationConfigReader>,
        default_locale: impl Into<String>,
    ) -> Self {
        Self {
            importer,
            config,
            default_locale: default_locale.into(),
        }
    }

    /// 评估上传的文件
    ///
    /// # 参数
    /// - source_name: 文件名（仅展示用）
    /// - format: 声明的文件格式
    /// - bytes: 文件内容
    /// - options: 评估选项
    ///
    /// # 返回
    /// - Err(MatrixValidationError): 空表/不规则/非二元单元格，不产生部分结果
    pub async fn evaluate_upload(
        &self,
        source_name: &str,
        format: UploadFormat,
        bytes: &[u8],
        options: &EvaluationOptions,
    ) -> ApiResult<DashboardReport> {
        let mut perf = PerfGuard::new("evaluate_upload");

        let imported = self.importer.import_bytes(source_name, format, bytes).await?;
        perf.set_matrix(imported.matrix.row_count(), imported.matrix.column_count());

        self.evaluate_imported(&imported, options).await
    }

    /// 评估已导入的矩阵（CLI 批量导入后使用）
    pub async fn evaluate_imported(
        &self,
        imported: &ImportedMatrix,
        options: &EvaluationOptions,
    ) -> ApiResult<DashboardReport> {
        self.build_report(Some(imported.source_name.clone()), &imported.matrix, options)
            .await
    }

    /// 评估 JSON 提交的矩阵
    pub async fn evaluate_matrix(
        &self,
        rows: Vec<Vec<u8>>,
        options: &EvaluationOptions,
    ) -> ApiResult<DashboardReport> {
        let matrix = MatrixValidator::from_binary_rows(rows)?;
        let _perf =
            PerfGuard::new("evaluate_matrix").with_matrix(matrix.row_count(), matrix.column_count());

        self.build_report(None, &matrix, options).await
    }

    /// 评估 JSON 单元格矩阵（HTTP 提交）
    ///
    /// 数字与字符串按文本校验（"1"、1、1.0 均可）；null 视为空单元格。
    /// 非二元值返回带行列位置的 MatrixValidationError
    pub async fn evaluate_json_rows(
        &self,
        rows: &[Vec<Value>],
        options: &EvaluationOptions,
    ) -> ApiResult<DashboardReport> {
        let text_rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(json_cell_text).collect())
            .collect();
        let matrix = MatrixValidator::from_text_rows(&text_rows)?;
        let _perf = PerfGuard::new("evaluate_json_rows")
            .with_matrix(matrix.row_count(), matrix.column_count());

        self.build_report(None, &matrix, options).await
    }

    async fn build_report(
        &self,
        source_name: Option<String>,
        matrix: &AssignmentMatrix,
        options: &EvaluationOptions,
    ) -> ApiResult<DashboardReport> {
        // === 步骤 1: 解析参数（请求 > 配置） ===
        let capacity_limit = self.config.get_capacity_limit_hours().await?;
        let shift_length = self.config.get_shift_length_hours().await?;
        let group_size = match options.group_size {
            Some(size) => size,
            None => self.config.get_slots_per_day().await?,
        };
        let (config_min, config_max) = self.config.get_coverage_bounds().await?;
        let locale = i18n::resolve_locale(options.locale.as_deref(), &self.default_locale);

        let aggregator = SlotLoadAggregator::new(group_size)?;
        let coverage_checker = CoverageChecker::new(
            options.min_per_slot.or(config_min),
            options.max_per_slot.or(config_max),
        )?;

        // === 步骤 2: 纯计算 ===
        let feasibility = FeasibilityEvaluator::new(capacity_limit, shift_length).evaluate(matrix);
        let slot_load = aggregator.summarize(matrix);
        let coverage = coverage_checker
            .is_enabled()
            .then(|| coverage_checker.check(&slot_load.per_slot));

        // === 步骤 3: 本地化结论 ===
        let verdict = build_verdict(&locale, &feasibility, coverage.as_ref());

        let evaluation_id = Uuid::new_v4();
        tracing::info!(
            evaluation_id = %evaluation_id,
            rows = feasibility.rows,
            columns = feasibility.columns,
            is_feasible = feasibility.is_feasible,
            violation_count = feasibility.violation_count,
            "矩阵评估完成"
        );

        Ok(DashboardReport {
            evaluation_id,
            evaluated_at: Utc::now(),
            source_name,
            locale,
            feasibility,
            slot_load,
            coverage,
            verdict,
            matrix: matrix.clone(),
        })
    }
}

fn json_cell_text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// 生成本地化结论
fn build_verdict(
    locale: &str,
    feasibility: &FeasibilityReport,
    coverage: Option<&CoverageReport>,
) -> Verdict {
    let limit = feasibility.capacity_limit_hours.to_string();
    let headline = if feasibility.is_feasible {
        i18n::t_in(locale, "verdict.feasible", &[("limit", &limit)])
    } else {
        i18n::t_in(locale, "verdict.infeasible", &[("limit", &limit)])
    };

    let mut notes = Vec::new();
    if !feasibility.is_feasible {
        let count = feasibility.violation_count.to_string();
        notes.push(i18n::t_in(locale, "verdict.violations", &[("count", &count)]));
    }

    if let Some(report) = coverage {
        if report.is_covered {
            notes.push(i18n::t_in(locale, "coverage.covered", &[]));
        }
        if !report.understaffed.is_empty() {
            let count = report.understaffed.len().to_string();
            notes.push(i18n::t_in(locale, "coverage.understaffed", &[("count", &count)]));
        }
        if !report.overstaffed.is_empty() {
            let count = report.overstaffed.len().to_string();
            notes.push(i18n::t_in(locale, "coverage.overstaffed", &[("count", &count)]));
        }
    }

    Verdict {
        is_feasible: feasibility.is_feasible,
        violation_count: feasibility.violation_count,
        headline,
        notes,
    }
}
