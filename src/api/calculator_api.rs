// ==========================================
// 护理排班可行性看板 - 单人工时计算器 API
// ==========================================
// 职责: 单人班次 → 工时 → 可行性结论（本地化）
// 负荷转移: 主护士不可行时评估第二人，两次评估相互独立
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::config::EvaluationConfigReader;
use crate::domain::CalculatorOutcome;
use crate::engine::{ShiftQuery, SingleWorkerCalculator};
use crate::i18n;

// ==========================================
// 请求 / 响应
// ==========================================

/// 单人查询输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerShiftInput {
    /// 护士姓名（缺省或空白时使用本地化默认名）
    #[serde(default)]
    pub worker_name: Option<String>,
    /// 本周班次数（0..=21）
    pub shifts_worked: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorRequest {
    #[serde(flatten)]
    pub worker: WorkerShiftInput,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedistributionRequest {
    pub primary: WorkerShiftInput,
    #[serde(default)]
    pub secondary: Option<WorkerShiftInput>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// 单人评估结果 + 本地化提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorResponse {
    #[serde(flatten)]
    pub outcome: CalculatorOutcome,
    pub message: String,
    /// 不可行时为超出提示，可行时为余量提示
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedistributionResponse {
    pub locale: String,
    pub primary: CalculatorResponse,
    /// 主护士可行时为 None
    pub secondary: Option<CalculatorResponse>,
}

// ==========================================
// CalculatorApi
// ==========================================
pub struct CalculatorApi {
    config: Arc<dyn EvaluationConfigReader>,
    default_locale: String,
}

impl CalculatorApi {
    pub fn new(config: Arc<dyn EvaluationConfigReader>, default_locale: impl Into<String>) -> Self {
        Self {
            config,
            default_locale: default_locale.into(),
        }
    }

    async fn calculator(&self) -> ApiResult<SingleWorkerCalculator> {
        Ok(SingleWorkerCalculator::new(
            self.config.get_capacity_limit_hours().await?,
            self.config.get_shift_length_hours().await?,
            self.config.get_max_calculator_shifts().await?,
        ))
    }

    /// 评估单个护士
    ///
    /// # 返回
    /// - Err(OutOfRange): 班次数不在 [0, max_calculator_shifts]
    pub async fn evaluate_worker(&self, request: &CalculatorRequest) -> ApiResult<CalculatorResponse> {
        let locale = i18n::resolve_locale(request.locale.as_deref(), &self.default_locale);
        let query = to_query(&request.worker, &locale, "calculator.default_worker_name");

        let outcome = self.calculator().await?.evaluate(&query)?;
        Ok(describe(&locale, outcome))
    }

    /// 负荷转移评估
    pub async fn evaluate_redistribution(
        &self,
        request: &RedistributionRequest,
    ) -> ApiResult<RedistributionResponse> {
        let locale = i18n::resolve_locale(request.locale.as_deref(), &self.default_locale);
        let primary = to_query(&request.primary, &locale, "calculator.default_worker_name");
        let secondary = request
            .secondary
            .as_ref()
            .map(|input| to_query(input, &locale, "calculator.secondary_worker_name"));

        let outcome = self
            .calculator()
            .await?
            .evaluate_redistribution(&primary, secondary.as_ref())?;

        Ok(RedistributionResponse {
            primary: describe(&locale, outcome.primary),
            secondary: outcome.secondary.map(|o| describe(&locale, o)),
            locale,
        })
    }
}

fn to_query(input: &WorkerShiftInput, locale: &str, default_name_key: &str) -> ShiftQuery {
    let name = input
        .worker_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| i18n::t_in(locale, default_name_key, &[]));
    ShiftQuery::new(name, input.shifts_worked)
}

fn describe(locale: &str, outcome: CalculatorOutcome) -> CalculatorResponse {
    let hours = outcome.hours.to_string();
    let limit = outcome.capacity_limit_hours.to_string();
    let args = [
        ("name", outcome.worker_name.as_str()),
        ("hours", hours.as_str()),
        ("limit", limit.as_str()),
    ];

    let (message, detail) = if outcome.feasible {
        let remaining = outcome.remaining_hours.unwrap_or_default().to_string();
        (
            i18n::t_in(locale, "calculator.feasible", &args),
            i18n::t_in(locale, "calculator.remaining", &[("remaining", &remaining)]),
        )
    } else {
        let excess = outcome.excess_hours.unwrap_or_default().to_string();
        (
            i18n::t_in(locale, "calculator.infeasible", &args),
            i18n::t_in(locale, "calculator.excess", &[("excess", &excess)]),
        )
    };

    CalculatorResponse {
        outcome,
        message,
        detail,
    }
}
