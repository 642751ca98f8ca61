// ==========================================
// 护理排班可行性看板 - 模型说明 API
// ==========================================
// 职责: 输出模型参数与决策变量规模（nurses × shifts）
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::config::EvaluationConfigReader;

/// 默认规模表（护士数, 班次数）
pub const DEFAULT_VARIABLE_TABLE: [(usize, usize); 5] =
    [(50, 21), (100, 21), (150, 21), (200, 21), (100, 40)];

/// 模型参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelParameters {
    pub capacity_limit_hours: u32,    // WH
    pub shift_length_hours: u32,      // h
    pub slots_per_day: usize,
    pub days_per_week: usize,
    pub slots_per_week: usize,
    pub max_shifts_within_limit: u32, // ⌊WH / h⌋
}

/// 决策变量规模
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableGrowthRow {
    pub nurses: usize,
    pub shifts: usize,
    pub decision_variables: usize,
}

pub struct ModelApi {
    config: Arc<dyn EvaluationConfigReader>,
}

impl ModelApi {
    pub fn new(config: Arc<dyn EvaluationConfigReader>) -> Self {
        Self { config }
    }

    /// 当前生效的模型参数
    pub async fn parameters(&self) -> ApiResult<ModelParameters> {
        let capacity_limit_hours = self.config.get_capacity_limit_hours().await?;
        let shift_length_hours = self.config.get_shift_length_hours().await?;
        let slots_per_day = self.config.get_slots_per_day().await?;
        let days_per_week = self.config.get_days_per_week().await?;

        Ok(ModelParameters {
            capacity_limit_hours,
            shift_length_hours,
            slots_per_day,
            days_per_week,
            slots_per_week: slots_per_day * days_per_week,
            max_shifts_within_limit: capacity_limit_hours / shift_length_hours,
        })
    }

    /// 决策变量规模表；sizes 为空时使用默认表
    pub fn variable_growth(&self, sizes: &[(usize, usize)]) -> Vec<VariableGrowthRow> {
        let sizes = if sizes.is_empty() {
            &DEFAULT_VARIABLE_TABLE[..]
        } else {
            sizes
        };

        sizes
            .iter()
            .map(|&(nurses, shifts)| VariableGrowthRow {
                nurses,
                shifts,
                decision_variables: nurses.saturating_mul(shifts),
            })
            .collect()
    }

    /// 解析规模列表，如 "50x21,100x21"
    ///
    /// 空白项被忽略；格式错误返回 InvalidInput
    pub fn parse_sizes(raw: &str) -> ApiResult<Vec<(usize, usize)>> {
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| {
                item.split_once(['x', 'X', '*'])
                    .and_then(|(n, s)| {
                        Some((n.trim().parse::<usize>().ok()?, s.trim().parse::<usize>().ok()?))
                    })
                    .ok_or_else(|| {
                        ApiError::InvalidInput(format!("规模格式错误: {}（应为 护士数x班次数）", item))
                    })
            })
            .collect()
    }
}
