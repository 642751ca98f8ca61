// ==========================================
// 护理排班可行性看板 - 单人工时计算器
// ==========================================
// 规则: hours = shifts × h; 可行 ⇔ hours ≤ WH; 不可行时 excess = hours − WH
// 输入范围: shifts ∈ [0, 21]，越界在引擎内拒绝（不依赖前端控件限制）
// 负荷转移: 主护士不可行时，才评估第二人；两次评估相互独立，不自动抵扣
// ==========================================

use crate::domain::types::{
    DEFAULT_CAPACITY_LIMIT_HOURS, DEFAULT_MAX_CALCULATOR_SHIFTS, DEFAULT_SHIFT_LENGTH_HOURS,
};
use crate::domain::{CalculatorOutcome, RedistributionOutcome};
use crate::engine::error::{EngineError, EngineResult};

/// 计算器查询
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftQuery {
    pub worker_name: String,
    pub shifts_worked: i64,
}

impl ShiftQuery {
    pub fn new(worker_name: impl Into<String>, shifts_worked: i64) -> Self {
        Self {
            worker_name: worker_name.into(),
            shifts_worked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleWorkerCalculator {
    capacity_limit_hours: u32,
    shift_length_hours: u32,
    max_shifts: u32,
}

impl Default for SingleWorkerCalculator {
    fn default() -> Self {
        Self::new(
            DEFAULT_CAPACITY_LIMIT_HOURS,
            DEFAULT_SHIFT_LENGTH_HOURS,
            DEFAULT_MAX_CALCULATOR_SHIFTS,
        )
    }
}

impl SingleWorkerCalculator {
    pub fn new(capacity_limit_hours: u32, shift_length_hours: u32, max_shifts: u32) -> Self {
        Self {
            capacity_limit_hours,
            shift_length_hours,
            max_shifts,
        }
    }

    pub fn max_shifts(&self) -> u32 {
        self.max_shifts
    }

    /// 评估单个护士
    ///
    /// # 返回
    /// - Ok(CalculatorOutcome): 可行时带 remaining_hours，不可行时带 excess_hours
    /// - Err(ShiftCountOutOfRange): shifts 不在 [0, max_shifts]
    pub fn evaluate(&self, query: &ShiftQuery) -> EngineResult<CalculatorOutcome> {
        let shifts = self.check_range(query.shifts_worked)?;
        let hours = u64::from(shifts) * u64::from(self.shift_length_hours);
        let limit = u64::from(self.capacity_limit_hours);
        let feasible = hours <= limit;

        Ok(CalculatorOutcome {
            worker_name: query.worker_name.trim().to_string(),
            shifts_worked: shifts,
            hours,
            capacity_limit_hours: self.capacity_limit_hours,
            feasible,
            excess_hours: (!feasible).then(|| hours - limit),
            remaining_hours: feasible.then(|| limit - hours),
        })
    }

    /// 负荷转移评估
    ///
    /// 主护士可行时忽略第二人查询（secondary = None）
    pub fn evaluate_redistribution(
        &self,
        primary: &ShiftQuery,
        secondary: Option<&ShiftQuery>,
    ) -> EngineResult<RedistributionOutcome> {
        let primary_outcome = self.evaluate(primary)?;

        let secondary_outcome = match secondary {
            Some(query) if !primary_outcome.feasible => Some(self.evaluate(query)?),
            Some(_) => {
                tracing::debug!(
                    worker = %primary_outcome.worker_name,
                    "主护士工时可行，忽略第二人查询"
                );
                None
            }
            None => None,
        };

        Ok(RedistributionOutcome {
            primary: primary_outcome,
            secondary: secondary_outcome,
        })
    }

    fn check_range(&self, shifts: i64) -> EngineResult<u32> {
        if shifts < 0 || shifts > i64::from(self.max_shifts) {
            return Err(EngineError::ShiftCountOutOfRange {
                value: shifts,
                min: 0,
                max: self.max_shifts,
            });
        }
        Ok(shifts as u32)
    }
}
