// ==========================================
// 护理排班可行性看板 - 工时可行性评估引擎
// ==========================================
// 约束 R1: h · Σ_j X_ij ≤ WH  (每个护士)
// 目标函数: Min [WH·TN − h·ΣΣX_ij]（空闲工时，仅用于展示）
// 红线: 无状态、无副作用、无 I/O
// ==========================================

use crate::domain::types::{DEFAULT_CAPACITY_LIMIT_HOURS, DEFAULT_SHIFT_LENGTH_HOURS};
use crate::domain::{AssignmentMatrix, FeasibilityReport, WorkerHoursSummary};

// ==========================================
// FeasibilityEvaluator
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeasibilityEvaluator {
    capacity_limit_hours: u32,
    shift_length_hours: u32,
}

impl Default for FeasibilityEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY_LIMIT_HOURS, DEFAULT_SHIFT_LENGTH_HOURS)
    }
}

impl FeasibilityEvaluator {
    /// # 参数
    /// - capacity_limit_hours: 每周工时上限 WH
    /// - shift_length_hours: 单班时长 h
    pub fn new(capacity_limit_hours: u32, shift_length_hours: u32) -> Self {
        Self {
            capacity_limit_hours,
            shift_length_hours,
        }
    }

    pub fn capacity_limit_hours(&self) -> u32 {
        self.capacity_limit_hours
    }

    pub fn shift_length_hours(&self) -> u32 {
        self.shift_length_hours
    }

    /// 评估指派矩阵
    ///
    /// # 规则
    /// 1. hours[i] = Σ_j X_ij × h
    /// 2. is_feasible = ∀i hours[i] ≤ WH
    /// 3. violation_count = #{i | hours[i] > WH}
    ///
    /// 矩阵在构造时已保证非空且二元，因此这里不会失败
    pub fn evaluate(&self, matrix: &AssignmentMatrix) -> FeasibilityReport {
        let workers: Vec<WorkerHoursSummary> = matrix
            .row_sums()
            .into_iter()
            .enumerate()
            .map(|(i, shifts)| self.summarize_worker(i + 1, shifts))
            .collect();

        let hours: Vec<u64> = workers.iter().map(|w| w.hours).collect();
        let violation_count = workers.iter().filter(|w| w.exceeds_limit).count();

        // 工时按 u64 计算
        let total_assigned_shifts = matrix.total_assignments();
        let total_assigned_hours =
            u64::from(total_assigned_shifts) * u64::from(self.shift_length_hours);
        let available_hours = u64::from(self.capacity_limit_hours)
            .saturating_mul(u64::try_from(matrix.row_count()).unwrap_or(u64::MAX));
        let idle_hours = signed_difference(available_hours, total_assigned_hours);

        tracing::debug!(
            rows = matrix.row_count(),
            columns = matrix.column_count(),
            violation_count,
            idle_hours,
            "可行性评估完成"
        );

        FeasibilityReport {
            rows: matrix.row_count(),
            columns: matrix.column_count(),
            decision_variables: matrix.cell_count(),
            capacity_limit_hours: self.capacity_limit_hours,
            shift_length_hours: self.shift_length_hours,
            hours,
            workers,
            is_feasible: violation_count == 0,
            violation_count,
            total_assigned_shifts,
            total_assigned_hours,
            available_hours,
            idle_hours,
        }
    }

    fn summarize_worker(&self, worker_index: usize, shifts: u32) -> WorkerHoursSummary {
        let hours = u64::from(shifts) * u64::from(self.shift_length_hours);
        let limit = u64::from(self.capacity_limit_hours);
        WorkerHoursSummary {
            worker_index,
            shifts,
            hours,
            exceeds_limit: hours > limit,
            excess_hours: hours.saturating_sub(limit),
        }
    }
}

/// a − b，结果超出 i64 时饱和
fn signed_difference(a: u64, b: u64) -> i64 {
    if a >= b {
        i64::try_from(a - b).unwrap_or(i64::MAX)
    } else {
        i64::try_from(b - a).map(|d| -d).unwrap_or(i64::MIN)
    }
}
