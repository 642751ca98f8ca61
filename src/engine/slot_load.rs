// ==========================================
// 护理排班可行性看板 - 班次负荷汇总引擎
// ==========================================
// 输出:
// - 每个班次的护士数 Σ_i X_ij
// - 按 group_size 连续分组（默认 3 班 = 1 天）的合计
// 分组策略: 列数不是 group_size 的整数倍时，最后一组保留剩余列并标记 is_partial
// 守恒: Σ per_slot == Σ per_group（任意 group_size）
// ==========================================

use crate::domain::types::DEFAULT_SLOTS_PER_DAY;
use crate::domain::{AssignmentMatrix, GroupLoad, SlotLoadSummary};
use crate::engine::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLoadAggregator {
    group_size: usize,
}

impl Default for SlotLoadAggregator {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_SLOTS_PER_DAY,
        }
    }
}

impl SlotLoadAggregator {
    pub fn new(group_size: usize) -> EngineResult<Self> {
        if group_size == 0 {
            return Err(EngineError::InvalidGroupSize(group_size));
        }
        Ok(Self { group_size })
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// 每列合计，长度 = C
    pub fn per_column_totals(&self, matrix: &AssignmentMatrix) -> Vec<u32> {
        matrix.column_sums()
    }

    /// 每组合计
    pub fn per_group_totals(&self, matrix: &AssignmentMatrix) -> Vec<u32> {
        self.per_column_totals(matrix)
            .chunks(self.group_size)
            .map(|chunk| chunk.iter().sum())
            .collect()
    }

    /// 每组明细（带班次区间与部分组标记）
    pub fn group_loads(&self, matrix: &AssignmentMatrix) -> Vec<GroupLoad> {
        self.per_column_totals(matrix)
            .chunks(self.group_size)
            .enumerate()
            .map(|(g, chunk)| {
                let first_slot = g * self.group_size + 1;
                GroupLoad {
                    group_index: g + 1,
                    first_slot,
                    last_slot: first_slot + chunk.len() - 1,
                    total: chunk.iter().sum(),
                    is_partial: chunk.len() < self.group_size,
                }
            })
            .collect()
    }

    /// 汇总视图
    pub fn summarize(&self, matrix: &AssignmentMatrix) -> SlotLoadSummary {
        let per_slot = self.per_column_totals(matrix);
        let per_group = self.group_loads(matrix);
        let total_assignments = per_slot.iter().sum();

        // 并列时取最早一组: max_by_key 取最后一个最大值，因此反向比较
        let busiest_group = per_group
            .iter()
            .rev()
            .max_by_key(|g| g.total)
            .map(|g| g.group_index);
        let quietest_group = per_group
            .iter()
            .min_by_key(|g| g.total)
            .map(|g| g.group_index);

        SlotLoadSummary {
            group_size: self.group_size,
            per_slot,
            per_group,
            total_assignments,
            busiest_group,
            quietest_group,
        }
    }
}
