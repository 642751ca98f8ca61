// ==========================================
// 护理排班可行性看板 - 班次覆盖校验
// ==========================================
// R3: Σ_i X_ij ≥ Nj(min)   每个班次最少人数
// R4: Σ_i X_ij ≤ Nj(max)   每个班次最多人数
// 说明: 仅做诊断输出，不改变工时可行性判定 (R1)
// ==========================================

use crate::domain::{CoverageReport, SlotCoverageViolation};
use crate::engine::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoverageChecker {
    min_per_slot: Option<u32>,
    max_per_slot: Option<u32>,
}

impl CoverageChecker {
    /// 两个上下限都可选；同时给出时要求 min ≤ max
    pub fn new(min_per_slot: Option<u32>, max_per_slot: Option<u32>) -> EngineResult<Self> {
        if let (Some(min), Some(max)) = (min_per_slot, max_per_slot) {
            if min > max {
                return Err(EngineError::InvalidCoverageBounds { min, max });
            }
        }
        Ok(Self {
            min_per_slot,
            max_per_slot,
        })
    }

    /// 未配置任何上下限时跳过校验
    pub fn is_enabled(&self) -> bool {
        self.min_per_slot.is_some() || self.max_per_slot.is_some()
    }

    /// 基于每班次人数校验
    pub fn check(&self, per_slot: &[u32]) -> CoverageReport {
        let mut understaffed = Vec::new();
        let mut overstaffed = Vec::new();

        for (j, &assigned) in per_slot.iter().enumerate() {
            if let Some(min) = self.min_per_slot {
                if assigned < min {
                    understaffed.push(SlotCoverageViolation {
                        slot: j + 1,
                        assigned,
                        bound: min,
                        gap: min - assigned,
                    });
                }
            }
            if let Some(max) = self.max_per_slot {
                if assigned > max {
                    overstaffed.push(SlotCoverageViolation {
                        slot: j + 1,
                        assigned,
                        bound: max,
                        gap: assigned - max,
                    });
                }
            }
        }

        if !understaffed.is_empty() || !overstaffed.is_empty() {
            tracing::info!(
                understaffed = understaffed.len(),
                overstaffed = overstaffed.len(),
                "班次覆盖存在违规"
            );
        }

        CoverageReport {
            min_per_slot: self.min_per_slot,
            max_per_slot: self.max_per_slot,
            is_covered: understaffed.is_empty() && overstaffed.is_empty(),
            understaffed,
            overstaffed,
        }
    }
}
