// ==========================================
// 护理排班可行性看板 - 评估结果模型
// ==========================================
// 职责: 引擎输出的派生视图（每次评估重新计算，无共享状态）
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// WorkerHoursSummary - 单个护士工时
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerHoursSummary {
    pub worker_index: usize,          // 护士序号（从 1 开始，用于图表横轴）
    pub shifts: u32,                  // 班次合计 Σ_j X_ij
    pub hours: u64,                   // 工时 = 班次 × h
    pub exceeds_limit: bool,          // hours > WH
    pub excess_hours: u64,            // 超出 WH 的小时数（未超限为 0）
}

// ==========================================
// FeasibilityReport - 工时可行性评估结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    // ===== 维度 =====
    pub rows: usize,                  // 护士数 R
    pub columns: usize,               // 班次数 C
    pub decision_variables: usize,    // R × C

    // ===== 参数 =====
    pub capacity_limit_hours: u32,    // WH
    pub shift_length_hours: u32,      // h

    // ===== 判定 =====
    pub hours: Vec<u64>,              // 每个护士的工时
    pub workers: Vec<WorkerHoursSummary>,
    pub is_feasible: bool,
    pub violation_count: usize,

    // ===== 目标函数 WH·TN − h·ΣΣX =====
    pub total_assigned_shifts: u32,
    pub total_assigned_hours: u64,
    pub available_hours: u64,         // WH × R
    pub idle_hours: i64,              // 可能为负（整体超配）
}

impl FeasibilityReport {
    /// 超限护士的序号（从 1 开始）
    pub fn violating_workers(&self) -> Vec<usize> {
        self.workers
            .iter()
            .filter(|w| w.exceeds_limit)
            .map(|w| w.worker_index)
            .collect()
    }
}

// ==========================================
// GroupLoad - 按天分组的负荷
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupLoad {
    pub group_index: usize,           // 分组序号（从 1 开始，即第几天）
    pub first_slot: usize,            // 起始班次（从 1 开始）
    pub last_slot: usize,             // 结束班次（含）
    pub total: u32,
    pub is_partial: bool,             // 最后一组列数不足 group_size
}

// ==========================================
// SlotLoadSummary - 班次负荷汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLoadSummary {
    pub group_size: usize,
    pub per_slot: Vec<u32>,           // 每个班次的护士数 Σ_i X_ij
    pub per_group: Vec<GroupLoad>,
    pub total_assignments: u32,
    pub busiest_group: Option<usize>, // 并列时取最早一组
    pub quietest_group: Option<usize>,
}

// ==========================================
// 班次覆盖校验 (R3 最少人数 / R4 最多人数)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCoverageViolation {
    pub slot: usize,                  // 班次序号（从 1 开始）
    pub assigned: u32,
    pub bound: u32,
    pub gap: u32,                     // 缺口或超出人数
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub min_per_slot: Option<u32>,
    pub max_per_slot: Option<u32>,
    pub understaffed: Vec<SlotCoverageViolation>,
    pub overstaffed: Vec<SlotCoverageViolation>,
    pub is_covered: bool,
}

// ==========================================
// 单人计算器结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorOutcome {
    pub worker_name: String,
    pub shifts_worked: u32,
    pub hours: u64,
    pub capacity_limit_hours: u32,
    pub feasible: bool,
    pub excess_hours: Option<u64>,    // 仅不可行时
    pub remaining_hours: Option<u64>, // 仅可行时（距 WH 的余量）
}

/// 负荷转移结果: 两次独立评估，不做超出工时的自动抵扣
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedistributionOutcome {
    pub primary: CalculatorOutcome,
    pub secondary: Option<CalculatorOutcome>,
}
