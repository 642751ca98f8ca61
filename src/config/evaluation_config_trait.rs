// ==========================================
// 护理排班可行性看板 - 评估配置读取 Trait
// ==========================================
// 职责: 定义评估所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含评估逻辑
// ==========================================

use crate::config::config_manager::ConfigResult;
use async_trait::async_trait;

// ==========================================
// EvaluationConfigReader Trait
// ==========================================
// 用途: API 层构造评估器时读取默认参数
// 实现者: ConfigManager
#[async_trait]
pub trait EvaluationConfigReader: Send + Sync {
    // ===== 工时配置 =====

    /// 获取每周工时上限 WH
    ///
    /// # 默认值
    /// - 40
    async fn get_capacity_limit_hours(&self) -> ConfigResult<u32>;

    /// 获取单班时长 h
    ///
    /// # 默认值
    /// - 8（不允许为 0）
    async fn get_shift_length_hours(&self) -> ConfigResult<u32>;

    /// 获取计算器允许的最大班次数
    ///
    /// # 默认值
    /// - 21
    async fn get_max_calculator_shifts(&self) -> ConfigResult<u32>;

    // ===== 时段配置 =====

    /// 获取每日时段数（负载分组大小）
    ///
    /// # 默认值
    /// - 3（不允许为 0）
    async fn get_slots_per_day(&self) -> ConfigResult<usize>;

    /// 获取每周天数
    ///
    /// # 默认值
    /// - 7
    async fn get_days_per_week(&self) -> ConfigResult<usize>;

    // ===== 覆盖配置 =====

    /// 获取每时段人数上下限 (min, max)
    ///
    /// # 默认值
    /// - (None, None): 不做覆盖检查
    async fn get_coverage_bounds(&self) -> ConfigResult<(Option<u32>, Option<u32>)>;
}
