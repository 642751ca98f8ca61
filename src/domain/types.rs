// ==========================================
// 护理排班可行性看板 - 领域类型定义
// ==========================================
// 模型参数: WH=40h/周, h=8h/班, 每天3班 × 7天 = 21班
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 模型常量
// ==========================================

/// 每周工时上限 WH（小时）
pub const DEFAULT_CAPACITY_LIMIT_HOURS: u32 = 40;

/// 单班时长 h（小时）
pub const DEFAULT_SHIFT_LENGTH_HOURS: u32 = 8;

/// 每天班次数
pub const DEFAULT_SLOTS_PER_DAY: usize = 3;

/// 每周天数
pub const DAYS_PER_WEEK: usize = 7;

/// 每周班次数（7 × 3）
pub const SLOTS_PER_WEEK: usize = DAYS_PER_WEEK * DEFAULT_SLOTS_PER_DAY;

/// 一周总小时数（WH 与 h 的配置上限）
pub const HOURS_PER_WEEK: u32 = 24 * 7;

/// 计算器允许的最大班次数
pub const DEFAULT_MAX_CALCULATOR_SHIFTS: u32 = 21;

// ==========================================
// 上传文件格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadFormat {
    Xlsx,
    Xls,
    Csv,
}

impl UploadFormat {
    /// 按扩展名识别（大小写不敏感）
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim().trim_start_matches('.').to_lowercase().as_str() {
            "xlsx" => Some(UploadFormat::Xlsx),
            "xls" => Some(UploadFormat::Xls),
            "csv" => Some(UploadFormat::Csv),
            _ => None,
        }
    }

    pub fn is_excel(&self) -> bool {
        matches!(self, UploadFormat::Xlsx | UploadFormat::Xls)
    }
}

impl fmt::Display for UploadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadFormat::Xlsx => write!(f, "xlsx"),
            UploadFormat::Xls => write!(f, "xls"),
            UploadFormat::Csv => write!(f, "csv"),
        }
    }
}
