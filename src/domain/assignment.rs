// ==========================================
// 护理排班可行性看板 - 指派矩阵
// ==========================================
// X_ij = 1 表示护士 i 上班次 j
// 行 = 护士, 列 = 班次（惯例 21 列，但不强制）
// 红线: 构造后不可变, 所有单元格只能是 0 或 1
// ==========================================

use crate::domain::types::UploadFormat;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ==========================================
// AssignmentMatrix - 指派矩阵
// ==========================================
// 构造入口: engine::matrix_validator::MatrixValidator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentMatrix {
    rows: Vec<Vec<u8>>,
    columns: usize,
}

impl AssignmentMatrix {
    /// 由已校验的行构造（矩形、非空、二元）
    pub(crate) fn from_validated(rows: Vec<Vec<u8>>, columns: usize) -> Self {
        debug_assert!(!rows.is_empty() && columns > 0);
        debug_assert!(rows.iter().all(|r| r.len() == columns));
        Self { rows, columns }
    }

    /// 护士数 R
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 班次数 C
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// 决策变量个数 R × C
    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.columns
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[u8]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<u8> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// 每行的班次合计
    pub fn row_sums(&self) -> Vec<u32> {
        self.rows
            .iter()
            .map(|r| r.iter().map(|&v| u32::from(v)).sum())
            .collect()
    }

    /// 每列的指派合计
    pub fn column_sums(&self) -> Vec<u32> {
        let mut sums = vec![0u32; self.columns];
        for row in &self.rows {
            for (j, &v) in row.iter().enumerate() {
                sums[j] += u32::from(v);
            }
        }
        sums
    }

    /// 全部指派数 ΣΣX_ij
    pub fn total_assignments(&self) -> u32 {
        self.rows
            .iter()
            .flat_map(|r| r.iter())
            .map(|&v| u32::from(v))
            .sum()
    }
}

// ==========================================
// ImportedMatrix - 导入结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct ImportedMatrix {
    pub import_id: Uuid,
    pub source_name: String,        // 文件名或上传标识
    pub format: UploadFormat,
    pub imported_at: DateTime<Utc>,
    pub matrix: AssignmentMatrix,
}
