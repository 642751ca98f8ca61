// ==========================================
// 护理排班可行性看板 - 矩阵校验器
// ==========================================
// 职责: 将外部表格转换为 AssignmentMatrix
// 规则:
// - 至少 1 行 1 列
// - 所有行列数一致
// - 单元格严格为 0 或 1（"1.0" 这类整数值文本可接受）
// 错误中的行列号从 1 开始，直接面向用户
// ==========================================

use crate::domain::AssignmentMatrix;
use crate::engine::error::{EngineError, EngineResult};

pub struct MatrixValidator;

impl MatrixValidator {
    /// 从数值行构造矩阵
    pub fn from_binary_rows(rows: Vec<Vec<u8>>) -> EngineResult<AssignmentMatrix> {
        let columns = Self::check_shape(rows.iter().map(|r| r.len()))?;

        for (i, row) in rows.iter().enumerate() {
            if let Some(j) = row.iter().position(|&v| v > 1) {
                return Err(EngineError::NonBinaryCell {
                    row: i + 1,
                    column: j + 1,
                    value: row[j].to_string(),
                });
            }
        }

        Ok(AssignmentMatrix::from_validated(rows, columns))
    }

    /// 从文本行构造矩阵（导入器输出）
    pub fn from_text_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> EngineResult<AssignmentMatrix> {
        let columns = Self::check_shape(rows.iter().map(|r| r.len()))?;

        let mut parsed = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(columns);
            for (j, raw) in row.iter().enumerate() {
                cells.push(Self::parse_cell(raw.as_ref(), i + 1, j + 1)?);
            }
            parsed.push(cells);
        }

        Ok(AssignmentMatrix::from_validated(parsed, columns))
    }

    /// 解析单个单元格
    pub fn parse_cell(raw: &str, row: usize, column: usize) -> EngineResult<u8> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(EngineError::BlankCell { row, column });
        }

        let non_binary = || EngineError::NonBinaryCell {
            row,
            column,
            value: value.to_string(),
        };

        let number: f64 = value.parse().map_err(|_| non_binary())?;
        if number == 0.0 {
            Ok(0)
        } else if number == 1.0 {
            Ok(1)
        } else {
            Err(non_binary())
        }
    }

    /// 校验形状，返回列数
    fn check_shape(lengths: impl Iterator<Item = usize>) -> EngineResult<usize> {
        let mut expected: Option<usize> = None;
        for (i, len) in lengths.enumerate() {
            match expected {
                None => {
                    if len == 0 {
                        return Err(EngineError::EmptyMatrix);
                    }
                    expected = Some(len);
                }
                Some(cols) if cols != len => {
                    return Err(EngineError::RaggedRow {
                        row: i + 1,
                        expected: cols,
                        actual: len,
                    });
                }
                Some(_) => {}
            }
        }
        expected.ok_or(EngineError::EmptyMatrix)
    }
}

impl TryFrom<Vec<Vec<u8>>> for AssignmentMatrix {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        MatrixValidator::from_binary_rows(rows)
    }
}
