// ==========================================
// 护理排班可行性看板 - 导入层
// ==========================================
// 职责: 外部表格 → AssignmentMatrix
// 支持: Excel, CSV（无表头）
// ==========================================

pub mod error;
pub mod file_parser;
pub mod matrix_importer_impl;
pub mod matrix_importer_trait;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{
    CsvMatrixParser, ExcelMatrixParser, MatrixParser, RawTable, UniversalMatrixParser,
};
pub use matrix_importer_impl::MatrixImporterImpl;
pub use matrix_importer_trait::MatrixImporter;
