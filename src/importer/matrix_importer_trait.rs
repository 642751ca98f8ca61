// ==========================================
// 护理排班可行性看板 - 矩阵导入 Trait
// ==========================================
// 职责: 定义矩阵导入接口（不包含实现）
// 流程: 文件读取 → 表格解析 → 二元校验 → AssignmentMatrix
// ==========================================

use crate::domain::{ImportedMatrix, UploadFormat};
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// MatrixImporter Trait
// ==========================================
// 实现者: MatrixImporterImpl
#[async_trait]
pub trait MatrixImporter: Send + Sync {
    /// 从 Excel 文件导入（.xlsx / .xls，第一个工作表，无表头）
    async fn import_from_excel<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportedMatrix>;

    /// 从 CSV 文件导入（无表头）
    async fn import_from_csv<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportedMatrix>;

    /// 从上传的字节导入
    ///
    /// # 参数
    /// - source_name: 上传文件名（仅用于日志与结果展示）
    /// - format: 声明的文件格式
    /// - bytes: 文件内容
    async fn import_bytes(
        &self,
        source_name: &str,
        format: UploadFormat,
        bytes: &[u8],
    ) -> ImportResult<ImportedMatrix>;

    /// 批量导入多个文件（并发执行）
    ///
    /// # 说明
    /// - 按扩展名选择 Excel 或 CSV
    /// - 每个文件的导入相互独立，某个文件失败不影响其他文件
    /// - 结果顺序与输入顺序一致
    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> Vec<ImportResult<ImportedMatrix>>;
}
