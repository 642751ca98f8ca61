// ==========================================
// 护理排班可行性看板 - 矩阵导入器实现
// ==========================================
// 流程: 读取 → 解析（无表头）→ 二元校验 → ImportedMatrix
// 说明: 文件读取走 tokio::fs，解析与校验为同步纯计算
// ==========================================

use crate::domain::{ImportedMatrix, UploadFormat};
use crate::engine::MatrixValidator;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalMatrixParser;
use crate::importer::matrix_importer_trait::MatrixImporter;
use chrono::Utc;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// MatrixImporterImpl - 矩阵导入器实现
// ==========================================
#[derive(Default)]
pub struct MatrixImporterImpl {
    parser: UniversalMatrixParser,
}

impl MatrixImporterImpl {
    pub fn new() -> Self {
        Self {
            parser: UniversalMatrixParser,
        }
    }

    /// 从路径导入，格式须与扩展名一致
    async fn import_path(&self, path: &Path, expected: &[UploadFormat]) -> ImportResult<ImportedMatrix> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let format = UploadFormat::from_extension(&ext)
            .filter(|f| expected.contains(f))
            .ok_or_else(|| ImportError::UnsupportedFormat(ext.clone()))?;

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let bytes = tokio::fs::read(path).await?;
        let source_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        self.import_bytes(&source_name, format, &bytes).await
    }
}

#[async_trait::async_trait]
impl MatrixImporter for MatrixImporterImpl {
    async fn import_from_excel<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportedMatrix> {
        self.import_path(file_path.as_ref(), &[UploadFormat::Xlsx, UploadFormat::Xls])
            .await
    }

    async fn import_from_csv<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportedMatrix> {
        self.import_path(file_path.as_ref(), &[UploadFormat::Csv]).await
    }

    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn import_bytes(
        &self,
        source_name: &str,
        format: UploadFormat,
        bytes: &[u8],
    ) -> ImportResult<ImportedMatrix> {
        let import_id = Uuid::new_v4();
        info!(import_id = %import_id, source = %source_name, format = %format, "开始导入指派矩阵");

        // === 步骤 1: 解析表格 ===
        let table = self.parser.parse_bytes(format, bytes).map_err(|e| {
            error!(import_id = %import_id, error = %e, "文件解析失败");
            e
        })?;
        debug!(rows = table.len(), "表格解析完成");

        // === 步骤 2: 二元校验 ===
        let matrix = MatrixValidator::from_text_rows(&table).map_err(|e| {
            warn!(import_id = %import_id, error = %e, "矩阵校验失败");
            ImportError::from(e)
        })?;

        info!(
            import_id = %import_id,
            rows = matrix.row_count(),
            columns = matrix.column_count(),
            "指派矩阵导入完成"
        );

        Ok(ImportedMatrix {
            import_id,
            source_name: source_name.to_string(),
            format,
            imported_at: Utc::now(),
            matrix,
        })
    }

    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> Vec<ImportResult<ImportedMatrix>> {
        use futures::future::join_all;

        info!(count = file_paths.len(), "开始批量导入文件");

        let import_tasks = file_paths.into_iter().map(|path| async move {
            let path = path.as_ref();
            let result = match UploadFormat::from_extension(
                path.extension().and_then(|e| e.to_str()).unwrap_or(""),
            ) {
                Some(f) if f.is_excel() => self.import_from_excel(path).await,
                Some(_) => self.import_from_csv(path).await,
                None => Err(ImportError::UnsupportedFormat(path.display().to_string())),
            };
            if let Err(e) = &result {
                error!(file = %path.display(), error = %e, "文件导入失败");
            }
            result
        });

        // 并发执行所有导入任务
        let results = join_all(import_tasks).await;

        info!(
            total = results.len(),
            success = results.iter().filter(|r| r.is_ok()).count(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "批量导入完成"
        );

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineError;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[tokio::test]
    async fn test_import_bytes_csv() {
        let importer = MatrixImporterImpl::new();
        let imported = importer
            .import_bytes("Xij.csv", UploadFormat::Csv, b"1,0,1\n0,0,1\n")
            .await
            .unwrap();

        assert_eq!(imported.source_name, "Xij.csv");
        assert_eq!(imported.format, UploadFormat::Csv);
        assert_eq!(imported.matrix.row_count(), 2);
        assert_eq!(imported.matrix.row_sums(), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_import_bytes_rejects_non_binary() {
        let importer = MatrixImporterImpl::new();
        let err = importer
            .import_bytes("bad.csv", UploadFormat::Csv, b"1,0\n0,7\n")
            .await
            .unwrap_err();

        match err {
            ImportError::InvalidMatrix(EngineError::NonBinaryCell { row, column, value }) => {
                assert_eq!((row, column), (2, 2));
                assert_eq!(value, "7");
            }
            other => panic!("Expected NonBinaryCell, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_import_bytes_empty_file() {
        let importer = MatrixImporterImpl::new();
        let err = importer
            .import_bytes("empty.csv", UploadFormat::Csv, b"")
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::InvalidMatrix(EngineError::EmptyMatrix)));
    }

    #[tokio::test]
    async fn test_import_from_csv_path() {
        let file = csv_file("1,1,1,1,1,1\n");
        let imported = MatrixImporterImpl::new()
            .import_from_csv(file.path())
            .await
            .unwrap();
        assert_eq!(imported.matrix.row_sums(), vec![6]);
    }

    #[tokio::test]
    async fn test_import_from_excel_rejects_csv_extension() {
        let file = csv_file("1,0\n");
        let err = MatrixImporterImpl::new()
            .import_from_excel(file.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(ext) if ext == "csv"));
    }

    #[tokio::test]
    async fn test_batch_import_keeps_order_and_isolates_failures() {
        let good = csv_file("1,0\n0,1\n");
        let bad = csv_file("1,2\n");
        let importer = MatrixImporterImpl::new();

        let results = importer
            .batch_import(vec![
                good.path().to_path_buf(),
                bad.path().to_path_buf(),
                std::path::PathBuf::from("missing.csv"),
            ])
            .await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(ImportError::InvalidMatrix(_))));
        assert!(matches!(results[2], Err(ImportError::FileNotFound(_))));
    }
}
