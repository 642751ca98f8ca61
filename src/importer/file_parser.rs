// ==========================================
// 护理排班可行性看板 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls, 第一个工作表) / CSV (.csv)
// 表格无表头: 每一行都是数据行（行 = 护士, 列 = 班次）
// 输出: 去空白后的文本单元格，完全空白的行被跳过，行尾空单元格被裁剪
// ==========================================

use crate::domain::UploadFormat;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Data, Reader, Xls, Xlsx};
use csv::ReaderBuilder;
use std::fmt::Display;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// 原始表格（行 × 单元格文本）
pub type RawTable = Vec<Vec<String>>;

// ==========================================
// MatrixParser Trait
// ==========================================
// 实现者: CsvMatrixParser, ExcelMatrixParser
pub trait MatrixParser: Send + Sync {
    /// 从文件解析
    fn parse_path(&self, file_path: &Path) -> ImportResult<RawTable>;

    /// 从内存字节解析（上传文件）
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<RawTable>;
}

/// 清理一行: 裁剪行尾空单元格；整行为空时返回 None
fn normalize_row(mut cells: Vec<String>) -> Option<Vec<String>> {
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    if cells.is_empty() {
        None
    } else {
        Some(cells)
    }
}

/// 检查文件存在且扩展名符合
fn check_file(path: &Path, allowed: &[&str]) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !allowed.contains(&ext.as_str()) {
        return Err(ImportError::UnsupportedFormat(ext));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvMatrixParser;

impl CsvMatrixParser {
    fn read_table<R: Read>(&self, source: R) -> ImportResult<RawTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 行长度不一致交给矩阵校验报告
            .from_reader(source);

        let mut table = Vec::new();
        for result in reader.records() {
            let record = result?;
            let cells: Vec<String> = record
                .iter()
                .map(|value| value.trim_start_matches('\u{feff}').trim().to_string())
                .collect();

            if let Some(row) = normalize_row(cells) {
                table.push(row);
            }
        }

        Ok(table)
    }
}

impl MatrixParser for CsvMatrixParser {
    fn parse_path(&self, file_path: &Path) -> ImportResult<RawTable> {
        check_file(file_path, &["csv"])?;
        let file = File::open(file_path)?;
        self.read_table(file)
    }

    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<RawTable> {
        self.read_table(bytes)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelMatrixParser {
    format: UploadFormat,
}

impl ExcelMatrixParser {
    pub fn xlsx() -> Self {
        Self {
            format: UploadFormat::Xlsx,
        }
    }

    pub fn xls() -> Self {
        Self {
            format: UploadFormat::Xls,
        }
    }

    /// 读取第一个工作表
    fn read_first_sheet<RS, R>(workbook: &mut R) -> ImportResult<RawTable>
    where
        RS: Read + Seek,
        R: Reader<RS>,
        R::Error: Display,
    {
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let table = range
            .rows()
            .filter_map(|row: &[Data]| {
                normalize_row(row.iter().map(|cell| cell.to_string().trim().to_string()).collect())
            })
            .collect();

        Ok(table)
    }
}

impl MatrixParser for ExcelMatrixParser {
    fn parse_path(&self, file_path: &Path) -> ImportResult<RawTable> {
        check_file(file_path, &["xlsx", "xls"])?;

        match self.format {
            UploadFormat::Xls => {
                let mut workbook: Xls<_> = open_workbook(file_path)
                    .map_err(|e: calamine::XlsError| ImportError::ExcelParseError(e.to_string()))?;
                Self::read_first_sheet(&mut workbook)
            }
            _ => {
                let mut workbook: Xlsx<_> = open_workbook(file_path).map_err(
                    |e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()),
                )?;
                Self::read_first_sheet(&mut workbook)
            }
        }
    }

    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<RawTable> {
        let cursor = Cursor::new(bytes.to_vec());

        match self.format {
            UploadFormat::Xls => {
                let mut workbook = Xls::new(cursor)
                    .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;
                Self::read_first_sheet(&mut workbook)
            }
            _ => {
                let mut workbook = Xlsx::new(cursor)
                    .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;
                Self::read_first_sheet(&mut workbook)
            }
        }
    }
}

// ==========================================
// 通用文件解析器（根据扩展名/声明格式自动选择）
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct UniversalMatrixParser;

impl UniversalMatrixParser {
    fn parser_for(format: UploadFormat) -> Box<dyn MatrixParser> {
        match format {
            UploadFormat::Csv => Box::new(CsvMatrixParser),
            UploadFormat::Xlsx => Box::new(ExcelMatrixParser::xlsx()),
            UploadFormat::Xls => Box::new(ExcelMatrixParser::xls()),
        }
    }

    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let format =
            UploadFormat::from_extension(&ext).ok_or(ImportError::UnsupportedFormat(ext))?;
        Self::parser_for(format).parse_path(path)
    }

    pub fn parse_bytes(&self, format: UploadFormat, bytes: &[u8]) -> ImportResult<RawTable> {
        Self::parser_for(format).parse_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_csv_parser_headerless() {
        let file = csv_file("1,0,1\n0,1,1\n");
        let table = CsvMatrixParser.parse_path(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table[0], vec!["1", "0", "1"]);
        assert_eq!(table[1], vec!["0", "1", "1"]);
    }

    #[test]
    fn test_csv_parser_skip_empty_rows_and_trailing_cells() {
        let table = CsvMatrixParser
            .parse_bytes(b"1, 0 ,1,\n,,\n\n0,1,1\n")
            .unwrap();

        assert_eq!(table, vec![vec!["1", "0", "1"], vec!["0", "1", "1"]]);
    }

    #[test]
    fn test_csv_parser_strips_bom() {
        let table = CsvMatrixParser.parse_bytes("\u{feff}1,0\n".as_bytes()).unwrap();
        assert_eq!(table, vec![vec!["1", "0"]]);
    }

    #[test]
    fn test_csv_parser_keeps_ragged_rows() {
        let table = CsvMatrixParser.parse_bytes(b"1,0,1\n0,1\n").unwrap();
        assert_eq!(table[1].len(), 2);
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvMatrixParser.parse_path(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_wrong_extension() {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "1,0").unwrap();
        let result = CsvMatrixParser.parse_path(file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "txt"));
    }

    #[test]
    fn test_excel_parser_rejects_garbage_bytes() {
        let result = ExcelMatrixParser::xlsx().parse_bytes(b"definitely not a zip archive");
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));

        let result = ExcelMatrixParser::xls().parse_bytes(b"not an ole2 file either");
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
    }

    #[test]
    fn test_universal_parser_unknown_extension() {
        let result = UniversalMatrixParser.parse("matrix.pdf");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "pdf"));
    }

    #[test]
    fn test_universal_parser_dispatches_csv() {
        let file = csv_file("1,1\n");
        let table = UniversalMatrixParser.parse(file.path()).unwrap();
        assert_eq!(table, vec![vec!["1", "1"]]);

        let table = UniversalMatrixParser
            .parse_bytes(UploadFormat::Csv, b"0,1\n")
            .unwrap();
        assert_eq!(table, vec![vec!["0", "1"]]);
    }
}
